//! Chain geometry
//!
//! Arc-length measurement and proportion-based resampling of 2D polylines.

mod arc;
mod sample;

pub use arc::{arc_length_proportions, even_spacing, length};
pub use sample::{lerp, remove_consecutive_duplicates, remove_consecutive_duplicates_with_tolerance, resample};
