//! # strand-morph
//!
//! Smooth, frame-rate independent transitions between 2D polylines, built for animating
//! the strings of permutation strand diagrams.
//!
//! ## Features
//! - Arc-length measurement and proportion-based resampling of chains
//! - Transition planning that interleaves target-anchored and free mesh vertices
//! - Damped tension integrator with guaranteed convergence onto the target
//! - Frame scheduler decoupling the simulation rate from the render rate
//! - Cross-platform: Native + WASM support
//!
//! ## Example
//! ```rust,ignore
//! use strand_morph::{SimulationConfig, StrandSimulation};
//! use glam::Vec2;
//!
//! let config = SimulationConfig::builder()
//!     .resolution(20)
//!     .max_steps_per_frame(100)
//!     .build()?;
//!
//! let mut strand = StrandSimulation::with_vertices(&[Vec2::ZERO, Vec2::new(100.0, 0.0)], config);
//! strand.transition_to(&[Vec2::ZERO, Vec2::new(50.0, 50.0), Vec2::new(100.0, 0.0)])?;
//!
//! // Once per rendered frame, with a millisecond timestamp:
//! strand.frame(now_ms)?;
//! draw(strand.vertices());
//! ```

pub mod config;
pub mod dynamics;
pub mod error;
pub mod geometry;
pub mod math;
pub mod strand;
pub mod transition;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{IntegratorParams, SimulationConfig, SimulationConfigBuilder};
pub use dynamics::{FrameScheduler, StepOutcome, TensionIntegrator};
pub use error::{ConfigError, GeometryError, Result};
pub use geometry::{
    arc_length_proportions, even_spacing, length, lerp, remove_consecutive_duplicates,
    remove_consecutive_duplicates_with_tolerance, resample,
};
pub use math::{Point, Vec2};
pub use strand::{StrandBundle, StrandSimulation};
pub use transition::{FixedSet, Plan, SimulationState, TransitionPlanner};
