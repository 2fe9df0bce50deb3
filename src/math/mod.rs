//! Math utilities module
//!
//! Provides the 2D point type used throughout the crate and tolerance-based comparisons.

// Re-export commonly used glam types
pub use glam::Vec2;

/// A 2D point. Chains are ordered sequences of these.
pub type Point = Vec2;

/// Default per-axis tolerance when comparing points for equality.
pub const DEFAULT_POINT_TOLERANCE: f32 = 1e-6;

/// Returns true when `a` and `b` differ by at most `tolerance` on each axis.
pub fn points_eq(a: Point, b: Point, tolerance: f32) -> bool {
    a.abs_diff_eq(b, tolerance)
}
