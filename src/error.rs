//! Error types for geometry contract violations and rejected configuration.

use thiserror::Error;

/// Malformed geometric input passed to a resampling or interpolation boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Two chains that must be interpolated elementwise differ in length.
    #[error("chain length mismatch: {left} vs {right} vertices")]
    LengthMismatch { left: usize, right: usize },

    /// Resampling proportions must be sorted ascending.
    #[error("proportions not sorted: {current} at index {index} follows {previous}")]
    UnsortedProportions {
        index: usize,
        previous: f32,
        current: f32,
    },

    /// A proportion lies outside [0, 1] or is not a finite number.
    #[error("proportion {value} at index {index} is outside [0, 1]")]
    ProportionOutOfRange { index: usize, value: f32 },

    /// An interpolation factor is not a finite number.
    #[error("interpolation factor {0} is not finite")]
    NonFiniteFactor(f32),

    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    /// Samples were requested from a chain without vertices.
    #[error("cannot sample {requested} points from an empty chain")]
    EmptyChain { requested: usize },
}

/// A configuration value outside its accepted range.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid configuration: {field} = {value} ({reason})")]
pub struct ConfigError {
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

impl ConfigError {
    pub(crate) fn new(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self {
            field,
            value,
            reason,
        }
    }
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
