//! Simulation configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::DEFAULT_POINT_TOLERANCE;

/// Constants used by the integrator for a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntegratorParams {
    /// Stored velocity is divided by this before it is added to a position.
    pub velocity_slowdown: f32,
    /// Velocity multiplier applied every step.
    pub damping: f32,
    /// Per-axis clamp on the tension acceleration.
    pub max_acceleration: f32,
    /// The simulation is settled once no velocity component exceeds this divided by the
    /// current chain length.
    pub min_velocity: f32,
    /// Proportion gaps smaller than this snap a vertex onto its neighbour.
    pub degeneracy_epsilon: f32,
}

impl Default for IntegratorParams {
    fn default() -> Self {
        Self {
            velocity_slowdown: 5.0,
            damping: 1.0 / 1.01,
            max_acceleration: 0.3,
            min_velocity: 0.1,
            degeneracy_epsilon: 1e-5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Logical integration rate, independent of the render rate.
    pub steps_per_second: f64,
    /// Upper bound on integration steps run for a single frame.
    pub max_steps_per_frame: u32,
    /// Number of evenly spaced free samples in a planned mesh.
    pub resolution: usize,
    /// Tolerance for dropping repeated consecutive target vertices.
    pub duplicate_tolerance: f32,
    pub integrator: IntegratorParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps_per_second: 1000.0,
            max_steps_per_frame: 100,
            resolution: 20,
            duplicate_tolerance: DEFAULT_POINT_TOLERANCE,
            integrator: IntegratorParams::default(),
        }
    }
}

impl SimulationConfig {
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.integrator;
        let checks: [(bool, &'static str, f64, &'static str); 9] = [
            (
                self.steps_per_second.is_finite() && self.steps_per_second > 0.0,
                "steps_per_second",
                self.steps_per_second,
                "must be positive",
            ),
            (
                self.max_steps_per_frame >= 1,
                "max_steps_per_frame",
                f64::from(self.max_steps_per_frame),
                "must be at least 1",
            ),
            (
                self.resolution >= 2,
                "resolution",
                self.resolution as f64,
                "must be at least 2",
            ),
            (
                self.duplicate_tolerance >= 0.0,
                "duplicate_tolerance",
                f64::from(self.duplicate_tolerance),
                "must not be negative",
            ),
            (
                p.velocity_slowdown.is_finite() && p.velocity_slowdown > 0.0,
                "velocity_slowdown",
                f64::from(p.velocity_slowdown),
                "must be positive",
            ),
            (
                p.damping > 0.0 && p.damping <= 1.0,
                "damping",
                f64::from(p.damping),
                "must be in (0, 1]",
            ),
            (
                p.max_acceleration >= 0.0,
                "max_acceleration",
                f64::from(p.max_acceleration),
                "must not be negative",
            ),
            (
                p.min_velocity.is_finite() && p.min_velocity > 0.0,
                "min_velocity",
                f64::from(p.min_velocity),
                "must be positive",
            ),
            (
                p.degeneracy_epsilon >= 0.0,
                "degeneracy_epsilon",
                f64::from(p.degeneracy_epsilon),
                "must not be negative",
            ),
        ];

        match checks.into_iter().find(|(ok, ..)| !ok) {
            Some((_, field, value, reason)) => Err(ConfigError::new(field, value, reason)),
            None => Ok(()),
        }
    }
}

pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }

    pub fn steps_per_second(mut self, steps_per_second: f64) -> Self {
        self.config.steps_per_second = steps_per_second;
        self
    }

    pub fn max_steps_per_frame(mut self, max_steps: u32) -> Self {
        self.config.max_steps_per_frame = max_steps;
        self
    }

    pub fn resolution(mut self, resolution: usize) -> Self {
        self.config.resolution = resolution;
        self
    }

    pub fn duplicate_tolerance(mut self, tolerance: f32) -> Self {
        self.config.duplicate_tolerance = tolerance;
        self
    }

    pub fn velocity_slowdown(mut self, slowdown: f32) -> Self {
        self.config.integrator.velocity_slowdown = slowdown;
        self
    }

    pub fn damping(mut self, damping: f32) -> Self {
        self.config.integrator.damping = damping;
        self
    }

    pub fn max_acceleration(mut self, max_acceleration: f32) -> Self {
        self.config.integrator.max_acceleration = max_acceleration;
        self
    }

    pub fn min_velocity(mut self, min_velocity: f32) -> Self {
        self.config.integrator.min_velocity = min_velocity;
        self
    }

    pub fn degeneracy_epsilon(mut self, epsilon: f32) -> Self {
        self.config.integrator.degeneracy_epsilon = epsilon;
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
