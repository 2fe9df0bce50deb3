use super::fixed::FixedSet;
use crate::geometry::arc_length_proportions;
use crate::math::Point;

/// Everything one transitioning chain needs between integration steps.
///
/// `mesh`, `velocities` and `sample_proportions` always have the same length. The
/// fixed positions are `lerp(original_fixed, target, fixed_movement_proportion)`, one
/// per index in `fixed`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub(crate) mesh: Vec<Point>,
    pub(crate) velocities: Vec<Point>,
    pub(crate) sample_proportions: Vec<f32>,
    pub(crate) fixed: FixedSet,
    pub(crate) target: Vec<Point>,
    pub(crate) original_fixed: Vec<Point>,
    pub(crate) fixed_movement_proportion: f32,
    pub(crate) in_motion: bool,
}

impl SimulationState {
    /// A state holding `vertices` with nothing left to simulate.
    pub fn at_rest(vertices: Vec<Point>) -> Self {
        let count = vertices.len();
        Self {
            sample_proportions: arc_length_proportions(&vertices),
            velocities: vec![Point::ZERO; count],
            fixed: FixedSet::new(),
            original_fixed: vertices.clone(),
            target: vertices.clone(),
            mesh: vertices,
            fixed_movement_proportion: 1.0,
            in_motion: false,
        }
    }

    /// The live chain a renderer should draw.
    pub fn mesh(&self) -> &[Point] {
        &self.mesh
    }

    pub fn velocities(&self) -> &[Point] {
        &self.velocities
    }

    pub fn sample_proportions(&self) -> &[f32] {
        &self.sample_proportions
    }

    pub fn fixed(&self) -> &FixedSet {
        &self.fixed
    }

    pub fn target(&self) -> &[Point] {
        &self.target
    }

    /// The current chain sampled at the target's own arc-length proportions.
    pub fn original_fixed(&self) -> &[Point] {
        &self.original_fixed
    }

    pub fn fixed_movement_proportion(&self) -> f32 {
        self.fixed_movement_proportion
    }

    /// Sets the blend between the original and target anchors, clamped to `[0, 1]`.
    /// Non-finite values are ignored.
    pub fn set_fixed_movement_proportion(&mut self, proportion: f32) {
        if proportion.is_finite() {
            self.fixed_movement_proportion = proportion.clamp(0.0, 1.0);
        }
    }

    pub fn in_motion(&self) -> bool {
        self.in_motion
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.len()
    }

    /// Sum of squared velocities over the free vertices.
    pub fn free_kinetic_energy(&self) -> f32 {
        self.velocities
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.fixed.contains(*i))
            .map(|(_, v)| v.length_squared())
            .sum()
    }

    /// Replaces the mesh with the plain target and stops the simulation.
    pub(crate) fn settle(&mut self) {
        *self = Self::at_rest(std::mem::take(&mut self.target));
    }
}
