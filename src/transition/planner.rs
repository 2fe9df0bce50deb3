use super::fixed::FixedSet;
use super::state::SimulationState;
use crate::error::{GeometryError, Result};
use crate::geometry::{arc_length_proportions, even_spacing, length, resample};
use crate::math::Point;

/// What the caller should do to reach a new target.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// There is no shape to morph along; set the chain to the target directly.
    Snap,
    /// Simulate from the returned state.
    Simulate(SimulationState),
}

/// Builds the interleaved simulation mesh for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPlanner {
    resolution: usize,
}

impl Default for TransitionPlanner {
    fn default() -> Self {
        Self { resolution: 20 }
    }
}

impl TransitionPlanner {
    pub fn new(resolution: usize) -> Self {
        Self { resolution }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Plans a transition from `current` to `target`.
    ///
    /// The target is expected to be free of consecutive duplicate vertices. Repeated
    /// vertices are tolerated but leave zero-width gaps between mesh samples, which the
    /// integrator resolves by snapping to a neighbour.
    pub fn plan(&self, current: &[Point], target: &[Point]) -> Result<Plan> {
        check_finite(current)?;
        check_finite(target)?;

        if current.len() < 2 || target.len() < 2 || length(current) <= 0.0 {
            return Ok(Plan::Snap);
        }

        let target_proportions = arc_length_proportions(target);
        let original_fixed = resample(current, &target_proportions)?;

        let free_proportions = even_spacing(0.0, 1.0, self.resolution);
        let (merged, fixed) = merge_proportions(&target_proportions, &free_proportions);

        let mesh = resample(current, &merged)?;
        let sample_proportions = arc_length_proportions(&mesh);
        let velocities = vec![Point::ZERO; mesh.len()];

        log::debug!(
            "planned transition: {} mesh vertices, {} fixed, {} -> {} target vertices",
            mesh.len(),
            fixed.len(),
            current.len(),
            target.len()
        );

        Ok(Plan::Simulate(SimulationState {
            mesh,
            velocities,
            sample_proportions,
            fixed,
            target: target.to_vec(),
            original_fixed,
            fixed_movement_proportion: 1.0,
            in_motion: true,
        }))
    }
}

fn check_finite(chain: &[Point]) -> Result<()> {
    match chain.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(GeometryError::NonFinitePoint { index }),
        None => Ok(()),
    }
}

/// Interleaves free sample proportions with the target's proportions.
///
/// Both inputs must be ascending. Before each target proportion every remaining free
/// proportion strictly below it is emitted; the target proportion follows and its
/// position is recorded as fixed. Free proportions left over past the last emitted value
/// are appended.
pub fn merge_proportions(target: &[f32], free: &[f32]) -> (Vec<f32>, FixedSet) {
    let mut merged = Vec::with_capacity(target.len() + free.len());
    let mut fixed = FixedSet::new();
    let mut next_free = 0;

    for &proportion in target {
        while let Some(&f) = free.get(next_free).filter(|&&f| f < proportion) {
            merged.push(f);
            next_free += 1;
        }
        fixed.push(merged.len());
        merged.push(proportion);
    }

    let last = merged.last().copied();
    merged.extend(
        free[next_free..]
            .iter()
            .copied()
            .filter(|&f| last.map_or(true, |l| f > l)),
    );

    (merged, fixed)
}
