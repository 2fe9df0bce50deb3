use crate::config::IntegratorParams;
use crate::error::{GeometryError, Result};
use crate::geometry::{length, lerp};
use crate::math::Vec2;
use crate::transition::SimulationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing was simulated; the state was already at rest.
    Idle,
    /// At least one free vertex is still moving.
    Moving,
    /// Motion died out this step and the mesh was replaced by the target.
    Settled,
}

impl StepOutcome {
    pub fn is_moving(self) -> bool {
        matches!(self, StepOutcome::Moving)
    }
}

/// Damped tension integrator for a planned mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TensionIntegrator {
    params: IntegratorParams,
}

impl TensionIntegrator {
    pub fn new(params: IntegratorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IntegratorParams {
        &self.params
    }

    /// Advances `state` by one step.
    ///
    /// Fixed vertices are moved to their anchors first, then every free vertex with two
    /// neighbours accelerates toward them in proportion to their offset and inversely to
    /// the proportion gap between them and the total chain length. Once no velocity
    /// component exceeds `min_velocity / length` the mesh becomes the plain target.
    pub fn step(&self, state: &mut SimulationState) -> Result<StepOutcome> {
        if !state.in_motion {
            return Ok(StepOutcome::Idle);
        }

        let anchors = lerp(
            &state.original_fixed,
            &state.target,
            state.fixed_movement_proportion,
        )?;
        if anchors.len() != state.fixed.len() {
            return Err(GeometryError::LengthMismatch {
                left: state.fixed.len(),
                right: anchors.len(),
            });
        }
        if state.fixed.max().is_some_and(|i| i >= state.mesh.len()) {
            return Err(GeometryError::LengthMismatch {
                left: state.fixed.len(),
                right: state.mesh.len(),
            });
        }
        for (index, anchor) in state.fixed.iter().zip(anchors) {
            state.mesh[index] = anchor;
        }

        let chain_length = length(&state.mesh);
        if !(chain_length.is_finite() && chain_length > 0.0) {
            state.settle();
            return Ok(StepOutcome::Settled);
        }

        let live = self.integrate(state, chain_length);
        if !live {
            state.settle();
            return Ok(StepOutcome::Settled);
        }

        Ok(StepOutcome::Moving)
    }

    fn integrate(&self, state: &mut SimulationState, chain_length: f32) -> bool {
        let SimulationState {
            mesh,
            velocities,
            sample_proportions: proportions,
            fixed,
            ..
        } = state;

        let p = &self.params;
        let min_velocity = p.min_velocity / chain_length;
        let max_acceleration = Vec2::splat(p.max_acceleration);
        let count = mesh.len();

        let mut live = false;
        let mut next = Vec::with_capacity(count);

        for i in 0..count {
            let position = mesh[i];
            if fixed.contains(i) || i == 0 || i + 1 == count {
                next.push(position);
                continue;
            }

            let (prev, following) = (mesh[i - 1], mesh[i + 1]);
            let d_prev = proportions[i - 1] - proportions[i];
            let d_next = proportions[i + 1] - proportions[i];

            // Samples taken on top of each other carry no band material between them.
            if d_prev.abs() < p.degeneracy_epsilon {
                next.push(prev);
                continue;
            }
            if d_next.abs() < p.degeneracy_epsilon {
                next.push(following);
                continue;
            }

            let tension = (prev - position) / d_prev.abs() + (following - position) / d_next.abs();
            let acceleration = (tension / chain_length).clamp(-max_acceleration, max_acceleration);

            let velocity = &mut velocities[i];
            *velocity = (*velocity + acceleration) * p.damping;
            if velocity.abs().max_element() > min_velocity {
                live = true;
            }

            next.push(position + *velocity / p.velocity_slowdown);
        }

        if live {
            *mesh = next;
        }
        live
    }
}
