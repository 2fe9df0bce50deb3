//! Transition planning
//!
//! Turns a source chain and a target chain into a simulation mesh whose fixed vertices
//! follow the target and whose free vertices are left to the integrator.

mod fixed;
mod planner;
mod state;

pub use fixed::FixedSet;
pub use planner::{merge_proportions, Plan, TransitionPlanner};
pub use state::SimulationState;
