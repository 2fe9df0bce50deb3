//! Simulation stepping
//!
//! The damped tension integrator and the scheduler that decides how many of its steps
//! run per rendered frame.

mod integrator;
mod scheduler;

pub use integrator::{StepOutcome, TensionIntegrator};
pub use scheduler::FrameScheduler;
