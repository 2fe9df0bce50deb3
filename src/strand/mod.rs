//! Strands
//!
//! A strand owns one animated polyline: its simulation state, the integrator that moves
//! it and the scheduler that paces it. A bundle holds several strands that animate
//! side by side.

mod bundle;
mod simulation;

pub use bundle::StrandBundle;
pub use simulation::StrandSimulation;
