//! Numerical simulation of kinetics rate laws
//!
//! This module is the HOW of the crate: given a rate law (the WHAT, defined
//! in [`crate::kinetics`]), it discretizes time and advances the
//! concentration with fixed-step forward Euler integration.
//!
//! # Workflow
//!
//! ```text
//! ┌───────────────────┐
//! │ SimulationConfig  │  model + constants + T + dt
//! └─────────┬─────────┘
//!           │  rate_law()  (pairing invariant checked once)
//! ┌─────────▼─────────┐
//! │  EulerSimulator   │  time grid + stepping loop
//! └─────────┬─────────┘
//!           │
//! ┌─────────▼─────────┐
//! │    Trajectory     │  time[i] ↔ concentration[i]
//! └───────────────────┘
//! ```
//!
//! Everything is single-threaded and synchronous: one run is one blocking
//! computation of O(T/dt) steps with no I/O inside the loop. Concurrent
//! runs, if a caller wants them, each own an independent config and
//! trajectory with no shared state.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod config;
mod euler;
mod grid;
mod trajectory;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use config::SimulationConfig;
pub use euler::EulerSimulator;
pub use grid::time_grid;
pub use trajectory::Trajectory;
