//! kinet-rs: Reaction-Kinetics Euler Simulator
//!
//! A small framework for exploring single-species reaction kinetics
//! qualitatively: pick a reaction-order model, integrate its rate law with
//! fixed-step forward Euler, then plot or export the trajectory.
//!
//! # Architecture
//!
//! The crate separates the physics from the numerics:
//!
//! 1. **Rate laws define equations** (what to integrate) — [`kinetics`]
//! 2. **The simulator provides the method** (how to integrate) — [`simulation`]
//!
//! Output rendering and data export are collaborators on the side that
//! consume a finished [`Trajectory`](simulation::Trajectory) — [`output`].
//!
//! # Quick Start
//!
//! ```rust
//! use kinet_rs::kinetics::ReactionModel;
//! use kinet_rs::simulation::{EulerSimulator, SimulationConfig};
//!
//! // 1. Configure: first-order decay, C0 = 1 mol/L, k = 1, 10 s at dt = 0.01
//! let config = SimulationConfig::new(ReactionModel::FirstOrder, 1.0, 1.0, 10.0, 0.01);
//!
//! // 2. Run
//! let trajectory = EulerSimulator::new().run(&config)?;
//!
//! // 3. Access results
//! assert_eq!(trajectory.time.len(), trajectory.concentration.len());
//! assert_eq!(trajectory.concentration[0], 1.0);
//! # Ok::<(), kinet_rs::error::KineticsError>(())
//! ```
//!
//! # Accuracy
//!
//! Forward Euler is first-order accurate and conditionally stable. With a
//! step size too large for the rate constants the concentration can
//! overshoot zero or diverge; the simulator logs a warning but does not
//! treat this as an error. Refine `step_size` when it happens.
//!
//! # Modules
//!
//! - [`kinetics`]: reaction models and rate laws (equations)
//! - [`simulation`]: time grid and Euler stepping (method)
//! - [`output`]: plotting and CSV export
//! - [`error`]: the error taxonomy

// Core modules
pub mod error;
pub mod kinetics;
pub mod output;
pub mod simulation;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use kinet_rs::prelude::*;
    //! ```
    pub use crate::error::KineticsError;
    pub use crate::kinetics::{RateLaw, ReactionModel};
    pub use crate::output::{export_trajectory_csv, plot_trajectory, CsvConfig, PlotConfig};
    pub use crate::simulation::{EulerSimulator, SimulationConfig, Trajectory};
}
