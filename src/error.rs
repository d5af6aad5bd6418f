//! Error taxonomy for kinetics simulations
//!
//! All failures are local and terminal: a simulation either starts with a
//! valid configuration or it does not start at all. There is no retry, no
//! partial recovery and no fallback model.
//!
//! # Taxonomy
//!
//! - [`KineticsError::InvalidModel`]: a model tag outside the known reaction
//!   orders reached a parsing surface (menu choice or string form).
//! - [`KineticsError::MissingReverseRate`] /
//!   [`KineticsError::UnexpectedReverseRate`]: the reverse-rate pairing
//!   invariant (a reverse rate exists if and only if the model is
//!   reversible), checked once before the stepping loop.
//! - [`KineticsError::InvalidInput`]: a user-supplied value failed range
//!   validation at the input-collection boundary. Never raised by the core.
//!
//! Numerical degradation (Euler overshoot producing negative or diverging
//! concentrations under a coarse step size) is deliberately **not** an error.
//! The simulator logs a warning and keeps integrating.

use thiserror::Error;

/// Errors produced while configuring or running a kinetics simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KineticsError {
    /// A model tag outside {first-order, second-order, reversible}.
    #[error("invalid reaction model: {0}")]
    InvalidModel(String),

    /// The reversible model was selected without a reverse rate constant.
    #[error("reversible model requires a reverse rate constant")]
    MissingReverseRate,

    /// A reverse rate constant was supplied for a non-reversible model.
    #[error("reverse rate constant given but model '{0}' is not reversible")]
    UnexpectedReverseRate(String),

    /// A user-supplied value failed validation at the input boundary.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
