//! Simulation configuration
//!
//! [`SimulationConfig`] bundles everything one run needs: the reaction model,
//! its rate constants, the initial concentration and the time discretization.
//! It is immutable once constructed; each run owns an independent config, so
//! there is no shared state between simulations.
//!
//! # Validation Contract
//!
//! The config is expected to arrive from a validated input boundary (the CLI
//! checks numeric ranges before building one). The core itself only enforces
//! the structural invariant it cannot delegate: the reverse rate constant is
//! present if and only if the model is reversible. That check happens in
//! [`SimulationConfig::rate_law`], once, before any stepping.

use crate::error::KineticsError;
use crate::kinetics::{RateLaw, ReactionModel};

// =================================================================================================
// Simulation Configuration
// =================================================================================================

/// Configuration of a single kinetics simulation run.
///
/// # Fields
///
/// - `model`: reaction-order model to integrate
/// - `initial_concentration`: C0 \[mol/L\], ≥ 0
/// - `forward_rate`: k, ≥ 0
/// - `reverse_rate`: k_rev, present iff `model` is reversible
/// - `end_time`: total simulated time T \[s\], > 0
/// - `step_size`: Euler step dt \[s\], > 0 and ≤ T
///
/// Range constraints are the input boundary's responsibility; see the module
/// documentation.
///
/// # Example
///
/// ```rust
/// use kinet_rs::kinetics::ReactionModel;
/// use kinet_rs::simulation::SimulationConfig;
///
/// let config = SimulationConfig::new(ReactionModel::FirstOrder, 1.0, 1.0, 10.0, 0.01);
/// assert!(config.rate_law().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Reaction-order model.
    pub model: ReactionModel,

    /// Initial concentration C0 [mol/L].
    pub initial_concentration: f64,

    /// Forward rate constant k.
    pub forward_rate: f64,

    /// Reverse rate constant k_rev; `Some` iff the model is reversible.
    pub reverse_rate: Option<f64>,

    /// Total simulated time T [s].
    pub end_time: f64,

    /// Euler time step dt [s].
    pub step_size: f64,
}

impl SimulationConfig {
    /// Create a configuration for an irreversible model.
    pub fn new(
        model: ReactionModel,
        initial_concentration: f64,
        forward_rate: f64,
        end_time: f64,
        step_size: f64,
    ) -> Self {
        Self {
            model,
            initial_concentration,
            forward_rate,
            reverse_rate: None,
            end_time,
            step_size,
        }
    }

    /// Create a configuration for the reversible model.
    pub fn reversible(
        initial_concentration: f64,
        forward_rate: f64,
        reverse_rate: f64,
        end_time: f64,
        step_size: f64,
    ) -> Self {
        Self {
            model: ReactionModel::Reversible,
            initial_concentration,
            forward_rate,
            reverse_rate: Some(reverse_rate),
            end_time,
            step_size,
        }
    }

    /// Build the validated rate law for this configuration.
    ///
    /// # Errors
    ///
    /// Fails when the reverse-rate pairing invariant is violated; see
    /// [`RateLaw::new`].
    pub fn rate_law(&self) -> Result<RateLaw, KineticsError> {
        RateLaw::new(
            self.model,
            self.forward_rate,
            self.reverse_rate,
            self.initial_concentration,
        )
    }

    /// Check the structural invariant without building the law.
    pub fn validate(&self) -> Result<(), KineticsError> {
        self.rate_law().map(|_| ())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
