//! Rate-law evaluation
//!
//! # Mathematical Background
//!
//! The rate law gives the instantaneous rate of change of the reactant
//! concentration, dC/dt, as a function of the current concentration:
//!
//! ```text
//! First order   : dC/dt = −k·C
//! Second order  : dC/dt = −k·C²
//! Reversible    : dC/dt = −k·C + k_rev·(C0 − C)
//! ```
//!
//! The reversible law conserves total material between reactant and product:
//! `C0 − C` is the product concentration, and the reverse reaction converts
//! it back at rate `k_rev`. Its fixed point is the steady state
//! `C* = C0·k_rev/(k + k_rev)`.
//!
//! # Design (WHAT vs HOW)
//!
//! [`RateLaw`] is the WHAT of the simulation: the equation to integrate. It
//! knows nothing about time grids or stepping schemes — that is the
//! simulator's job. Evaluation is a pure function of the current
//! concentration, so the same law can be shared by any integrator.
//!
//! Construction validates the reverse-rate pairing invariant exactly once,
//! so the stepping loop never has to re-check the model on every iteration.

use crate::error::KineticsError;
use crate::kinetics::ReactionModel;

// =================================================================================================
// Rate Law
// =================================================================================================

/// Validated rate law of a single-species kinetics system.
///
/// Each variant carries exactly the constants its rate expression needs, so
/// an ill-formed combination (a reversible law without `k_rev`, or a first
/// order law with one) is unrepresentable after construction.
///
/// # Example
///
/// ```rust
/// use kinet_rs::kinetics::{RateLaw, ReactionModel};
///
/// let law = RateLaw::new(ReactionModel::FirstOrder, 2.0, None, 1.0).unwrap();
/// assert_eq!(law.eval(0.5), -1.0); // −k·C = −2·0.5
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateLaw {
    /// dC/dt = −k·C
    FirstOrder {
        /// Forward rate constant k [1/s]
        forward_rate: f64,
    },

    /// dC/dt = −k·C²
    SecondOrder {
        /// Forward rate constant k [L/(mol·s)]
        forward_rate: f64,
    },

    /// dC/dt = −k·C + k_rev·(C0 − C)
    Reversible {
        /// Forward rate constant k [1/s]
        forward_rate: f64,

        /// Reverse rate constant k_rev [1/s]
        reverse_rate: f64,

        /// Initial concentration C0 [mol/L], fixes the material balance
        initial_concentration: f64,
    },
}

impl RateLaw {
    /// Build a rate law from a model tag and its constants.
    ///
    /// This is the single place where the reverse-rate pairing invariant is
    /// enforced: `reverse_rate` must be present if and only if `model` is
    /// [`ReactionModel::Reversible`].
    ///
    /// # Errors
    ///
    /// - [`KineticsError::MissingReverseRate`] for a reversible model
    ///   without a reverse rate constant
    /// - [`KineticsError::UnexpectedReverseRate`] for a non-reversible model
    ///   with one
    pub fn new(
        model: ReactionModel,
        forward_rate: f64,
        reverse_rate: Option<f64>,
        initial_concentration: f64,
    ) -> Result<Self, KineticsError> {
        match (model, reverse_rate) {
            (ReactionModel::FirstOrder, None) => Ok(RateLaw::FirstOrder { forward_rate }),

            (ReactionModel::SecondOrder, None) => Ok(RateLaw::SecondOrder { forward_rate }),

            (ReactionModel::Reversible, Some(reverse_rate)) => Ok(RateLaw::Reversible {
                forward_rate,
                reverse_rate,
                initial_concentration,
            }),

            (ReactionModel::Reversible, None) => Err(KineticsError::MissingReverseRate),

            (model, Some(_)) => Err(KineticsError::UnexpectedReverseRate(model.to_string())),
        }
    }

    /// Evaluate dC/dt at the given concentration.
    ///
    /// Pure function: no side effects, no state. The match is exhaustive, so
    /// every known model has a rate expression by construction.
    #[inline]
    pub fn eval(&self, concentration: f64) -> f64 {
        match self {
            RateLaw::FirstOrder { forward_rate } => -forward_rate * concentration,

            RateLaw::SecondOrder { forward_rate } => {
                -forward_rate * concentration * concentration
            }

            RateLaw::Reversible {
                forward_rate,
                reverse_rate,
                initial_concentration,
            } => {
                -forward_rate * concentration
                    + reverse_rate * (initial_concentration - concentration)
            }
        }
    }

    /// The model tag this law was built from.
    pub fn model(&self) -> ReactionModel {
        match self {
            RateLaw::FirstOrder { .. } => ReactionModel::FirstOrder,
            RateLaw::SecondOrder { .. } => ReactionModel::SecondOrder,
            RateLaw::Reversible { .. } => ReactionModel::Reversible,
        }
    }

    /// Analytical steady state of the law, when one exists.
    ///
    /// Only the reversible law has a non-trivial fixed point,
    /// `C0·k_rev/(k + k_rev)`. The irreversible laws decay toward zero.
    pub fn steady_state(&self) -> f64 {
        match self {
            RateLaw::FirstOrder { .. } | RateLaw::SecondOrder { .. } => 0.0,
            RateLaw::Reversible {
                forward_rate,
                reverse_rate,
                initial_concentration,
            } => initial_concentration * reverse_rate / (forward_rate + reverse_rate),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_order_rate() {
        let law = RateLaw::new(ReactionModel::FirstOrder, 0.5, None, 1.0).unwrap();

        assert_relative_eq!(law.eval(2.0), -1.0);
        assert_relative_eq!(law.eval(0.0), 0.0);
    }

    #[test]
    fn test_second_order_rate() {
        let law = RateLaw::new(ReactionModel::SecondOrder, 0.5, None, 1.0).unwrap();

        // −k·C² = −0.5 · 4 = −2
        assert_relative_eq!(law.eval(2.0), -2.0);
        assert_relative_eq!(law.eval(0.0), 0.0);
    }

    #[test]
    fn test_reversible_rate() {
        let law = RateLaw::new(ReactionModel::Reversible, 1.0, Some(1.0), 1.0).unwrap();

        // At C = C0 only the forward term acts.
        assert_relative_eq!(law.eval(1.0), -1.0);

        // At C = 0 only the reverse term acts.
        assert_relative_eq!(law.eval(0.0), 1.0);

        // At the steady state both balance.
        assert_relative_eq!(law.eval(0.5), 0.0);
    }

    #[test]
    fn test_reversible_requires_reverse_rate() {
        let result = RateLaw::new(ReactionModel::Reversible, 1.0, None, 1.0);
        assert_eq!(result, Err(KineticsError::MissingReverseRate));
    }

    #[test]
    fn test_irreversible_rejects_reverse_rate() {
        for model in [ReactionModel::FirstOrder, ReactionModel::SecondOrder] {
            let result = RateLaw::new(model, 1.0, Some(0.3), 1.0);
            assert!(
                matches!(result, Err(KineticsError::UnexpectedReverseRate(_))),
                "{} should reject a reverse rate",
                model
            );
        }
    }

    #[test]
    fn test_eval_is_pure() {
        let law = RateLaw::new(ReactionModel::Reversible, 2.0, Some(0.5), 1.0).unwrap();

        // Same input, same output, any number of times.
        let first = law.eval(0.7);
        for _ in 0..10 {
            assert_eq!(law.eval(0.7), first);
        }
    }

    #[test]
    fn test_model_round_trip() {
        for model in ReactionModel::ALL {
            let reverse = model.is_reversible().then_some(1.0);
            let law = RateLaw::new(model, 1.0, reverse, 1.0).unwrap();
            assert_eq!(law.model(), model);
        }
    }

    #[test]
    fn test_steady_state() {
        let law = RateLaw::new(ReactionModel::Reversible, 1.0, Some(1.0), 1.0).unwrap();
        assert_relative_eq!(law.steady_state(), 0.5);

        let law = RateLaw::new(ReactionModel::Reversible, 3.0, Some(1.0), 2.0).unwrap();
        assert_relative_eq!(law.steady_state(), 0.5);

        let law = RateLaw::new(ReactionModel::FirstOrder, 1.0, None, 1.0).unwrap();
        assert_relative_eq!(law.steady_state(), 0.0);
    }
}
