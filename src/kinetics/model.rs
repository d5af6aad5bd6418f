//! Reaction-order model identifiers
//!
//! # Design
//!
//! The reaction order is a closed set of three variants, so it is represented
//! as an enum rather than a string tag. Rate-law dispatch becomes an
//! exhaustive `match`: an unrecognized model cannot exist past the parsing
//! surfaces defined here, and the compiler checks that every variant has a
//! rate expression.
//!
//! Two parsing surfaces feed the enum:
//!
//! - [`ReactionModel::from_choice`]: the historical 1/2/3 menu mapping
//! - [`FromStr`]: kebab-case names for command-line use (legacy snake_case
//!   tags are accepted as aliases)
//!
//! Both fail with [`KineticsError::InvalidModel`] on anything else.

use std::fmt;
use std::str::FromStr;

use crate::error::KineticsError;

// =================================================================================================
// Reaction Model
// =================================================================================================

/// Reaction-order model of a single-species decay kinetics system.
///
/// # Variants
///
/// - `FirstOrder`: rate proportional to concentration, dC/dt = −k·C.
///   Monotonic decay toward zero.
/// - `SecondOrder`: rate proportional to concentration squared,
///   dC/dt = −k·C². Decay slows as C shrinks; forward Euler gives no closed
///   floor at zero.
/// - `Reversible`: forward decay balanced by a reverse term,
///   dC/dt = −k·C + k_rev·(C0 − C). Drives C toward the steady state
///   C0·k_rev/(k + k_rev) as t → ∞.
///
/// # Example
///
/// ```rust
/// use kinet_rs::kinetics::ReactionModel;
///
/// let model = ReactionModel::from_choice(3).unwrap();
/// assert_eq!(model, ReactionModel::Reversible);
/// assert_eq!(model.to_string(), "Reversible");
///
/// let model: ReactionModel = "first-order".parse().unwrap();
/// assert_eq!(model, ReactionModel::FirstOrder);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionModel {
    /// dC/dt = −k·C
    FirstOrder,

    /// dC/dt = −k·C²
    SecondOrder,

    /// dC/dt = −k·C + k_rev·(C0 − C)
    Reversible,
}

impl ReactionModel {
    /// All known models, in menu order.
    pub const ALL: [ReactionModel; 3] = [
        ReactionModel::FirstOrder,
        ReactionModel::SecondOrder,
        ReactionModel::Reversible,
    ];

    /// Map the interactive menu selection (1/2/3) to a model.
    ///
    /// # Errors
    ///
    /// Any other value fails with [`KineticsError::InvalidModel`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use kinet_rs::kinetics::ReactionModel;
    ///
    /// assert_eq!(ReactionModel::from_choice(1).unwrap(), ReactionModel::FirstOrder);
    /// assert!(ReactionModel::from_choice(4).is_err());
    /// ```
    pub fn from_choice(choice: u8) -> Result<Self, KineticsError> {
        match choice {
            1 => Ok(ReactionModel::FirstOrder),
            2 => Ok(ReactionModel::SecondOrder),
            3 => Ok(ReactionModel::Reversible),
            other => Err(KineticsError::InvalidModel(format!("choice {}", other))),
        }
    }

    /// Whether this model carries a reverse rate constant.
    pub fn is_reversible(&self) -> bool {
        matches!(self, ReactionModel::Reversible)
    }

    /// Humanized label, used for plot titles and logging.
    pub fn label(&self) -> &'static str {
        match self {
            ReactionModel::FirstOrder => "First Order",
            ReactionModel::SecondOrder => "Second Order",
            ReactionModel::Reversible => "Reversible",
        }
    }
}

impl fmt::Display for ReactionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReactionModel {
    type Err = KineticsError;

    /// Parse a model name.
    ///
    /// Accepts the kebab-case command-line form, the legacy snake_case tag,
    /// and the bare menu digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "first-order" | "first_order" => Ok(ReactionModel::FirstOrder),
            "2" | "second-order" | "second_order" => Ok(ReactionModel::SecondOrder),
            "3" | "reversible" => Ok(ReactionModel::Reversible),
            other => Err(KineticsError::InvalidModel(other.to_string())),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
