//! Reaction-kinetics rate laws
//!
//! This module is the WHAT of the crate: it defines which equation the
//! simulator integrates. The HOW (time grid, Euler stepping) lives in
//! [`crate::simulation`].
//!
//! # Available Models
//!
//! | Model | Rate expression | Behaviour |
//! |---|---|---|
//! | [`ReactionModel::FirstOrder`] | −k·C | monotonic decay toward 0 |
//! | [`ReactionModel::SecondOrder`] | −k·C² | decay that slows as C shrinks |
//! | [`ReactionModel::Reversible`] | −k·C + k_rev·(C0 − C) | approach to C0·k_rev/(k+k_rev) |
//!
//! [`ReactionModel`] is the public tag (parsed from menus or strings);
//! [`RateLaw`] is the validated, evaluable form the simulator consumes.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod model;
mod rate_law;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use model::ReactionModel;
pub use rate_law::RateLaw;
