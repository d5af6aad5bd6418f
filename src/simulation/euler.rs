//! Forward Euler integration of the kinetics ODE
//!
//! # Mathematical Background
//!
//! Forward Euler is the simplest explicit time-stepping scheme for an
//! ordinary differential equation dC/dt = f(C):
//!
//! ```text
//! C_{i} = C_{i-1} + dt * f(C_{i-1})
//! ```
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate (global error ~ O(dt))
//! - **Stability**: conditionally stable; for dC/dt = −k·C the condition is
//!   `|1 − k·dt| ≤ 1`, i.e. dt ≤ 2/k
//! - **Complexity**: one rate evaluation per step, O(1) memory beyond the
//!   stored trajectory
//!
//! The recurrence is strictly sequential: each step depends only on the
//! immediately preceding value, so there is nothing to parallelize within
//! one trajectory.
//!
//! # Numerical Semantics
//!
//! Standard IEEE double precision, no clamping, no renormalization. With a
//! step size too large for the rate constants the concentration can
//! overshoot zero or diverge. That is accepted Euler error, not a fault: the
//! simulator logs one warning the first time the trajectory leaves physical
//! bounds and keeps integrating.

use log::warn;

use crate::error::KineticsError;
use crate::simulation::grid::time_grid;
use crate::simulation::{SimulationConfig, Trajectory};

// =================================================================================================
// Euler Simulator
// =================================================================================================

/// Fixed-step forward Euler simulator for single-species kinetics.
///
/// # Algorithm
///
/// 1. Validate the configuration and build the rate law (fail fast — the
///    model never changes mid-run, so one check before the loop covers
///    every step)
/// 2. Build the time grid and preallocate the trajectory with exact capacity
/// 3. Seed `concentration[0]` with the initial concentration
/// 4. For each subsequent grid index, advance by `dt * rate(previous)`
///
/// # Determinism
///
/// The loop performs the same floating-point operations in the same order on
/// every run, so identical configurations produce bit-identical
/// trajectories.
///
/// # Example
///
/// ```rust
/// use kinet_rs::kinetics::ReactionModel;
/// use kinet_rs::simulation::{EulerSimulator, SimulationConfig};
///
/// let config = SimulationConfig::new(ReactionModel::FirstOrder, 1.0, 1.0, 1.0, 0.001);
/// let trajectory = EulerSimulator::new().run(&config).unwrap();
///
/// // Euler approximates the analytical decay exp(−k·t).
/// let final_c = trajectory.final_concentration().unwrap();
/// assert!((final_c - (-1.0f64).exp()).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSimulator;

impl EulerSimulator {
    /// Create a new forward Euler simulator.
    pub fn new() -> Self {
        Self
    }

    /// Integrate the configured rate law over \[0, end_time\].
    ///
    /// # Errors
    ///
    /// Fails before the first step when the reverse-rate pairing invariant
    /// is violated (see [`SimulationConfig::rate_law`]). The stepping loop
    /// itself raises no errors.
    pub fn run(&self, config: &SimulationConfig) -> Result<Trajectory, KineticsError> {
        // ====== Validation ======

        // The only failure point is the rate-law pairing; resolve it once
        // before entering the loop.
        let rate_law = config.rate_law()?;

        // ====== Setup ======

        let time = time_grid(config.end_time, config.step_size);
        let dt = config.step_size;

        let mut concentration = Vec::with_capacity(time.len());
        concentration.push(config.initial_concentration);

        // ====== Time Integration ======

        let mut warned = false;

        for i in 1..time.len() {
            let previous = concentration[i - 1];
            let next = previous + rate_law.eval(previous) * dt;
            concentration.push(next);

            // Euler overshoot is a documented accuracy limitation, surfaced
            // once as a warning rather than an error.
            if !warned && (next < 0.0 || !next.is_finite()) {
                warn!(
                    "{} trajectory left physical bounds at t = {:.6} (C = {:e}); \
                     the step size {} is likely too large for the rate constants",
                    config.model, time[i], next, dt
                );
                warned = true;
            }
        }

        Ok(Trajectory {
            model: config.model,
            time,
            concentration,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinetics::ReactionModel;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_condition_exact() {
        let config = SimulationConfig::new(ReactionModel::FirstOrder, 0.73, 1.0, 10.0, 0.1);
        let trajectory = EulerSimulator::new().run(&config).unwrap();

        // Bit-exact, not approximately equal.
        assert_eq!(trajectory.concentration[0], 0.73);
    }

    #[test]
    fn test_lengths_aligned() {
        let config = SimulationConfig::new(ReactionModel::SecondOrder, 1.0, 0.5, 7.3, 0.11);
        let trajectory = EulerSimulator::new().run(&config).unwrap();

        assert_eq!(trajectory.time.len(), trajectory.concentration.len());
    }

    #[test]
    fn test_first_order_matches_analytical() {
        // dC/dt = −C, C0 = 1 → C(1) = exp(−1) ≈ 0.3679. Euler with
        // dt = 0.001 lands within 1% relative error.
        let config = SimulationConfig::new(ReactionModel::FirstOrder, 1.0, 1.0, 1.0, 0.001);
        let trajectory = EulerSimulator::new().run(&config).unwrap();

        let exact = (-1.0f64).exp();
        let actual = trajectory.final_concentration().unwrap();
        let relative = (actual - exact).abs() / exact;

        assert!(relative < 0.01, "relative error {} exceeds 1%", relative);
    }

    #[test]
    fn test_first_order_recurrence() {
        // One Euler step by hand: C1 = C0 + dt·(−k·C0) = 1 + 0.5·(−2) = 0.
        let config = SimulationConfig::new(ReactionModel::FirstOrder, 1.0, 2.0, 1.0, 0.5);
        let trajectory = EulerSimulator::new().run(&config).unwrap();

        assert_relative_eq!(trajectory.concentration[1], 0.0);
    }

    #[test]
    fn test_second_order_monotonic_decay() {
        let config = SimulationConfig::new(ReactionModel::SecondOrder, 2.0, 0.8, 10.0, 0.01);
        let trajectory = EulerSimulator::new().run(&config).unwrap();

        for window in trajectory.concentration.windows(2) {
            assert!(
                window[1] <= window[0],
                "concentration increased: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_reversible_steady_state() {
        // k = k_rev = 1, C0 = 1 → C* = 0.5.
        let config = SimulationConfig::reversible(1.0, 1.0, 1.0, 20.0, 0.001);
        let trajectory = EulerSimulator::new().run(&config).unwrap();

        let final_c = trajectory.final_concentration().unwrap();
        assert!(
            (final_c - 0.5).abs() < 1e-6,
            "final concentration {} did not converge to 0.5",
            final_c
        );
    }

    #[test]
    fn test_pairing_checked_before_stepping() {
        let mut config = SimulationConfig::new(ReactionModel::FirstOrder, 1.0, 1.0, 10.0, 0.1);
        config.reverse_rate = Some(0.5);

        let result = EulerSimulator::new().run(&config);
        assert!(matches!(
            result,
            Err(KineticsError::UnexpectedReverseRate(_))
        ));
    }

    #[test]
    fn test_deterministic_runs() {
        let config = SimulationConfig::reversible(1.0, 1.3, 0.7, 15.0, 0.003);
        let simulator = EulerSimulator::new();

        let first = simulator.run(&config).unwrap();
        let second = simulator.run(&config).unwrap();

        // Bit-identical, not merely close.
        assert_eq!(first, second);
    }

    #[test]
    fn test_coarse_step_overshoot_is_not_an_error() {
        // dt = 1.5 with k = 2 violates the stability bound dt ≤ 2/k; the
        // trajectory oscillates negative but the run still succeeds.
        let config = SimulationConfig::new(ReactionModel::FirstOrder, 1.0, 2.0, 10.0, 1.5);
        let trajectory = EulerSimulator::new().run(&config).unwrap();

        assert!(trajectory.concentration.iter().any(|&c| c < 0.0));
    }

    #[test]
    fn test_zero_initial_concentration() {
        // Nothing to react: the trajectory stays at zero.
        let config = SimulationConfig::new(ReactionModel::SecondOrder, 0.0, 1.0, 5.0, 0.1);
        let trajectory = EulerSimulator::new().run(&config).unwrap();

        assert!(trajectory.concentration.iter().all(|&c| c == 0.0));
    }
}
