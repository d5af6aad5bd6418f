//! Simulation trajectory
//!
//! The result of one run: a time grid and the concentration at each grid
//! point, index-aligned. The trajectory is owned by the caller and never
//! mutated after the stepping loop fills it.

use crate::kinetics::ReactionModel;

// =================================================================================================
// Trajectory
// =================================================================================================

/// Time/concentration history of one simulation run.
///
/// # Invariants
///
/// - `time.len() == concentration.len()`
/// - `time` is strictly increasing with uniform spacing `step_size`
/// - `concentration[0]` equals the configured initial concentration exactly
///
/// No other bound is guaranteed: under a coarse step size the second-order
/// and reversible laws can drive the concentration negative. That is
/// accepted forward-Euler error, not a fault.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Model the trajectory was integrated under (used for titling output).
    pub model: ReactionModel,

    /// Time grid [s].
    pub time: Vec<f64>,

    /// Concentration at each time point [mol/L].
    pub concentration: Vec<f64>,
}

impl Trajectory {
    /// Number of samples (time points).
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the trajectory holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Concentration at the final time point.
    pub fn final_concentration(&self) -> Option<f64> {
        self.concentration.last().copied()
    }

    /// Iterate over `(time, concentration)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time
            .iter()
            .copied()
            .zip(self.concentration.iter().copied())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Trajectory {
        Trajectory {
            model: ReactionModel::FirstOrder,
            time: vec![0.0, 1.0, 2.0],
            concentration: vec![1.0, 0.5, 0.25],
        }
    }

    #[test]
    fn test_len_and_empty() {
        let trajectory = toy();
        assert_eq!(trajectory.len(), 3);
        assert!(!trajectory.is_empty());
    }

    #[test]
    fn test_final_concentration() {
        assert_eq!(toy().final_concentration(), Some(0.25));
    }

    #[test]
    fn test_samples_alignment() {
        let trajectory = toy();
        let pairs: Vec<(f64, f64)> = trajectory.samples().collect();

        assert_eq!(pairs.len(), trajectory.len());
        assert_eq!(pairs[1], (1.0, 0.5));
    }
}
