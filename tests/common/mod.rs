//! Helper functions for integration tests

use kinet_rs::kinetics::ReactionModel;
use kinet_rs::simulation::SimulationConfig;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// First-order reference configuration used by several tests.
pub fn first_order_config(end_time: f64, step_size: f64) -> SimulationConfig {
    SimulationConfig::new(ReactionModel::FirstOrder, 1.0, 1.0, end_time, step_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
