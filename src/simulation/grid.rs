//! Time-grid construction
//!
//! # The Inclusive-by-Overshoot Convention
//!
//! The grid for a run of total time T with step dt is the half-open range
//! `[0, T + dt)` stepped by dt:
//!
//! ```text
//! n       = ceil((T + dt) / dt)
//! time[i] = i * dt            for i in 0..n
//! ```
//!
//! When dt evenly divides T the final sample lands exactly on T. Otherwise
//! the grid keeps stepping until the first point at or past T, so the final
//! sample slightly exceeds T. Floating-point rounding in the length
//! computation can add or remove a single point versus the exact mathematical
//! count; callers must not assume a strict `floor(T/dt) + 1` length.
//!
//! This convention is pinned deliberately: trajectory length and the position
//! of the final sample are observable behaviour that downstream tests and
//! plots depend on. Do not replace it with a recomputed `ceil`/`floor` grid.
//!
//! # Precision
//!
//! Grid points are computed by direct index multiplication, never by
//! accumulating `t += dt`. Accumulation compounds representation error over
//! the run (~n·ε); direct multiplication keeps every point within one
//! rounding of the ideal value.

/// Build the simulation time grid for the closed interval \[0, T\].
///
/// See the module documentation for the exact convention. `step_size` and
/// `end_time` must both be positive; the input boundary guarantees that
/// before a config reaches the core.
///
/// # Example
///
/// ```rust
/// use kinet_rs::simulation::time_grid;
///
/// let grid = time_grid(10.0, 1.0);
/// assert_eq!(grid.len(), 11);
/// assert_eq!(grid[0], 0.0);
/// assert_eq!(grid[10], 10.0);
/// ```
pub fn time_grid(end_time: f64, step_size: f64) -> Vec<f64> {
    let n = ((end_time + step_size) / step_size).ceil() as usize;
    (0..n).map(|i| i as f64 * step_size).collect()
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_division_grid() {
        // T = 10, dt = 1: exactly the 11 points 0, 1, ..., 10.
        let grid = time_grid(10.0, 1.0);

        assert_eq!(grid.len(), 11);
        for (i, &t) in grid.iter().enumerate() {
            assert_relative_eq!(t, i as f64);
        }
        assert_eq!(*grid.last().unwrap(), 10.0);
    }

    #[test]
    fn test_inexact_division_overshoots() {
        // T = 1, dt = 0.3: the grid steps to the first point at or past T.
        let grid = time_grid(1.0, 0.3);

        assert_eq!(grid.len(), 5);
        let last = *grid.last().unwrap();
        assert!(last >= 1.0, "final point {} should reach the end time", last);
        assert!(last < 1.0 + 0.3, "final point {} should overshoot by less than dt", last);
    }

    #[test]
    fn test_grid_starts_at_zero() {
        for &(end, dt) in &[(10.0, 1.0), (1.0, 0.001), (5.0, 0.7)] {
            assert_eq!(time_grid(end, dt)[0], 0.0);
        }
    }

    #[test]
    fn test_uniform_spacing() {
        let dt = 0.1;
        let grid = time_grid(10.0, dt);

        for window in grid.windows(2) {
            let spacing = window[1] - window[0];
            assert!(
                (spacing - dt).abs() < 1e-12,
                "spacing {} drifted from dt {}",
                spacing,
                dt
            );
        }
    }

    #[test]
    fn test_grid_strictly_increasing() {
        let grid = time_grid(2.0, 0.013);
        for window in grid.windows(2) {
            assert!(window[1] > window[0]);
        }
    }

    #[test]
    fn test_no_accumulation_drift() {
        // With direct multiplication the point at index 1000 is (1000 * dt)
        // rounded once, not dt added a thousand times.
        let grid = time_grid(1.0, 0.001);
        let t1000 = grid[1000];
        assert!((t1000 - 1.0).abs() < 1e-12, "t[1000] = {} drifted", t1000);
    }

    #[test]
    fn test_single_step_grid() {
        let grid = time_grid(1.0, 1.0);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid, vec![0.0, 1.0]);
    }
}
