//! Output collaborators for simulation trajectories
//!
//! The simulation core returns an in-memory [`Trajectory`]; this module
//! renders or exports it:
//!
//! - **Visualization**: PNG/SVG line plots via `plotters`
//! - **Export**: CSV data for external analysis
//!
//! Both accept a finished trajectory and never feed back into the
//! simulation.
//!
//! [`Trajectory`]: crate::simulation::Trajectory

pub mod csv;
pub mod plot;

// Re-export commonly used items for convenience
pub use csv::{export_trajectory_csv, CsvConfig, CsvMetadata};
pub use plot::{plot_series, plot_trajectory, PlotConfig};
