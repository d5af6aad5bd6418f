//! Static plot generation for simulation trajectories
//!
//! Uses the `plotters` library to render concentration-versus-time line
//! plots as static images. The backend is chosen from the output file
//! extension: `.svg` renders with the SVG backend, anything else with the
//! bitmap (PNG) backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use kinet_rs::output::{plot_trajectory, PlotConfig};
//!
//! let trajectory = EulerSimulator::new().run(&config)?;
//! plot_trajectory(&trajectory, "decay.png", None)?;
//!
//! // Or with a customized title
//! let mut plot_config = PlotConfig::reaction(trajectory.model);
//! plot_config.line_width = 3;
//! plot_trajectory(&trajectory, "decay.svg", Some(&plot_config))?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::kinetics::ReactionModel;
use crate::simulation::Trajectory;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for customizing trajectory plots.
///
/// Defaults follow the simulator's output contract: axes labeled "Time" and
/// "Concentration", grid lines on, a two-pixel red line on white.
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Reaction Kinetics")
    pub title: String,

    /// X-axis label (default: "Time")
    pub xlabel: String,

    /// Y-axis label (default: "Concentration")
    pub ylabel: String,

    /// Line color (default: RED)
    pub line_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Reaction Kinetics".to_string(),
            xlabel: "Time".to_string(),
            ylabel: "Concentration".to_string(),
            line_color: RED,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Config titled after a reaction model ("First Order Reaction", ...).
    pub fn reaction(model: ReactionModel) -> Self {
        Self {
            title: format!("{} Reaction", model),
            ..Default::default()
        }
    }
}

// =================================================================================================
// Drawing
// =================================================================================================

/// Draw a trajectory on any drawing area.
fn draw_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    time: &[f64],
    concentration: &[f64],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    // Axis ranges with a 10% vertical margin. Negative concentrations stay
    // visible: Euler overshoot is exactly what a student wants to see.
    let max_time = time.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let max_c = concentration.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_c = concentration.iter().cloned().fold(f64::INFINITY, f64::min);

    // A flat trajectory (e.g. C0 = 0) still needs a non-degenerate axis.
    let y_range = if max_c > min_c { max_c - min_c } else { 1.0 };
    let y_min = min_c - 0.1 * y_range;
    let y_max = max_c + 0.1 * y_range;

    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..max_time, y_min..y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    chart.draw_series(LineSeries::new(
        time.iter().zip(concentration.iter()).map(|(t, c)| (*t, *c)),
        config.line_color.stroke_width(config.line_width),
    ))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Plotting Functions
// =================================================================================================

/// Plot raw time and concentration arrays.
///
/// Low-level entry point for callers holding plain slices. Most users should
/// prefer [`plot_trajectory`], which also derives the title from the model.
///
/// # Panics
///
/// Panics when the two series differ in length.
pub fn plot_series(
    time: &[f64],
    concentration: &[f64],
    output_path: &str,
    configuration: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    assert_eq!(
        time.len(),
        concentration.len(),
        "Time and concentration series must have same length"
    );

    let owned_config = configuration.cloned().unwrap_or_default();
    let config = &owned_config;

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_on_area(&root, time, concentration, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_on_area(&root, time, concentration, config)
    }
}

/// Plot a trajectory directly, titled with its humanized model name.
///
/// # Errors
///
/// Returns an error when the file cannot be written or rendering fails.
pub fn plot_trajectory(
    trajectory: &Trajectory,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config
        .cloned()
        .unwrap_or_else(|| PlotConfig::reaction(trajectory.model));

    plot_series(
        &trajectory.time,
        &trajectory.concentration,
        output_path,
        Some(&owned_config),
    )
}

// =================================================================================================
// Tests
// =================================================================================================
