//! CSV export for simulation trajectories
//!
//! Writes the time and concentration series to a CSV file readable by Excel,
//! pandas, MATLAB and friends, with an optional commented metadata header
//! recording the simulation parameters.
//!
//! # Example
//!
//! ```rust,ignore
//! use kinet_rs::output::{export_trajectory_csv, CsvConfig, CsvMetadata};
//!
//! // Minimal export
//! export_trajectory_csv(&trajectory, "decay.csv", None)?;
//!
//! // With metadata header
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_config(&sim_config));
//! export_trajectory_csv(&trajectory, "decay.csv", Some(&config))?;
//! ```
//!
//! **Output** (`decay.csv`):
//! ```csv
//! # Reaction Kinetics Simulation Data
//! # Generated: 2026-08-28T12:00:00Z
//! # Model: First Order
//! # Forward Rate: 1
//! # End Time: 10 s
//! # Step Size: 0.1 s
//! #
//! Time,Concentration
//! 0.000000,1.000000
//! 0.100000,0.900000
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::simulation::{SimulationConfig, Trajectory};

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for CSV export.
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Metadata to write as commented header lines, when present
    pub metadata: Option<CsvMetadata>,

    /// Header for the time column (default: "Time")
    pub time_header: String,

    /// Header for the concentration column (default: "Concentration")
    pub concentration_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            metadata: None,
            time_header: "Time".to_string(),
            concentration_header: "Concentration".to_string(),
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set precision.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: attach metadata.
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for the commented CSV header.
///
/// All fields are optional; only present fields are written.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Humanized model name (e.g. "First Order")
    pub model_name: Option<String>,

    /// Initial concentration C0 [mol/L]
    pub initial_concentration: Option<f64>,

    /// Forward rate constant k
    pub forward_rate: Option<f64>,

    /// Reverse rate constant k_rev (reversible model only)
    pub reverse_rate: Option<f64>,

    /// Total simulated time [s]
    pub end_time: Option<f64>,

    /// Euler step size [s]
    pub step_size: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Capture every parameter of a simulation configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            model_name: Some(config.model.to_string()),
            initial_concentration: Some(config.initial_concentration),
            forward_rate: Some(config.forward_rate),
            reverse_rate: config.reverse_rate,
            end_time: Some(config.end_time),
            step_size: Some(config.step_size),
            custom: Vec::new(),
        }
    }

    /// Add a custom parameter line.
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Write the commented metadata header.
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Reaction Kinetics Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(file, "# Model: {}", model)?;
    }
    if let Some(c0) = metadata.initial_concentration {
        writeln!(file, "# Initial Concentration: {} mol/L", c0)?;
    }
    if let Some(k) = metadata.forward_rate {
        writeln!(file, "# Forward Rate: {}", k)?;
    }
    if let Some(k_rev) = metadata.reverse_rate {
        writeln!(file, "# Reverse Rate: {}", k_rev)?;
    }
    if let Some(end_time) = metadata.end_time {
        writeln!(file, "# End Time: {} s", end_time)?;
    }
    if let Some(dt) = metadata.step_size {
        writeln!(file, "# Step Size: {} s", dt)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;
    Ok(())
}

fn format_number(value: f64, config: &CsvConfig) -> String {
    format!("{:.prec$}", value, prec = config.precision)
}

// =================================================================================================
// Export Functions
// =================================================================================================

/// Export a trajectory to CSV.
///
/// # Errors
///
/// - empty trajectory
/// - non-finite values in either series (a diverged run exports nothing
///   useful; fix the step size instead)
/// - file creation or write errors
pub fn export_trajectory_csv(
    trajectory: &Trajectory,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ====== Validation ======

    if trajectory.is_empty() {
        return Err("Empty trajectory: nothing to export".into());
    }

    if trajectory.time.iter().any(|t| !t.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in time series".into());
    }

    if trajectory.concentration.iter().any(|c| !c.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in concentration series".into());
    }

    // ====== Configuration ======

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ====== Write ======

    let mut file = File::create(output_path)?;

    if let Some(metadata) = &configuration.metadata {
        write_metadata_header(&mut file, metadata)?;
    }

    writeln!(
        file,
        "{}{}{}",
        configuration.time_header, configuration.delimiter, configuration.concentration_header
    )?;

    for (time, concentration) in trajectory.samples() {
        writeln!(
            file,
            "{}{}{}",
            format_number(time, configuration),
            configuration.delimiter,
            format_number(concentration, configuration)
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
