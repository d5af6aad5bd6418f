//! Command-line entry point for kinetics simulations
//!
//! Replaces the historical sequential prompts with structured argument
//! parsing: every input is a flag, malformed values fail before the
//! simulation starts, and the process exits non-zero on any error.
//!
//! # Usage
//!
//! ```bash
//! # First-order decay, plotted to a PNG
//! kinet --model first-order -c 1.0 -k 1.0 -t 10.0 -d 0.01 --plot decay.png
//!
//! # Reversible reaction with CSV export (menu digits also accepted)
//! kinet --model 3 -c 1.0 -k 1.0 --reverse-rate 1.0 -t 20.0 -d 0.001 --csv run.csv
//! ```

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use kinet_rs::error::KineticsError;
use kinet_rs::kinetics::ReactionModel;
use kinet_rs::output::{export_trajectory_csv, plot_trajectory, CsvConfig, CsvMetadata};
use kinet_rs::simulation::{EulerSimulator, SimulationConfig};

// =================================================================================================
// Arguments
// =================================================================================================

/// Simulate single-species reaction kinetics with forward Euler integration.
#[derive(Debug, Parser)]
#[command(name = "kinet", version, about)]
struct Args {
    /// Reaction model: first-order, second-order or reversible (1/2/3 also accepted)
    #[arg(short, long, value_parser = parse_model)]
    model: ReactionModel,

    /// Initial concentration C0 [mol/L]
    #[arg(short = 'c', long)]
    initial_concentration: f64,

    /// Forward rate constant k
    #[arg(short = 'k', long)]
    forward_rate: f64,

    /// Reverse rate constant k_rev (required for the reversible model)
    #[arg(long)]
    reverse_rate: Option<f64>,

    /// Total simulated time T [s]
    #[arg(short = 't', long)]
    end_time: f64,

    /// Euler time step dt [s]
    #[arg(short = 'd', long)]
    step_size: f64,

    /// Write a line plot of the trajectory (PNG or SVG by extension)
    #[arg(long, value_name = "PATH")]
    plot: Option<String>,

    /// Export the trajectory to CSV
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_model(s: &str) -> Result<ReactionModel, KineticsError> {
    s.parse()
}

// =================================================================================================
// Input Validation
// =================================================================================================

/// Range checks that belong to the input boundary, not the core.
fn validate_ranges(args: &Args) -> Result<(), KineticsError> {
    if !args.initial_concentration.is_finite() || args.initial_concentration < 0.0 {
        return Err(KineticsError::InvalidInput(format!(
            "initial concentration must be >= 0, got {}",
            args.initial_concentration
        )));
    }

    if !args.forward_rate.is_finite() || args.forward_rate < 0.0 {
        return Err(KineticsError::InvalidInput(format!(
            "forward rate must be >= 0, got {}",
            args.forward_rate
        )));
    }

    if let Some(k_rev) = args.reverse_rate {
        if !k_rev.is_finite() || k_rev < 0.0 {
            return Err(KineticsError::InvalidInput(format!(
                "reverse rate must be >= 0, got {}",
                k_rev
            )));
        }
    }

    if !args.end_time.is_finite() || args.end_time <= 0.0 {
        return Err(KineticsError::InvalidInput(format!(
            "end time must be > 0, got {}",
            args.end_time
        )));
    }

    if !args.step_size.is_finite() || args.step_size <= 0.0 || args.step_size > args.end_time {
        return Err(KineticsError::InvalidInput(format!(
            "step size must be > 0 and <= end time, got {}",
            args.step_size
        )));
    }

    Ok(())
}

// =================================================================================================
// Main
// =================================================================================================

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    validate_ranges(args)?;

    let config = SimulationConfig {
        model: args.model,
        initial_concentration: args.initial_concentration,
        forward_rate: args.forward_rate,
        reverse_rate: args.reverse_rate,
        end_time: args.end_time,
        step_size: args.step_size,
    };

    let trajectory = EulerSimulator::new().run(&config)?;

    println!("{} Reaction", config.model);
    println!("  C0        : {} mol/L", config.initial_concentration);
    println!("  k         : {}", config.forward_rate);
    if let Some(k_rev) = config.reverse_rate {
        println!("  k_rev     : {}", k_rev);
        let law = config.rate_law()?;
        println!("  C* (t→∞)  : {:.6} mol/L", law.steady_state());
    }
    println!("  Grid      : {} points, dt = {} s", trajectory.len(), config.step_size);
    println!(
        "  Final     : C({:.4}) = {:.6} mol/L",
        trajectory.time.last().copied().unwrap_or(0.0),
        trajectory.final_concentration().unwrap_or(0.0)
    );

    if let Some(path) = &args.plot {
        plot_trajectory(&trajectory, path, None)?;
        println!("  Plot      : {}", path);
    }

    if let Some(path) = &args.csv {
        let csv_config = CsvConfig::default().with_metadata(CsvMetadata::from_config(&config));
        export_trajectory_csv(&trajectory, path, Some(&csv_config))?;
        println!("  CSV       : {}", path);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            model: ReactionModel::FirstOrder,
            initial_concentration: 1.0,
            forward_rate: 1.0,
            reverse_rate: None,
            end_time: 10.0,
            step_size: 0.1,
            plot: None,
            csv: None,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_ranges_pass() {
        assert!(validate_ranges(&base_args()).is_ok());
    }

    #[test]
    fn test_negative_concentration_rejected() {
        let mut args = base_args();
        args.initial_concentration = -1.0;
        assert!(matches!(
            validate_ranges(&args),
            Err(KineticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_step_larger_than_horizon_rejected() {
        let mut args = base_args();
        args.step_size = 20.0;
        assert!(matches!(
            validate_ranges(&args),
            Err(KineticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let mut args = base_args();
        args.end_time = f64::NAN;
        assert!(validate_ranges(&args).is_err());

        let mut args = base_args();
        args.forward_rate = f64::INFINITY;
        assert!(validate_ranges(&args).is_err());
    }

    #[test]
    fn test_model_parser_accepts_menu_digit() {
        assert_eq!(parse_model("2").unwrap(), ReactionModel::SecondOrder);
        assert!(parse_model("4").is_err());
    }
}
