//! Demo: the three reaction orders side by side
//!
//! Runs first-order, second-order and reversible kinetics with the same
//! initial concentration and forward rate, prints a comparison table and
//! writes one plot per model to the system temp directory.
//!
//! ```bash
//! cargo run --example reaction_orders
//! ```

use kinet_rs::kinetics::ReactionModel;
use kinet_rs::output::{export_trajectory_csv, plot_trajectory, CsvConfig, CsvMetadata};
use kinet_rs::simulation::{EulerSimulator, SimulationConfig, Trajectory};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Reaction Kinetics - Model Comparison");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Shared parameters ======

    let initial_concentration = 1.0; // C0 [mol/L]
    let forward_rate = 1.0;          // k
    let reverse_rate = 1.0;          // k_rev (reversible only)
    let end_time = 10.0;             // T [s]
    let step_size = 0.001;           // dt [s]

    println!("Parameters:");
    println!("  C0    : {} mol/L", initial_concentration);
    println!("  k     : {}", forward_rate);
    println!("  k_rev : {} (reversible only)", reverse_rate);
    println!("  T     : {} s", end_time);
    println!("  dt    : {} s\n", step_size);

    // ====== Build one config per model ======

    let configs = vec![
        SimulationConfig::new(
            ReactionModel::FirstOrder,
            initial_concentration,
            forward_rate,
            end_time,
            step_size,
        ),
        SimulationConfig::new(
            ReactionModel::SecondOrder,
            initial_concentration,
            forward_rate,
            end_time,
            step_size,
        ),
        SimulationConfig::reversible(
            initial_concentration,
            forward_rate,
            reverse_rate,
            end_time,
            step_size,
        ),
    ];

    // ====== Run ======

    let simulator = EulerSimulator::new();
    let mut results: Vec<(SimulationConfig, Trajectory, f64)> = Vec::new();

    for config in configs {
        let start = Instant::now();
        let trajectory = simulator.run(&config)?;
        let elapsed = start.elapsed().as_secs_f64();
        results.push((config, trajectory, elapsed));
    }

    // ====== Comparison table ======

    println!("{:<14} {:>8} {:>14} {:>14} {:>10}",
             "Model", "Points", "Final (mol/L)", "Expected", "Time (s)");
    println!("{:-<64}", "");

    for (config, trajectory, elapsed) in &results {
        // Analytical references: exp(−kT) decay, 1/(1+kT·C0) hyperbolic
        // decay, C0·k_rev/(k+k_rev) steady state.
        let expected = match config.model {
            ReactionModel::FirstOrder => {
                initial_concentration * (-forward_rate * end_time).exp()
            }
            ReactionModel::SecondOrder => {
                initial_concentration / (1.0 + forward_rate * initial_concentration * end_time)
            }
            ReactionModel::Reversible => config.rate_law()?.steady_state(),
        };

        println!(
            "{:<14} {:>8} {:>14.6} {:>14.6} {:>10.4}",
            config.model.to_string(),
            trajectory.len(),
            trajectory.final_concentration().unwrap_or(0.0),
            expected,
            elapsed
        );
    }

    // ====== Plots and CSV ======

    println!("\nWriting outputs:");
    let tmp_dir = std::env::temp_dir();

    for (config, trajectory, _) in &results {
        let stem = config.model.to_string().to_lowercase().replace(' ', "_");

        let plot_path = tmp_dir.join(format!("kinetics_{}.png", stem));
        plot_trajectory(trajectory, plot_path.to_str().unwrap(), None)?;
        println!("  {} plot : {:?}", config.model, plot_path);

        let csv_path = tmp_dir.join(format!("kinetics_{}.csv", stem));
        let csv_config = CsvConfig::default().with_metadata(CsvMetadata::from_config(config));
        export_trajectory_csv(trajectory, csv_path.to_str().unwrap(), Some(&csv_config))?;
        println!("  {} csv  : {:?}", config.model, csv_path);
    }

    Ok(())
}
