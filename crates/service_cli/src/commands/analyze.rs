//! Analyze command implementation
//!
//! Runs the full analytics suite over one scenario: itemised breakdown,
//! propagated risk summary, elasticity matrix, and component
//! correlation matrix.

use landed_model::breakdown::CostComponent;
use landed_model::compiler::compute_itemised;
use landed_risk::correlation::{interpret, CorrelationEstimator};
use landed_risk::elasticity::{elasticities, PerturbationVariable};
use landed_risk::propagation::propagate;
use serde_json::json;
use tracing::info;

use crate::{config, CliError, Result};

/// Run the analyze command
pub fn run(scenario: &str, seed: u64, samples: usize, format: &str) -> Result<()> {
    info!("Running analytics suite...");
    info!("  Scenario: {}", scenario);
    info!("  Correlation seed: {}, samples: {}", seed, samples);

    let snapshot = config::load_scenario(scenario)?;

    let breakdown = compute_itemised(&snapshot);
    let risk = propagate(&snapshot.stochastic)?;
    let matrix = elasticities(&snapshot, &PerturbationVariable::ALL, &CostComponent::ALL);
    let correlations =
        CorrelationEstimator::new(seed, samples).component_correlations(&snapshot);

    match format {
        "json" => {
            let report = json!({
                "breakdown": breakdown,
                "risk": risk,
                "elasticities": matrix,
                "correlations": correlations,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            println!("\n== Cost breakdown ==");
            for component in CostComponent::ALL {
                println!(
                    "{:<4} {:<32} {:>14.2}",
                    component.code(),
                    component.label(),
                    breakdown.component(component)
                );
            }
            println!("Total acquisition cost: {:.2}", breakdown.total_acquisition_cost);

            println!("\n== Risk summary ==");
            println!("Expected cost:       {:>16.2}", risk.expected);
            println!("Std deviation:       {:>16.2}", risk.std_dev);
            println!(
                "Coefficient of var:  {:>15.2}%",
                risk.coefficient_of_variation_pct
            );
            println!("Precision index:     {:>16.2}", risk.precision_index);

            println!("\n== Elasticities (rows: variables, cols: components) ==");
            print!("{:<20}", "");
            for component in &matrix.components {
                print!("{:>8}", component.code());
            }
            println!();
            for (variable, row) in matrix.variables.iter().zip(&matrix.values) {
                print!("{:<20}", variable.label());
                for value in row {
                    print!("{:>8.2}", value);
                }
                println!();
            }

            println!("\n== Component correlations ==");
            print!("{:<6}", "");
            for component in &correlations.components {
                print!("{:>8}", component.code());
            }
            println!();
            for (component, row) in correlations.components.iter().zip(&correlations.values) {
                print!("{:<6}", component.code());
                for value in row {
                    print!("{:>8.2}", value);
                }
                println!();
            }

            // Strongest off-diagonal pair, with its qualitative band.
            let mut strongest: Option<(CostComponent, CostComponent, f64)> = None;
            for i in 0..correlations.components.len() {
                for j in (i + 1)..correlations.components.len() {
                    let r = correlations.values[i][j];
                    if strongest.map_or(true, |(_, _, best)| r.abs() > best.abs()) {
                        strongest =
                            Some((correlations.components[i], correlations.components[j], r));
                    }
                }
            }
            if let Some((a, b, r)) = strongest {
                println!(
                    "\nStrongest coupling: {} / {} at {:.2} ({})",
                    a.code(),
                    b.code(),
                    r,
                    interpret(r).description()
                );
            }
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Analytics complete");
    Ok(())
}
