//! Optimise command implementation
//!
//! Scans candidate order quantities for the cheapest one meeting the
//! scenario's minimum demand.

use landed_optimiser::optimise_snapshot;
use tracing::info;

use crate::{config, CliError, Result};

/// Run the optimise command
pub fn run(scenario: &str, candidates: &str) -> Result<()> {
    info!("Running order-size search...");
    info!("  Scenario: {}", scenario);
    info!("  Candidates: {}", candidates);

    let snapshot = config::load_scenario(scenario)?;
    let quantities = parse_candidates(candidates)?;

    let best = optimise_snapshot(&snapshot, &quantities)?;

    println!("Optimal order quantity: {} units", best.quantity);
    println!("Unit cost:              {:.2}", best.unit_cost);
    println!("Total cost:             {:.2}", best.total_cost);

    info!("Search complete");
    Ok(())
}

fn parse_candidates(candidates: &str) -> Result<Vec<u64>> {
    candidates
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>().map_err(|_| {
                CliError::InvalidArgument(format!("invalid candidate quantity: {}", part))
            })
        })
        .collect()
}
