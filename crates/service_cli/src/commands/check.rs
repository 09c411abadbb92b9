//! Check command implementation
//!
//! Prints engine diagnostics: version, model modes, and the analytics
//! defaults, so operators can confirm what a deployment is running.

use landed_risk::correlation::{DEFAULT_SAMPLE_COUNT, DEFAULT_SEED};
use landed_risk::elasticity::PERTURBATION_STEP;
use tracing::info;

use crate::Result;

/// Run the check command
pub fn run() -> Result<()> {
    info!("Running configuration check...");

    println!("landed-cost engine {}", env!("CARGO_PKG_VERSION"));
    println!("  model modes:            itemised, landed-value");
    println!("  elasticity step:        {}", PERTURBATION_STEP);
    println!("  correlation seed:       {} (default)", DEFAULT_SEED);
    println!("  correlation samples:    {} (default)", DEFAULT_SAMPLE_COUNT);

    info!("Check complete");
    Ok(())
}
