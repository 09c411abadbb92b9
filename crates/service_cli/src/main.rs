//! Landed CLI - Command Line Operations for the Landed-Cost Engine
//!
//! This is the operational entry point for the landed-cost workspace.
//!
//! # Commands
//!
//! - `landed compute --scenario <file>` - Compute a cost breakdown
//! - `landed analyze --scenario <file>` - Breakdown plus risk, elasticity, and correlation analytics
//! - `landed optimise --scenario <file> --candidates <list>` - Order-size search
//! - `landed check` - Print engine diagnostics
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! model, risk, and optimiser layers behind a unified command-line
//! interface. All engine work stays pure; this binary owns the only
//! I/O in the repository.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Landed-cost engine CLI
#[derive(Parser)]
#[command(name = "landed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a cost breakdown from a scenario file
    Compute {
        /// Path to the TOML scenario file
        #[arg(short, long)]
        scenario: String,

        /// Model mode (itemised, landed-value)
        #[arg(short, long, default_value = "itemised")]
        model: String,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Run the full analytics suite over a scenario
    Analyze {
        /// Path to the TOML scenario file
        #[arg(short, long)]
        scenario: String,

        /// Seed for the correlation resampler
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Monte-Carlo sample count for the correlation resampler
        #[arg(long, default_value = "2048")]
        samples: usize,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Search candidate order quantities for the cheapest feasible one
    Optimise {
        /// Path to the TOML scenario file
        #[arg(short, long)]
        scenario: String,

        /// Comma-separated candidate quantities (e.g. 10,50,100,500)
        #[arg(short, long)]
        candidates: String,
    },

    /// Check engine configuration
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Compute {
            scenario,
            model,
            format,
        } => commands::compute::run(&scenario, &model, &format),
        Commands::Analyze {
            scenario,
            seed,
            samples,
            format,
        } => commands::analyze::run(&scenario, seed, samples, &format),
        Commands::Optimise {
            scenario,
            candidates,
        } => commands::optimise::run(&scenario, &candidates),
        Commands::Check => commands::check::run(),
    }
}
