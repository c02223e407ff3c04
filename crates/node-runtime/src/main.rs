//! # Node Runtime
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Build and self-check every network's chain parameters
//! 3. Select the network from `--testnet` / `--regtest`
//! 4. Derive configuration (from params, then env) and validate it
//!
//! Any failure exits with a non-zero status before services start.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use node_runtime::{run, Cli, StartupOutcome};
use qc_telemetry::{init_tracing, TelemetryConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&TelemetryConfig::from_env()).context("cannot initialize logging")?;

    match run(&cli, |key| std::env::var(key).ok())? {
        StartupOutcome::Dumped(json) => println!("{json}"),
        StartupOutcome::Ready(config) => {
            info!(network = %config.network, "Node is ready");
        }
    }
    Ok(())
}
