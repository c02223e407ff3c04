//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Proof-of-work / proof-of-stake node.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "node-runtime", version, about)]
pub struct Cli {
    /// Use the public test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the local regression-test network
    #[arg(long)]
    pub regtest: bool,

    /// Base data directory; the network's subdirectory is appended
    #[arg(long, value_name = "PATH")]
    pub datadir: Option<PathBuf>,

    /// Print the active chain parameters as JSON and exit
    #[arg(long)]
    pub dump_params: bool,
}
