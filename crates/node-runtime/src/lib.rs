//! # Node Runtime Library
//!
//! Startup plumbing for the node binary: command line, configuration and the
//! chain parameter bootstrap. The main entry point is the `main.rs` binary.

pub mod cli;
pub mod config;
pub mod startup;

pub use cli::Cli;
pub use config::{ConfigError, NodeConfig};
pub use startup::{run, ParamsSummary, StartupOutcome};
