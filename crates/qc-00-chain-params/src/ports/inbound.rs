//! # Driving Ports (Inbound API)
//!
//! The read/select surface every other subsystem uses to reach the active
//! parameter set.

use std::sync::Arc;

use crate::domain::{ChainParams, Network, Result};

/// Access to the process-wide active chain parameters.
///
/// Selection is expected once during startup, before any worker reads.
/// Implementations must still make re-selection atomic for readers.
pub trait ParamsProvider: Send + Sync {
    /// The currently active parameter set.
    fn active_params(&self) -> Arc<ChainParams>;

    /// Network of the currently active set.
    fn active_network(&self) -> Network;

    /// Make `network` the active set.
    fn select_network(&self, network: Network);

    /// Select from the `-testnet` / `-regtest` flags.
    ///
    /// Fails with `ConfigConflict` when both are set; nothing is activated
    /// in that case.
    fn select_from_flags(&self, testnet: bool, regtest: bool) -> Result<Network>;
}
