//! # Startup Sequence
//!
//! 1. Build every network's parameters (genesis self-checks run here)
//! 2. Select the active network from the command line
//! 3. Install the process-wide registry
//! 4. Derive and validate the node configuration, or dump the parameters

use anyhow::{Context, Result};
use qc_00_chain_params::{
    init_global, Base58Type, ChainParams, ChainParamsError, Network, ParamsProvider,
    ParamsRegistry,
};
use qc_telemetry::log_event;
use serde::Serialize;
use shared_types::{to_compact, Hash256};

use crate::cli::Cli;
use crate::config::{resolve_base_dir, NodeConfig};

const SUBSYSTEM: &str = "node-runtime";

/// What the process should do after startup.
#[derive(Debug)]
pub enum StartupOutcome {
    /// Parameters were printed; nothing else to do.
    Dumped(String),
    /// Node is configured and ready to start its services.
    Ready(NodeConfig),
}

/// Build all parameter sets, treating any failure as a corrupted build.
pub fn build_registry() -> Result<ParamsRegistry> {
    ParamsRegistry::with_system_sources()
        .inspect_err(|e| {
            log_event!(
                error,
                SUBSYSTEM,
                "Compiled-in chain parameters are invalid",
                error = %e,
                fatal = e.is_fatal()
            );
        })
        .context("chain parameter self-check failed")
}

/// Apply the `--testnet` / `--regtest` flags to `provider`.
pub fn select_network(
    provider: &dyn ParamsProvider,
    cli: &Cli,
) -> Result<Network, ChainParamsError> {
    let network = provider.select_from_flags(cli.testnet, cli.regtest)?;
    log_event!(info, SUBSYSTEM, "Network selected", network = %network);
    Ok(network)
}

/// Node configuration for `params`, with environment overrides applied and validated.
pub fn node_config(
    params: &ChainParams,
    cli: &Cli,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<NodeConfig> {
    let base = resolve_base_dir(cli.datadir.as_deref(), &lookup);
    let mut config = NodeConfig::from_params(params, &base);
    config.apply_env_overrides(&lookup);
    config.validate().context("invalid node configuration")?;
    Ok(config)
}

/// Run the startup sequence against the process-wide registry.
pub fn run(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<StartupOutcome> {
    let registry = build_registry()?;
    select_network(&registry, cli).context("cannot select network")?;
    let registry = init_global(registry).context("cannot install chain parameters")?;

    let params = registry.active_params();
    log_event!(
        info,
        SUBSYSTEM,
        "Chain parameters active",
        network = %params.network(),
        genesis = %params.genesis_hash(),
        port = params.default_port()
    );

    if cli.dump_params {
        let json = ParamsSummary::from(params.as_ref()).to_json()?;
        return Ok(StartupOutcome::Dumped(json));
    }

    let config = node_config(&params, cli, lookup)?;
    log_event!(
        info,
        SUBSYSTEM,
        "Node configured",
        p2p_port = config.p2p_port,
        rpc_port = config.rpc_port,
        data_dir = %config.data_dir.display()
    );
    Ok(StartupOutcome::Ready(config))
}

/// JSON view of a parameter set.
#[derive(Debug, Clone, Serialize)]
pub struct ParamsSummary {
    pub network: String,
    pub message_start: String,
    pub default_port: u16,
    pub rpc_port: u16,
    pub genesis_hash: Hash256,
    pub genesis_time: u32,
    pub genesis_bits: String,
    pub pow_limit_bits: String,
    pub pos_limit_bits: String,
    pub pubkey_address_prefix: Vec<u8>,
    pub script_address_prefix: Vec<u8>,
    pub secret_key_prefix: Vec<u8>,
    pub fixed_seeds: usize,
    pub dns_seeds: usize,
    pub data_dir: String,
    pub target_spacing: u64,
    pub target_timespan: u64,
    pub last_pow_block: u32,
    pub start_pos_block: u32,
    pub require_rpc_password: bool,
}

impl ParamsSummary {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("cannot serialize chain parameters")
    }
}

impl From<&ChainParams> for ParamsSummary {
    fn from(params: &ChainParams) -> Self {
        let header = &params.genesis_block().header;
        Self {
            network: params.network().to_string(),
            message_start: hex::encode(params.message_start()),
            default_port: params.default_port(),
            rpc_port: params.rpc_port(),
            genesis_hash: params.genesis_hash(),
            genesis_time: header.time,
            genesis_bits: format!("{:08x}", header.bits),
            pow_limit_bits: format!("{:08x}", to_compact(params.pow_limit())),
            pos_limit_bits: format!("{:08x}", to_compact(params.pos_limit())),
            pubkey_address_prefix: params.base58_prefix(Base58Type::PubkeyAddress).to_vec(),
            script_address_prefix: params.base58_prefix(Base58Type::ScriptAddress).to_vec(),
            secret_key_prefix: params.base58_prefix(Base58Type::SecretKey).to_vec(),
            fixed_seeds: params.fixed_seeds().len(),
            dns_seeds: params.dns_seeds().len(),
            data_dir: params.data_dir().to_string(),
            target_spacing: params.target_spacing(),
            target_timespan: params.target_timespan(),
            last_pow_block: params.last_pow_block(),
            start_pos_block: params.start_pos_block(),
            require_rpc_password: params.require_rpc_password(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(testnet: bool, regtest: bool) -> Cli {
        Cli {
            testnet,
            regtest,
            ..Cli::default()
        }
    }

    #[test]
    fn test_conflicting_flags_activate_nothing() {
        let registry = build_registry().unwrap();
        let err = select_network(&registry, &cli(true, true)).unwrap_err();
        assert_eq!(err, ChainParamsError::ConfigConflict);
        assert!(!err.is_fatal());
        assert_eq!(registry.active_network(), Network::Main);
    }

    #[test]
    fn test_regtest_config_needs_no_password() {
        let registry = build_registry().unwrap();
        select_network(&registry, &cli(false, true)).unwrap();
        let config = node_config(&registry.active_params(), &cli(false, true), |_| None).unwrap();
        assert_eq!(config.p2p_port, 5444);
        assert!(config.data_dir.ends_with("regtest"));
    }

    #[test]
    fn test_env_data_dir_is_base_for_selected_network() {
        let registry = build_registry().unwrap();
        select_network(&registry, &cli(false, true)).unwrap();
        let lookup = |key: &str| (key == "QC_DATA_DIR").then(|| "/srv/node".to_string());
        let config = node_config(&registry.active_params(), &cli(false, true), lookup).unwrap();
        assert_eq!(config.data_dir, std::path::PathBuf::from("/srv/node/regtest"));
    }

    #[test]
    fn test_main_config_without_password_fails() {
        let registry = build_registry().unwrap();
        let err = node_config(&registry.active_params(), &cli(false, false), |_| None).unwrap_err();
        assert!(format!("{err:#}").contains("RPC password required"));
    }

    #[test]
    fn test_summary_json() {
        let registry = build_registry().unwrap();
        let summary = ParamsSummary::from(registry.params(Network::Testnet).as_ref());
        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["network"], "test");
        assert_eq!(value["message_start"], "0a0b0a0b");
        assert_eq!(value["genesis_bits"], "1f00ffff");
        assert_eq!(
            value["genesis_hash"],
            "00001329ead5be7a8af1aea75410f8c4175487092106cdf5bd490777ea127c2e"
        );
        assert_eq!(value["pubkey_address_prefix"], serde_json::json!([46]));
    }
}
