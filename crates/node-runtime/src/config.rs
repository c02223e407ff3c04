//! # Node Configuration
//!
//! Runtime settings derived from the active chain parameters, then
//! overridden from the environment.
//!
//! ## Security Requirements
//!
//! - An RPC password MUST be configured on networks that require one

use std::path::{Path, PathBuf};

use qc_00_chain_params::{ChainParams, Network};
use tracing::{info, warn};

/// Base data directory used when none is given.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Base data directory: `QC_DATA_DIR`, then `--datadir`, then [`DEFAULT_DATA_DIR`].
///
/// The network subdirectory is appended later by [`NodeConfig::from_params`].
pub fn resolve_base_dir(
    cli_dir: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    match lookup("QC_DATA_DIR").filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => cli_dir.map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), Path::to_path_buf),
    }
}

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Active network.
    pub network: Network,
    /// Network magic, for the P2P layer.
    pub message_start: [u8; 4],
    /// P2P listening port.
    pub p2p_port: u16,
    /// JSON-RPC listening port.
    pub rpc_port: u16,
    /// JSON-RPC password, if any.
    pub rpc_password: Option<String>,
    /// Whether the network refuses to run RPC without a password.
    pub require_rpc_password: bool,
    /// Data directory, including the network subdirectory.
    pub data_dir: PathBuf,
}

impl NodeConfig {
    /// Defaults for the network described by `params`, rooted at `base_dir`.
    pub fn from_params(params: &ChainParams, base_dir: &Path) -> Self {
        let data_dir = match params.data_dir() {
            "" => base_dir.to_path_buf(),
            sub => base_dir.join(sub),
        };
        Self {
            network: params.network(),
            message_start: params.message_start(),
            p2p_port: params.default_port(),
            rpc_port: params.rpc_port(),
            rpc_password: None,
            require_rpc_password: params.require_rpc_password(),
            data_dir,
        }
    }

    /// Apply `QC_P2P_PORT`, `QC_RPC_PORT` and `QC_RPC_PASSWORD`.
    ///
    /// Unparseable ports are ignored with a warning.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(port) = lookup("QC_P2P_PORT") {
            match port.parse() {
                Ok(p) => self.p2p_port = p,
                Err(_) => warn!(value = %port, "Ignoring invalid QC_P2P_PORT"),
            }
        }
        if let Some(port) = lookup("QC_RPC_PORT") {
            match port.parse() {
                Ok(p) => self.rpc_port = p,
                Err(_) => warn!(value = %port, "Ignoring invalid QC_RPC_PORT"),
            }
        }
        if let Some(password) = lookup("QC_RPC_PASSWORD") {
            if !password.is_empty() {
                self.rpc_password = Some(password);
                info!("Loaded RPC password from environment");
            }
        }
    }

    /// Validate configuration before the node starts.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - the network requires an RPC password and none is set
    /// - the P2P and RPC ports collide
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.require_rpc_password && self.rpc_password.is_none() {
            return Err(ConfigError::MissingRpcPassword(self.network));
        }
        if self.p2p_port == self.rpc_port {
            return Err(ConfigError::PortCollision(self.p2p_port));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The network requires an RPC password and none was configured.
    MissingRpcPassword(Network),
    /// P2P and RPC share a port.
    PortCollision(u16),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingRpcPassword(network) => {
                write!(
                    f,
                    "RPC password required on {network}. \
                     Set QC_RPC_PASSWORD environment variable."
                )
            }
            ConfigError::PortCollision(port) => {
                write!(f, "P2P and RPC ports are both {port}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use qc_00_chain_params::adapters::{FixedRandomSource, FixedTimeSource};
    use qc_00_chain_params::domain::build_all;
    use std::collections::HashMap;

    fn params() -> [ChainParams; 3] {
        build_all(&FixedTimeSource(1_700_000_000), &FixedRandomSource::new(0)).unwrap()
    }

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_follow_params() {
        let [main, testnet, regtest] = params();
        let base = Path::new("/var/qc");

        let config = NodeConfig::from_params(&main, base);
        assert_eq!((config.p2p_port, config.rpc_port), (9889, 9887));
        assert_eq!(config.data_dir, PathBuf::from("/var/qc"));

        let config = NodeConfig::from_params(&testnet, base);
        assert_eq!(config.data_dir, PathBuf::from("/var/qc/testnet"));

        let config = NodeConfig::from_params(&regtest, base);
        assert_eq!(config.p2p_port, 5444);
        assert_eq!(config.message_start, [0x21, 0xbb, 0xab, 0xba]);
        assert!(!config.require_rpc_password);
    }

    #[test]
    fn test_env_overrides() {
        let [main, ..] = params();
        let mut config = NodeConfig::from_params(&main, Path::new(DEFAULT_DATA_DIR));
        config.apply_env_overrides(env(&[
            ("QC_P2P_PORT", "19889"),
            ("QC_RPC_PORT", "not-a-port"),
            ("QC_RPC_PASSWORD", "hunter2"),
        ]));
        assert_eq!(config.p2p_port, 19889);
        assert_eq!(config.rpc_port, 9887);
        assert_eq!(config.rpc_password.as_deref(), Some("hunter2"));
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_base_dir_precedence() {
        let cli_dir = Path::new("/opt/qc");
        assert_eq!(
            resolve_base_dir(Some(cli_dir), env(&[("QC_DATA_DIR", "/srv/node")])),
            PathBuf::from("/srv/node")
        );
        assert_eq!(resolve_base_dir(Some(cli_dir), env(&[])), PathBuf::from("/opt/qc"));
        assert_eq!(
            resolve_base_dir(Some(cli_dir), env(&[("QC_DATA_DIR", "")])),
            PathBuf::from("/opt/qc")
        );
        assert_eq!(resolve_base_dir(None, env(&[])), PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_env_data_dir_keeps_networks_apart() {
        let base = resolve_base_dir(None, env(&[("QC_DATA_DIR", "/srv/node")]));
        let dirs: Vec<PathBuf> = params()
            .iter()
            .map(|p| NodeConfig::from_params(p, &base).data_dir)
            .collect();

        assert_eq!(dirs[0], PathBuf::from("/srv/node"));
        assert_eq!(dirs[1], PathBuf::from("/srv/node/testnet"));
        assert_eq!(dirs[2], PathBuf::from("/srv/node/regtest"));
        assert_ne!(dirs[0], dirs[1]);
        assert_ne!(dirs[1], dirs[2]);
        assert_ne!(dirs[0], dirs[2]);
    }

    #[test]
    fn test_rpc_password_requirement() {
        let [main, _, regtest] = params();

        let config = NodeConfig::from_params(&main, Path::new(DEFAULT_DATA_DIR));
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingRpcPassword(Network::Main))
        );

        let mut config = NodeConfig::from_params(&main, Path::new(DEFAULT_DATA_DIR));
        config.apply_env_overrides(env(&[("QC_RPC_PASSWORD", "")]));
        assert!(config.validate().is_err());

        config.apply_env_overrides(env(&[("QC_RPC_PASSWORD", "secret")]));
        assert!(config.validate().is_ok());

        let config = NodeConfig::from_params(&regtest, Path::new(DEFAULT_DATA_DIR));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_port_collision() {
        let [_, _, regtest] = params();
        let mut config = NodeConfig::from_params(&regtest, Path::new(DEFAULT_DATA_DIR));
        config.apply_env_overrides(env(&[("QC_RPC_PORT", "5444")]));
        assert_eq!(config.validate(), Err(ConfigError::PortCollision(5444)));
    }
}
