//! Network identity and per-network value objects.

use std::fmt;
use std::str::FromStr;

use super::error::ChainParamsError;

/// The three operating modes of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Network {
    /// Production network.
    Main,
    /// Public test network.
    Testnet,
    /// Local regression-test network.
    Regtest,
}

impl Network {
    /// Every network, in derivation order.
    pub const ALL: [Network; 3] = [Network::Main, Network::Testnet, Network::Regtest];

    /// Short name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            other => Err(ChainParamsError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Pick a network from the `-testnet` / `-regtest` startup flags.
///
/// Both flags together is a configuration conflict.
pub fn network_from_flags(testnet: bool, regtest: bool) -> Result<Network, ChainParamsError> {
    match (testnet, regtest) {
        (true, true) => Err(ChainParamsError::ConfigConflict),
        (_, true) => Ok(Network::Regtest),
        (true, false) => Ok(Network::Testnet),
        (false, false) => Ok(Network::Main),
    }
}

/// Kinds of base58-encoded payloads that carry a network prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address.
    PubkeyAddress,
    /// Pay-to-script-hash address.
    ScriptAddress,
    /// WIF private key.
    SecretKey,
    /// Extended public key.
    ExtPublicKey,
    /// Extended private key.
    ExtSecretKey,
}

/// Base58 version prefixes for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base58Prefixes {
    /// Prefix for pubkey-hash addresses.
    pub pubkey_address: Vec<u8>,
    /// Prefix for script-hash addresses.
    pub script_address: Vec<u8>,
    /// Prefix for private keys.
    pub secret_key: Vec<u8>,
    /// Prefix for extended public keys.
    pub ext_public_key: Vec<u8>,
    /// Prefix for extended private keys.
    pub ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    /// Prefix bytes for `kind`.
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}

/// Block production mode at a given height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsensusPhase {
    /// Only proof-of-work blocks.
    ProofOfWork,
    /// Proof-of-work and proof-of-stake blocks overlap.
    Hybrid,
    /// Only proof-of-stake blocks.
    ProofOfStake,
}
