//! # Parameter Set
//!
//! One immutable record per network. Derived networks are produced by
//! cloning their parent and overwriting a documented list of fields, so the
//! provenance of every value can be read off [`TESTNET_OVERRIDES`] and
//! [`REGTEST_OVERRIDES`] and checked with [`ChainParams::field_diff`].

use std::fmt;

use shared_types::{Block, Hash256, PeerAddress, U256};

use super::error::{ChainParamsError, Result};
use super::genesis::GenesisSpec;
use super::network::{Base58Prefixes, Base58Type, ConsensusPhase, Network};
use super::seeds::DnsSeed;

/// Consensus and networking constants for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParams {
    pub(crate) network: Network,
    pub(crate) message_start: [u8; 4],
    pub(crate) alert_pubkey: Vec<u8>,
    pub(crate) default_port: u16,
    pub(crate) rpc_port: u16,
    pub(crate) pow_limit: U256,
    pub(crate) pos_limit: U256,
    pub(crate) genesis_spec: GenesisSpec,
    pub(crate) genesis: Block,
    pub(crate) genesis_hash: Hash256,
    pub(crate) base58_prefixes: Base58Prefixes,
    pub(crate) fixed_seeds: Vec<PeerAddress>,
    pub(crate) dns_seeds: Vec<DnsSeed>,
    pub(crate) data_dir: String,
    pub(crate) target_spacing: u64,
    pub(crate) target_timespan: u64,
    pub(crate) last_pow_block: u32,
    pub(crate) start_pos_block: u32,
    pub(crate) require_rpc_password: bool,
}

impl ChainParams {
    /// Network this set describes.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Magic bytes prefixed to every peer message.
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    /// Public key that signs network alerts.
    pub fn alert_key(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Easiest allowed proof-of-work target.
    pub fn pow_limit(&self) -> U256 {
        self.pow_limit
    }

    /// Easiest allowed proof-of-stake target.
    pub fn pos_limit(&self) -> U256 {
        self.pos_limit
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis_hash
    }

    /// Literal constants the genesis block was built from.
    pub fn genesis_spec(&self) -> &GenesisSpec {
        &self.genesis_spec
    }

    /// Base58 version prefix for `kind`.
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// Bootstrap addresses compiled into the binary.
    pub fn fixed_seeds(&self) -> &[PeerAddress] {
        &self.fixed_seeds
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    /// Subdirectory of the base data directory; empty for the production network.
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    /// Target seconds between blocks.
    pub fn target_spacing(&self) -> u64 {
        self.target_spacing
    }

    /// Retarget window in seconds.
    pub fn target_timespan(&self) -> u64 {
        self.target_timespan
    }

    /// Last height at which proof-of-work blocks are accepted.
    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    /// Height after which proof-of-stake blocks are accepted.
    pub fn start_pos_block(&self) -> u32 {
        self.start_pos_block
    }

    pub fn require_rpc_password(&self) -> bool {
        self.require_rpc_password
    }

    /// Which kinds of blocks may be produced at `height`.
    pub fn phase_at(&self, height: u32) -> ConsensusPhase {
        if height > self.last_pow_block {
            ConsensusPhase::ProofOfStake
        } else if height > self.start_pos_block {
            ConsensusPhase::Hybrid
        } else {
            ConsensusPhase::ProofOfWork
        }
    }

    /// Check the invariants a single set must hold.
    pub fn validate(&self) -> Result<()> {
        if self.target_spacing == 0 {
            return Err(ChainParamsError::InvalidTargetSpacing(self.network));
        }
        Ok(())
    }

    /// Fields whose values differ between `self` and `other`.
    ///
    /// The destructuring below is exhaustive: adding a field without
    /// classifying it fails to compile.
    pub fn field_diff(&self, other: &ChainParams) -> Vec<ParamField> {
        let ChainParams {
            network,
            message_start,
            alert_pubkey,
            default_port,
            rpc_port,
            pow_limit,
            pos_limit,
            genesis_spec,
            genesis,
            genesis_hash,
            base58_prefixes,
            fixed_seeds,
            dns_seeds,
            data_dir,
            target_spacing,
            target_timespan,
            last_pow_block,
            start_pos_block,
            require_rpc_password,
        } = self;

        let mut diff = Vec::new();

        macro_rules! compare {
            ($($field:ident => $variant:ident),* $(,)?) => {
                $(
                    if *$field != other.$field {
                        diff.push(ParamField::$variant);
                    }
                )*
            };
        }

        compare! {
            network => Network,
            message_start => MessageStart,
            alert_pubkey => AlertPubkey,
            default_port => DefaultPort,
            rpc_port => RpcPort,
            pow_limit => PowLimit,
            pos_limit => PosLimit,
        }
        if *genesis_spec != other.genesis_spec || *genesis != other.genesis {
            diff.push(ParamField::Genesis);
        }
        compare! {
            genesis_hash => GenesisHash,
            base58_prefixes => Base58Prefixes,
            fixed_seeds => FixedSeeds,
            dns_seeds => DnsSeeds,
            data_dir => DataDir,
            target_spacing => TargetSpacing,
            target_timespan => TargetTimespan,
            last_pow_block => LastPowBlock,
            start_pos_block => StartPosBlock,
            require_rpc_password => RequireRpcPassword,
        }
        diff
    }
}

/// Names of the [`ChainParams`] fields, used by the override tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    Network,
    MessageStart,
    AlertPubkey,
    DefaultPort,
    RpcPort,
    PowLimit,
    PosLimit,
    /// Genesis literals and the block built from them.
    Genesis,
    GenesisHash,
    Base58Prefixes,
    FixedSeeds,
    DnsSeeds,
    DataDir,
    TargetSpacing,
    TargetTimespan,
    LastPowBlock,
    StartPosBlock,
    RequireRpcPassword,
}

impl ParamField {
    /// Every field.
    pub const ALL: [ParamField; 18] = [
        ParamField::Network,
        ParamField::MessageStart,
        ParamField::AlertPubkey,
        ParamField::DefaultPort,
        ParamField::RpcPort,
        ParamField::PowLimit,
        ParamField::PosLimit,
        ParamField::Genesis,
        ParamField::GenesisHash,
        ParamField::Base58Prefixes,
        ParamField::FixedSeeds,
        ParamField::DnsSeeds,
        ParamField::DataDir,
        ParamField::TargetSpacing,
        ParamField::TargetTimespan,
        ParamField::LastPowBlock,
        ParamField::StartPosBlock,
        ParamField::RequireRpcPassword,
    ];
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Fields the public test network sets on top of the production network.
pub const TESTNET_OVERRIDES: &[ParamField] = &[
    ParamField::Network,
    ParamField::MessageStart,
    ParamField::AlertPubkey,
    ParamField::PowLimit,
    ParamField::PosLimit,
    ParamField::DefaultPort,
    ParamField::RpcPort,
    ParamField::DataDir,
    ParamField::Genesis,
    ParamField::GenesisHash,
    ParamField::Base58Prefixes,
    ParamField::FixedSeeds,
    ParamField::DnsSeeds,
    ParamField::TargetSpacing,
    ParamField::LastPowBlock,
    ParamField::StartPosBlock,
];

/// Fields the regression-test network sets on top of the public test network.
pub const REGTEST_OVERRIDES: &[ParamField] = &[
    ParamField::Network,
    ParamField::MessageStart,
    ParamField::PowLimit,
    ParamField::Genesis,
    ParamField::GenesisHash,
    ParamField::DefaultPort,
    ParamField::DataDir,
    ParamField::RequireRpcPassword,
    ParamField::FixedSeeds,
    ParamField::DnsSeeds,
];

/// Override table for `network`, relative to its parent. Empty for the root.
pub fn overrides_for(network: Network) -> &'static [ParamField] {
    match network {
        Network::Main => &[],
        Network::Testnet => TESTNET_OVERRIDES,
        Network::Regtest => REGTEST_OVERRIDES,
    }
}
