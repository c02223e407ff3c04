//! Error types for the chain parameters subsystem.

use std::fmt;

use thiserror::Error;

use super::network::Network;

/// Result type alias for chain parameter operations.
pub type Result<T> = std::result::Result<T, ChainParamsError>;

/// A compiled-in constant that is recomputed and checked at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsensusConstant {
    /// Hash of the genesis block header.
    GenesisHash,
    /// Merkle root of the genesis transactions.
    GenesisMerkleRoot,
}

impl fmt::Display for ConsensusConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsensusConstant::GenesisHash => write!(f, "genesis hash"),
            ConsensusConstant::GenesisMerkleRoot => write!(f, "genesis merkle root"),
        }
    }
}

/// Errors raised while building or selecting chain parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainParamsError {
    /// A recomputed consensus constant disagrees with its literal.
    ///
    /// This is a broken build, never a user error.
    #[error("Consensus constant mismatch on {network}: {constant} expected {expected}, computed {computed}")]
    ConsensusConstantMismatch {
        /// Network whose constants are broken.
        network: Network,
        /// Which constant failed.
        constant: ConsensusConstant,
        /// Literal value compiled into the binary.
        expected: String,
        /// Value produced by the genesis pipeline.
        computed: String,
    },

    /// A compiled-in literal could not be parsed.
    #[error("Malformed {what} literal for {network}: {reason}")]
    MalformedConstant {
        /// Network owning the literal.
        network: Network,
        /// Name of the literal.
        what: &'static str,
        /// Parser error.
        reason: String,
    },

    /// Two networks share a message start and would accept each other's traffic.
    #[error("Networks {first} and {second} share message start {magic}")]
    DuplicateMessageStart {
        /// First network.
        first: Network,
        /// Second network.
        second: Network,
        /// Shared magic, hex encoded.
        magic: String,
    },

    /// Target spacing must be positive.
    #[error("Target spacing for {0} must be positive")]
    InvalidTargetSpacing(Network),

    /// A parameter set was registered under the wrong network.
    #[error("Parameter set for {found} registered in the {expected} slot")]
    NetworkSlotMismatch {
        /// Slot the set was passed for.
        expected: Network,
        /// Network the set actually describes.
        found: Network,
    },

    /// Mutually exclusive network flags were both requested.
    #[error("Invalid combination of -regtest and -testnet")]
    ConfigConflict,

    /// A network name did not match any known network.
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// The process-wide registry was installed twice.
    #[error("Chain parameters already initialized")]
    AlreadyInitialized,

    /// The process-wide registry was read before installation.
    #[error("Chain parameters not initialized")]
    NotInitialized,
}

impl ChainParamsError {
    /// Whether this error signals a corrupted build that must halt the process.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ChainParamsError::ConsensusConstantMismatch { .. }
                | ChainParamsError::MalformedConstant { .. }
                | ChainParamsError::DuplicateMessageStart { .. }
                | ChainParamsError::InvalidTargetSpacing(_)
                | ChainParamsError::NetworkSlotMismatch { .. }
        )
    }
}
