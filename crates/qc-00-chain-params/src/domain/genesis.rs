//! # Genesis Block Builder
//!
//! Turns a handful of literal constants into the genesis block of a network
//! and checks the result against the hashes compiled into the binary.
//!
//! The coinbase unlocking script is `push 0, push 42, push <message>`. Every
//! byte of it feeds the merkle root and therefore the block hash, so the
//! sequence must never change.

use shared_types::{Block, BlockHeader, Hash256, HashParseError, Script, Transaction, TxIn, TxOut};
use tracing::{debug, error};

use super::error::{ChainParamsError, ConsensusConstant, Result};
use super::network::Network;

/// Block and coinbase transaction version used by every genesis block.
pub const GENESIS_VERSION: i32 = 1;

/// Second integer pushed by the genesis coinbase script.
pub const GENESIS_SCRIPT_TAG: i64 = 42;

/// Literal constants describing one network's genesis block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisSpec {
    /// Header and coinbase version.
    pub version: i32,
    /// Header timestamp.
    pub time: u32,
    /// Compact difficulty bits.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
    /// Timestamp carried by the coinbase transaction.
    pub coinbase_time: u32,
    /// Payload embedded in the coinbase script.
    pub coinbase_message: &'static [u8],
    /// Expected block hash, reversed hex.
    pub expected_hash: &'static str,
    /// Expected merkle root, reversed hex.
    pub expected_merkle_root: &'static str,
}

/// A verified genesis block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genesis {
    /// The block itself.
    pub block: Block,
    /// Its header hash.
    pub hash: Hash256,
}

/// Coinbase unlocking script carrying `message`.
pub fn coinbase_script(message: &[u8]) -> Script {
    Script::new()
        .push_int(0)
        .push_int(GENESIS_SCRIPT_TAG)
        .push_slice(message)
}

/// Build the genesis block described by `spec` without checking it.
pub fn assemble_genesis(spec: &GenesisSpec) -> Block {
    let coinbase = Transaction {
        version: spec.version,
        time: spec.coinbase_time,
        inputs: vec![TxIn::coinbase(coinbase_script(spec.coinbase_message))],
        outputs: vec![TxOut::empty()],
        lock_time: 0,
    };

    let mut block = Block {
        header: BlockHeader {
            version: spec.version,
            prev_block: Hash256::ZERO,
            merkle_root: Hash256::ZERO,
            time: spec.time,
            bits: spec.bits,
            nonce: spec.nonce,
        },
        transactions: vec![coinbase],
    };
    block.header.merkle_root = block.build_merkle_root();
    block
}

/// Build and verify the genesis block for `network`.
///
/// Fails with [`ChainParamsError::ConsensusConstantMismatch`] when the
/// recomputed merkle root or block hash differs from the literal.
pub fn build_genesis(network: Network, spec: &GenesisSpec) -> Result<Genesis> {
    let expected_root = parse_literal(network, "genesis merkle root", spec.expected_merkle_root)?;
    let expected_hash = parse_literal(network, "genesis hash", spec.expected_hash)?;

    let block = assemble_genesis(spec);

    let root = block.header.merkle_root;
    check_constant(network, ConsensusConstant::GenesisMerkleRoot, expected_root, root)?;

    let hash = block.block_hash();
    check_constant(network, ConsensusConstant::GenesisHash, expected_hash, hash)?;

    debug!(%network, %hash, merkle_root = %root, "Genesis block verified");
    Ok(Genesis { block, hash })
}

fn parse_literal(network: Network, what: &'static str, literal: &str) -> Result<Hash256> {
    literal
        .parse()
        .map_err(|e: HashParseError| ChainParamsError::MalformedConstant {
            network,
            what,
            reason: e.to_string(),
        })
}

fn check_constant(
    network: Network,
    constant: ConsensusConstant,
    expected: Hash256,
    computed: Hash256,
) -> Result<()> {
    if expected == computed {
        return Ok(());
    }
    error!(%network, %constant, %expected, %computed, "Consensus constant mismatch");
    Err(ChainParamsError::ConsensusConstantMismatch {
        network,
        constant,
        expected: expected.to_string(),
        computed: computed.to_string(),
    })
}
