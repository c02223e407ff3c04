//! # Core Chain Entities
//!
//! Block and transaction value types for a timestamped proof-of-work /
//! proof-of-stake chain, plus the hashing rules that give them identity.
//!
//! ## Clusters
//!
//! - **Identity**: `Hash256`
//! - **Transactions**: `OutPoint`, `TxIn`, `TxOut`, `Transaction`
//! - **Blocks**: `BlockHeader`, `Block`

use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compact::from_compact;
use crate::encoding::{write_var_bytes, Encodable};
use crate::errors::HashParseError;
use crate::hashing::sha256d;
use crate::merkle::merkle_root;
use crate::script::Script;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 256-bit hash in internal byte order.
///
/// Digests are stored exactly as produced by the hash function. The textual
/// form reverses the bytes, matching how block and transaction ids are
/// conventionally displayed.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    /// The all-zero hash.
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    /// Wrap digest bytes in internal order.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Bytes in internal order.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Interpret the hash as a little-endian 256-bit integer.
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }

    /// Hash of `data` under double SHA-256.
    pub fn hash(data: &[u8]) -> Self {
        Self(sha256d(data))
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({self})")
    }
}

impl FromStr for Hash256 {
    type Err = HashParseError;

    /// Parse the display form, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != 64 {
            return Err(HashParseError::InvalidLength(digits.len()));
        }
        let decoded = hex::decode(digits).map_err(|e| HashParseError::InvalidHex(e.to_string()))?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        bytes.reverse();
        Ok(Self(bytes))
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Encodable for Hash256 {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

// =============================================================================
// CLUSTER B: TRANSACTIONS
// =============================================================================

/// Reference to a previous transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Id of the transaction holding the output.
    pub txid: Hash256,
    /// Output index within that transaction.
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint used by coinbase inputs, which spend nothing.
    pub const fn null() -> Self {
        Self {
            txid: Hash256::ZERO,
            vout: u32::MAX,
        }
    }

    /// Whether this is the coinbase sentinel.
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.txid.consensus_encode(out);
        self.vout.consensus_encode(out);
    }
}

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    /// Output being spent.
    pub prevout: OutPoint,
    /// Unlocking script.
    pub script_sig: Script,
    /// Sequence number.
    pub sequence: u32,
}

impl TxIn {
    /// Input that spends nothing and carries `script_sig`.
    pub fn coinbase(script_sig: Script) -> Self {
        Self {
            prevout: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }
    }
}

impl Encodable for TxIn {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.prevout.consensus_encode(out);
        write_var_bytes(out, self.script_sig.as_bytes());
        self.sequence.consensus_encode(out);
    }
}

/// A transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in base units.
    pub value: i64,
    /// Locking script.
    pub script_pubkey: Script,
}

impl TxOut {
    /// Zero-value output with an empty locking script.
    pub fn empty() -> Self {
        Self {
            value: 0,
            script_pubkey: Script::new(),
        }
    }

    /// Whether this output is the empty marker.
    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

impl Encodable for TxOut {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.value.consensus_encode(out);
        write_var_bytes(out, self.script_pubkey.as_bytes());
    }
}

/// A timestamped transaction.
///
/// Proof-of-stake chains carry a transaction time alongside the usual
/// version / inputs / outputs / lock time tuple; it is part of the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction format version.
    pub version: i32,
    /// Unix timestamp of the transaction.
    pub time: u32,
    /// Inputs.
    pub inputs: Vec<TxIn>,
    /// Outputs.
    pub outputs: Vec<TxOut>,
    /// Lock time.
    pub lock_time: u32,
}

impl Transaction {
    /// Transaction id (double SHA-256 of the consensus encoding).
    pub fn txid(&self) -> Hash256 {
        Hash256::hash(&self.to_consensus_bytes())
    }

    /// Whether this transaction is a coinbase (single null-outpoint input).
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.version.consensus_encode(out);
        self.time.consensus_encode(out);
        self.inputs.consensus_encode(out);
        self.outputs.consensus_encode(out);
        self.lock_time.consensus_encode(out);
    }
}

// =============================================================================
// CLUSTER C: BLOCKS
// =============================================================================

/// Serialized size of a block header.
pub const BLOCK_HEADER_SIZE: usize = 80;

/// The header of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block format version.
    pub version: i32,
    /// Hash of the parent block.
    pub prev_block: Hash256,
    /// Merkle root of the block's transactions.
    pub merkle_root: Hash256,
    /// Unix timestamp.
    pub time: u32,
    /// Compact difficulty target.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
}

impl BlockHeader {
    /// Block id (double SHA-256 of the 80-byte header).
    pub fn block_hash(&self) -> Hash256 {
        Hash256::hash(&self.to_consensus_bytes())
    }

    /// Whether the header hash satisfies its own compact target.
    ///
    /// Malformed `bits` never satisfy the target.
    pub fn meets_target(&self) -> bool {
        match from_compact(self.bits) {
            Ok(target) if !target.is_zero() => self.block_hash().to_u256() <= target,
            _ => false,
        }
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.version.consensus_encode(out);
        self.prev_block.consensus_encode(out);
        self.merkle_root.consensus_encode(out);
        self.time.consensus_encode(out);
        self.bits.consensus_encode(out);
        self.nonce.consensus_encode(out);
    }
}

/// A block: header plus transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block header.
    pub header: BlockHeader,
    /// Transactions, coinbase first.
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Merkle root over the block's transaction ids.
    pub fn build_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        merkle_root(&txids)
    }

    /// Block id.
    pub fn block_hash(&self) -> Hash256 {
        self.header.block_hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_coinbase() -> Transaction {
        Transaction {
            version: 1,
            time: 1_498_282_200,
            inputs: vec![TxIn::coinbase(Script::new().push_int(0).push_int(42))],
            outputs: vec![TxOut::empty()],
            lock_time: 0,
        }
    }

    #[test]
    fn test_hash_display_is_reversed() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        let hash = Hash256::from_bytes(bytes);
        let text = hash.to_string();
        assert!(text.ends_with("ab"));
        assert!(text.starts_with("00"));
    }

    #[test]
    fn test_hash_parse_round_trips_display() {
        let text = "00003c51f41f223dbb2c62d7e71f2f014625f8920607e4999b5f619e34b06d8f";
        let hash: Hash256 = text.parse().unwrap();
        assert_eq!(hash.to_string(), text);
        assert_eq!(hash.as_bytes()[31], 0x00);
        assert_eq!(hash.as_bytes()[0], 0x8f);

        let prefixed: Hash256 = format!("0x{text}").parse().unwrap();
        assert_eq!(prefixed, hash);
    }

    #[test]
    fn test_hash_parse_rejects_bad_input() {
        assert_eq!(
            "abcd".parse::<Hash256>(),
            Err(HashParseError::InvalidLength(4))
        );
        let bad = "zz".repeat(32);
        assert!(matches!(
            bad.parse::<Hash256>(),
            Err(HashParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_hash_serde_uses_display_form() {
        let hash = Hash256::hash(b"serde");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{hash}\""));
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn test_coinbase_shape() {
        let tx = sample_coinbase();
        assert!(tx.is_coinbase());
        assert!(tx.outputs[0].is_empty());
        assert!(OutPoint::null().is_null());
    }

    #[test]
    fn test_transaction_encoding_layout() {
        let bytes = sample_coinbase().to_consensus_bytes();
        // version(4) time(4) n_in(1) outpoint(36) script(1+3) seq(4) n_out(1) value(8) script(1) lock(4)
        assert_eq!(bytes.len(), 4 + 4 + 1 + 36 + 4 + 4 + 1 + 8 + 1 + 4);
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[4..8], &1_498_282_200u32.to_le_bytes());
    }

    #[test]
    fn test_header_encodes_to_80_bytes() {
        let header = BlockHeader {
            version: 1,
            prev_block: Hash256::ZERO,
            merkle_root: Hash256::hash(b"root"),
            time: 1,
            bits: 0x207f_ffff,
            nonce: 0,
        };
        assert_eq!(header.to_consensus_bytes().len(), BLOCK_HEADER_SIZE);
    }

    #[test]
    fn test_meets_target_rejects_malformed_bits() {
        let header = BlockHeader {
            version: 1,
            prev_block: Hash256::ZERO,
            merkle_root: Hash256::ZERO,
            time: 0,
            bits: 0x0180_0001,
            nonce: 0,
        };
        assert!(!header.meets_target());
    }

    #[test]
    fn test_single_tx_merkle_root_is_txid() {
        let tx = sample_coinbase();
        let block = Block {
            header: BlockHeader {
                version: 1,
                prev_block: Hash256::ZERO,
                merkle_root: Hash256::ZERO,
                time: 0,
                bits: 0,
                nonce: 0,
            },
            transactions: vec![tx.clone()],
        };
        assert_eq!(block.build_merkle_root(), tx.txid());
    }
}
