//! # Error Types
//!
//! Errors raised by the chain primitives in this crate.

use thiserror::Error;

/// Errors that can occur when parsing a hex-encoded 256-bit hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashParseError {
    /// Input did not decode to exactly 32 bytes.
    #[error("Invalid hash length: expected 64 hex chars, got {0}")]
    InvalidLength(usize),

    /// Input contained non-hex characters.
    #[error("Invalid hex in hash: {0}")]
    InvalidHex(String),
}

/// Errors that can occur when decoding a compact difficulty encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompactError {
    /// The sign bit is set on a non-zero mantissa.
    #[error("Compact bits {0:#010x} encode a negative target")]
    Negative(u32),

    /// The exponent pushes the mantissa past 256 bits.
    #[error("Compact bits {0:#010x} overflow 256 bits")]
    Overflow(u32),
}
