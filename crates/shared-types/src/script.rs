//! # Script
//!
//! Minimal script builder covering the push opcodes needed to assemble
//! coinbase unlocking scripts. Pushes follow the reference encoder
//! byte-for-byte, since scripts feed transaction hashes.

use serde::{Deserialize, Serialize};

/// Push an empty byte vector (numeric zero).
pub const OP_0: u8 = 0x00;
/// Next byte is the push length.
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Next two bytes are the push length.
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Next four bytes are the push length.
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Push the number -1.
pub const OP_1NEGATE: u8 = 0x4f;
/// Push the number 1. `OP_1 + (n - 1)` pushes `n` for `1 <= n <= 16`.
pub const OP_1: u8 = 0x51;

/// A serialized script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    /// An empty script.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push an integer using the smallest encoding.
    ///
    /// `0`, `-1` and `1..=16` use dedicated opcodes; everything else is pushed
    /// as a minimally encoded script number.
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.0.push(OP_0),
            -1 => self.0.push(OP_1NEGATE),
            1..=16 => self.0.push(OP_1 + (n as u8 - 1)),
            _ => {
                let encoded = encode_script_num(n);
                return self.push_slice(&encoded);
            }
        }
        self
    }

    /// Push raw bytes with the appropriate push opcode.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Raw script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Script length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script has no opcodes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Little-endian sign-magnitude encoding with no redundant bytes.
fn encode_script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit carries the sign, so add a byte when it is already taken.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_ints_use_opcodes() {
        let script = Script::new().push_int(0).push_int(-1).push_int(1).push_int(16);
        assert_eq!(script.as_bytes(), &[OP_0, OP_1NEGATE, 0x51, 0x60]);
    }

    #[test]
    fn test_int_42_is_single_byte_push() {
        let script = Script::new().push_int(42);
        assert_eq!(script.as_bytes(), &[0x01, 0x2a]);
    }

    #[test]
    fn test_script_num_sign_handling() {
        assert_eq!(encode_script_num(127), vec![0x7f]);
        assert_eq!(encode_script_num(128), vec![0x80, 0x00]);
        assert_eq!(encode_script_num(-128), vec![0x80, 0x80]);
        assert_eq!(encode_script_num(-17), vec![0x91]);
        assert_eq!(encode_script_num(486_604_799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_push_slice_opcode_selection() {
        let direct = Script::new().push_slice(&[0xaa; 75]);
        assert_eq!(direct.as_bytes()[0], 75);
        assert_eq!(direct.len(), 76);

        let pushdata1 = Script::new().push_slice(&[0xaa; 130]);
        assert_eq!(&pushdata1.as_bytes()[..2], &[OP_PUSHDATA1, 130]);

        let pushdata2 = Script::new().push_slice(&[0xaa; 300]);
        assert_eq!(&pushdata2.as_bytes()[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
    }

    #[test]
    fn test_empty_script() {
        assert!(Script::new().is_empty());
        assert_eq!(Script::default().len(), 0);
    }
}
