//! # Consensus Encoding
//!
//! Canonical byte serialization used for hashing transactions and headers.
//!
//! All integers are little-endian. Variable-length collections are prefixed
//! with a compact-size length:
//!
//! | Value            | Encoding                    |
//! |------------------|-----------------------------|
//! | `< 0xfd`         | 1 byte                      |
//! | `<= 0xffff`      | `0xfd` + u16                |
//! | `<= 0xffff_ffff` | `0xfe` + u32                |
//! | otherwise        | `0xff` + u64                |

/// Types with a canonical consensus serialization.
pub trait Encodable {
    /// Append the consensus encoding of `self` to `out`.
    fn consensus_encode(&self, out: &mut Vec<u8>);

    /// Consensus encoding of `self` as a fresh buffer.
    fn to_consensus_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.consensus_encode(&mut out);
        out
    }
}

/// Append a compact-size length prefix.
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        out.push(n as u8);
    } else if n <= 0xffff {
        out.push(0xfd);
        out.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        out.push(0xfe);
        out.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        out.push(0xff);
        out.extend_from_slice(&n.to_le_bytes());
    }
}

/// Append a length-prefixed byte string.
pub fn write_var_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

macro_rules! impl_int_encodable {
    ($($ty:ty),*) => {
        $(
            impl Encodable for $ty {
                fn consensus_encode(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_int_encodable!(u16, u32, u64, i32, i64);

impl<T: Encodable> Encodable for Vec<T> {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        write_compact_size(out, self.len() as u64);
        for item in self {
            item.consensus_encode(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_size_boundaries() {
        let cases: [(u64, &[u8]); 5] = [
            (0, &[0x00]),
            (0xfc, &[0xfc]),
            (0xfd, &[0xfd, 0xfd, 0x00]),
            (0x1_0000, &[0xfe, 0x00, 0x00, 0x01, 0x00]),
            (0x1_0000_0000, &[0xff, 0, 0, 0, 0, 1, 0, 0, 0]),
        ];

        for (n, expected) in cases {
            let mut out = Vec::new();
            write_compact_size(&mut out, n);
            assert_eq!(out, expected, "compact size of {n:#x}");
        }
    }

    #[test]
    fn test_integers_are_little_endian() {
        assert_eq!(1u32.to_consensus_bytes(), vec![1, 0, 0, 0]);
        assert_eq!((-1i32).to_consensus_bytes(), vec![0xff; 4]);
        assert_eq!(0i64.to_consensus_bytes(), vec![0; 8]);
    }

    #[test]
    fn test_vec_is_length_prefixed() {
        let items: Vec<u16> = vec![1, 2];
        assert_eq!(items.to_consensus_bytes(), vec![2, 1, 0, 2, 0]);
    }
}
