//! # Compact Difficulty Bits
//!
//! A 256-bit target packed into 32 bits as `exponent(8) | mantissa(24)`,
//! where `target = mantissa * 256^(exponent - 3)`. Bit 23 of the mantissa is
//! a sign bit, so encoders shift the mantissa down a byte whenever it would be
//! set.
//!
//! Remember: a target is a CEILING. A larger target is an easier difficulty.

use primitive_types::U256;

use crate::errors::CompactError;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Encode a target into compact bits.
pub fn to_compact(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mut mantissa = (if size <= 3 {
        target.low_u64() << (8 * (3 - size))
    } else {
        (target >> (8 * (size - 3))).low_u64()
    }) as u32;

    if mantissa & SIGN_BIT != 0 {
        mantissa >>= 8;
        size += 1;
    }

    mantissa | ((size as u32) << 24)
}

/// Decode compact bits into a target.
///
/// Negative and overflowing encodings are rejected rather than clamped.
pub fn from_compact(bits: u32) -> Result<U256, CompactError> {
    let size = (bits >> 24) as usize;
    let mantissa = bits & MANTISSA_MASK;

    if mantissa != 0 && bits & SIGN_BIT != 0 {
        return Err(CompactError::Negative(bits));
    }

    if size <= 3 {
        return Ok(U256::from(mantissa >> (8 * (3 - size))));
    }

    let overflow = mantissa != 0
        && (size > 34 || (mantissa > 0xff && size > 33) || (mantissa > 0xffff && size > 32));
    if overflow {
        return Err(CompactError::Overflow(bits));
    }

    Ok(U256::from(mantissa) << (8 * (size - 3)))
}

/// `U256::MAX >> shift`, the usual way of writing a difficulty ceiling.
pub fn limit_from_shift(shift: usize) -> U256 {
    U256::MAX >> shift
}
