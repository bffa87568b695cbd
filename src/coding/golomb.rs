//! Golomb-Rice coding. The value is split by the modulus 'm' into a quotient
//! that is emitted in unary and a remainder that is emitted in truncated
//! binary. Golomb codes are optimal for geometrically distributed sources;
//! the unary prefix grows linearly for values that are large relative to the
//! modulus, and the encoder rejects inputs whose code word would not fit in
//! 64 bits.

use crate::error::{CodeResult, Error};
use crate::{Codeword, MAX_CODE_BITS};

/// Encode the value 'data' with the modulus 'm'.
///
/// The quotient `data / m` becomes a run of zeros closed by a one bit. The
/// remainder `data % m` follows below the closing bit in truncated binary:
/// with `b = floor(log2(m))`, remainders under `2^(b+1) - m` take `b` bits
/// and the rest are shifted up by the threshold and take `b + 1` bits. When
/// 'm' is a power of two the second branch never triggers and the code
/// degenerates to a plain Rice code; `m == 1` produces pure unary.
pub fn encode(data: u64, m: u64) -> CodeResult<Codeword> {
    if m == 0 {
        return Err(Error::InvalidModulus);
    }

    let q = data / m;
    let r = data % m;
    let b = m.ilog2();

    // The threshold of the truncated binary code. It can reach 2^64 when the
    // modulus sits in the topmost power-of-two interval, so compare wide.
    let threshold = (1u128 << (b + 1)) - u128::from(m);
    let (rbits, rlen) = if u128::from(r) < threshold {
        (r, b)
    } else {
        ((u128::from(r) + threshold) as u64, b + 1)
    };

    // One bit terminates the unary run, so a quotient of q takes q+1 bits.
    let len = (q as u128) + 1 + u128::from(rlen);
    if len > u128::from(MAX_CODE_BITS) {
        return Err(Error::Overflow);
    }

    // The terminator lands right above the remainder field, and the zeros of
    // the unary run are the implicit high bits of the code word.
    Ok(Codeword::new((1u64 << rlen) | rbits, len as u32))
}
