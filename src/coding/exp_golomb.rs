//! Exponential-Golomb coding of order 'k'. The code word is the binary
//! representation of `data + 2^k`, preceded by enough zeros to make the word
//! self-terminating. Raising the order trades a longer minimum code for a
//! slower-growing prefix, which is why video codecs pick 'k' to match the
//! magnitude of their residuals.

use crate::error::{CodeResult, Error};
use crate::{Codeword, MAX_CODE_BITS};

/// Encode the value 'data' with the order 'k'.
///
/// Let `value = data + 2^k` and let `n` be the bit length of 'value'. The
/// code word is 'value' itself, read as a field of `2n - k - 1` bits: the
/// leading `n - k - 1` bits are the zero prefix and the natural binary form
/// of 'value' follows, starting with its top one bit.
pub fn encode(data: u64, k: u32) -> CodeResult<Codeword> {
    if k >= MAX_CODE_BITS {
        return Err(Error::InvalidOrder(k));
    }

    // The offset folds the k low-order bits into the value itself.
    let value = data.checked_add(1u64 << k).ok_or(Error::Overflow)?;

    // value >= 2^k, so bit_len >= k + 1 and the length never underflows.
    let bit_len = MAX_CODE_BITS - value.leading_zeros();
    let len = 2 * bit_len - k - 1;
    if len > MAX_CODE_BITS {
        return Err(Error::Overflow);
    }
    Ok(Codeword::new(value, len))
}

#[cfg(test)]
mod tests {
    use super::encode;
    use crate::Error;

    #[test]
    fn test_order_zero() {
        // The classic code: a single flag bit for zero, then a zero-prefixed
        // binary representation of data + 1.
        assert_eq!(encode(0, 0).unwrap().to_bit_string(), "1");
        assert_eq!(encode(1, 0).unwrap().to_bit_string(), "010");
        assert_eq!(encode(2, 0).unwrap().to_bit_string(), "011");
        assert_eq!(encode(3, 0).unwrap().to_bit_string(), "00100");
        assert_eq!(encode(8, 0).unwrap().to_bit_string(), "0001001");
    }

    #[test]
    fn test_higher_orders() {
        // k low bits ride along with the value, shortening large codes at
        // the price of a k-bit minimum suffix.
        assert_eq!(encode(0, 1).unwrap().to_bit_string(), "10");
        assert_eq!(encode(1, 1).unwrap().to_bit_string(), "11");
        assert_eq!(encode(2, 1).unwrap().to_bit_string(), "0100");
        assert_eq!(encode(0, 2).unwrap().to_bit_string(), "100");
        assert_eq!(encode(3, 2).unwrap().to_bit_string(), "111");
        assert_eq!(encode(4, 2).unwrap().to_bit_string(), "01000");
    }

    #[test]
    fn test_invalid_order() {
        assert_eq!(encode(0, 64), Err(Error::InvalidOrder(64)));
        assert_eq!(encode(0, u32::MAX), Err(Error::InvalidOrder(u32::MAX)));
    }

    #[test]
    fn test_code_capacity() {
        // The widest value that still fits: bit length 32 gives a 63-bit
        // code word, bit length 33 would need 65 bits.
        assert_eq!(encode((1 << 32) - 2, 0).unwrap().len, 63);
        assert_eq!(encode((1 << 32) - 1, 0), Err(Error::Overflow));
        // The offset addition itself can overflow.
        assert_eq!(encode(u64::MAX, 1), Err(Error::Overflow));
        assert_eq!(encode(u64::MAX, 63), Err(Error::Overflow));
    }
}
