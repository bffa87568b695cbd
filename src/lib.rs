//! Generators for two universal variable-length integer codes: Golomb-Rice
//! coding, parameterized by a modulus, and Exponential-Golomb coding,
//! parameterized by an order. The [`mapping`] module provides the
//! signed-to-unsigned bijections that let either code carry negative values.
//!
//! The encoders produce a single [`Codeword`] per input integer. Packing the
//! code words into a byte stream is left to the caller.

pub mod coding;
pub mod error;
pub mod mapping;

pub use error::Error;

/// The widest code word that fits the numeric representation.
pub const MAX_CODE_BITS: u32 = 64;

/// A single variable-length code word.
///
/// The most significant bit of the code sits at position `len - 1`, and the
/// bits at position `len` and above are always zero. A caller that packs
/// code words into a byte stream must only read the low `len` bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Codeword {
    /// The bit pattern, packed to the right.
    pub bits: u64,
    /// The number of significant bits (0..=MAX_CODE_BITS).
    pub len: u32,
}

impl Codeword {
    pub fn new(bits: u64, len: u32) -> Codeword {
        debug_assert!(len <= MAX_CODE_BITS, "Code word is too long");
        debug_assert!(len == MAX_CODE_BITS || bits >> len == 0);
        Codeword { bits, len }
    }

    /// Render the code word as a binary string, most significant bit first,
    /// with exactly one character per significant bit. The empty code word
    /// renders as the empty string.
    pub fn to_bit_string(&self) -> String {
        let mut pos = self.len;
        let mut str = String::with_capacity(self.len as usize);
        while pos > 0 {
            pos -= 1;
            str.push(if (self.bits >> pos) & 1 == 1 { '1' } else { '0' });
        }
        str
    }
}

impl std::fmt::Display for Codeword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}
