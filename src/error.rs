//! The error type shared by the encoders.

use thiserror::Error;

/// Alias for the result type of encoding operations.
pub type CodeResult<T> = Result<T, Error>;

/// Errors that the encoders report instead of producing a malformed code.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The Golomb modulus must be at least one.
    #[error("The modulus must be at least one")]
    InvalidModulus,

    /// The Exp-Golomb order must be below the code word width.
    #[error("The order {0} is not below 64")]
    InvalidOrder(u32),

    /// The code word does not fit in 64 bits.
    #[error("The code word does not fit in 64 bits")]
    Overflow,
}
