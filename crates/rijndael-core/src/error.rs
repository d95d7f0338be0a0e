//! Error types returned by the cipher.

use thiserror::Error;

/// Errors raised when building a key schedule or transforming a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A key schedule was requested with an unsupported key or block size.
    #[error("invalid parameter: {0}")]
    InvalidParameter(Parameter),
    /// A block does not match the size the key schedule was built for.
    #[error("block is {actual} bytes but the key schedule expects {expected}")]
    InvalidBlockSize {
        /// Block length required by the schedule, in bytes.
        expected: usize,
        /// Length of the block that was supplied.
        actual: usize,
    },
}

/// The parameter rejected by [`Error::InvalidParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Parameter {
    /// Master key length in bytes; must be 16, 24 or 32.
    #[error("key length {0} bytes is not one of 16, 24 or 32")]
    KeyLength(usize),
    /// Block size in 32-bit words; must be within 4..=8.
    #[error("block size {0} words is outside 4..=8")]
    BlockWords(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
