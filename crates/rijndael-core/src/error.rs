//! Error type shared by the configuration and expansion entry points.

use thiserror::Error as ThisError;

/// Errors reported by key-length configuration and key expansion.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested key length (in bits) is not one of 128, 192 or 256.
    #[error("unsupported key length: {0} bits (expected 128, 192 or 256)")]
    UnsupportedKeyLength(u32),
    /// Key material (in bytes) is not 16, 24 or 32 bytes long.
    #[error("unsupported key size: {0} bytes (expected 16, 24 or 32)")]
    UnsupportedKeySize(usize),
    /// Key bytes do not match the configured key length.
    #[error("key is {actual} bytes but the configured key length needs {expected}")]
    KeyLengthMismatch {
        /// Byte length required by the active parameters.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
