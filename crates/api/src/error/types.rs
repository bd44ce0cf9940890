//! Error type definitions for block cipher context operations

use crate::types::{AlgorithmId, KeyUsage};

/// Primary error type for block cipher context operations
///
/// Every variant aborts the current call and is surfaced to the host
/// unchanged. None of them carries key material.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Extracted key length does not match the algorithm
    #[error("{algorithm}: invalid key attribute (expected {expected}-byte key, got {actual})")]
    InvalidKeyAttribute {
        algorithm: AlgorithmId,
        expected: usize,
        actual: usize,
    },

    /// The DES primitive failed to initialise its state
    #[error("{algorithm}: primitive initialisation failed with status {code}")]
    PrimitiveResource { algorithm: AlgorithmId, code: i32 },

    /// Plaintext handed to a block encryption is not exactly one block
    #[error("input length error (expected {expected}, got {actual})")]
    InputLength { expected: usize, actual: usize },

    /// Output buffer cannot hold one block
    #[error("output length error (required {required}, available {available})")]
    OutputLength { required: usize, available: usize },

    /// The host context carries no key for the requested algorithm
    #[error("no {algorithm} key in context")]
    KeyNotFound { algorithm: AlgorithmId },

    /// The host context key does not allow the requested usage
    #[error("key does not permit {usage} usage")]
    KeyUsageMismatch { usage: KeyUsage },

    /// A block operation was issued before `init`
    #[error("{algorithm}: context used before init")]
    NotInitialized { algorithm: AlgorithmId },
}

/// Result type for block cipher context operations
pub type Result<T> = core::result::Result<T, Error>;

/// Stable, payload-free error codes for host calling conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidKeyAttribute,
    PrimitiveResource,
    InputLength,
    OutputLength,
    KeyNotFound,
    KeyUsageMismatch,
    NotInitialized,
}

impl Error {
    /// Distinct code for this error kind
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidKeyAttribute { .. } => ErrorCode::InvalidKeyAttribute,
            Self::PrimitiveResource { .. } => ErrorCode::PrimitiveResource,
            Self::InputLength { .. } => ErrorCode::InputLength,
            Self::OutputLength { .. } => ErrorCode::OutputLength,
            Self::KeyNotFound { .. } => ErrorCode::KeyNotFound,
            Self::KeyUsageMismatch { .. } => ErrorCode::KeyUsageMismatch,
            Self::NotInitialized { .. } => ErrorCode::NotInitialized,
        }
    }
}
