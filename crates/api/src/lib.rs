//! Public API traits and types for the descsp library
//!
//! This crate defines the contract between a host cryptographic service
//! provider and the DES block cipher contexts: the error taxonomy, the
//! algorithm and key usage identifiers, and the traits the host and the
//! adapters implement.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorCode, Result};
pub use types::{AlgorithmId, KeyUsage, UnknownAlgorithm};

pub use traits::{BlockCipherAdapter, BlockCipherHost, KeyContextExtractor};
