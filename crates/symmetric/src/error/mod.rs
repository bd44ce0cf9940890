//! Error handling for the block cipher contexts
//!
//! This module re-exports the API error system and converts errors
//! raised by the DES primitive into it.

// Re-export the primary API error system
pub use descsp_api::error::{validate, Error, Result};

use descsp_algorithms::error::Error as PrimitiveError;
use descsp_api::AlgorithmId;

// Helper functions to convert errors (instead of From impls which violate orphan rules)

/// Convert a primitive error raised while keying `algorithm` to an API Error
pub fn from_primitive_error(err: PrimitiveError, algorithm: AlgorithmId) -> Error {
    match err {
        PrimitiveError::Resource { code, .. } => Error::PrimitiveResource { algorithm, code },
    }
}

/// Extension trait to make conversions more ergonomic
pub trait PrimitiveResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self, algorithm: AlgorithmId) -> Result<T>;
}

impl<T> PrimitiveResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self, algorithm: AlgorithmId) -> Result<T> {
        self.map_err(|err| from_primitive_error(err, algorithm))
    }
}
