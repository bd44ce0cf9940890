//! Error handling for the DES block cipher contexts

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, ErrorCode, Result};
