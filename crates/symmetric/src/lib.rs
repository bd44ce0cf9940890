//! DES block cipher contexts for the descsp library
//!
//! This crate adapts the DES primitive to the host's block cipher
//! contract. [`SingleDesAdapter`] and [`TripleDesAdapter`] key their
//! primitive state from a host context, transform one block at a time and
//! wipe every key-bearing byte on teardown. [`DesAdapter`] selects between
//! them by algorithm identifier.

#![forbid(unsafe_code)]

mod context;
pub mod des;
pub mod error;
pub mod tdes;
pub mod variant;


// Re-export main types for convenience
pub use des::SingleDesAdapter;
pub use tdes::TripleDesAdapter;
pub use variant::DesAdapter;

// Re-export the API error system instead of custom error types
pub use descsp_api::error::{validate, Error, Result};
