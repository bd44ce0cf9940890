//! DES primitive for the descsp block cipher contexts
//!
//! This crate defines [`DesPrimitive`], the contract the cipher contexts
//! use to drive a DES round engine, and [`StdDes`], a table-driven
//! software engine implementing FIPS 46-3.
//!
//! # Security Features
//!
//! - Round keys live in zeroizing buffers and are wiped on release and drop
//! - Parity bits are ignored, weak keys are accepted as-is

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{DesMode, DesPrimitive, DesState, StdDes};
