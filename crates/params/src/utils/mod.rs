//! Constant values for descsp cryptographic operations

pub mod symmetric;
