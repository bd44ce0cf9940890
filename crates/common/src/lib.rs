//! Common implementations and shared functionality for the descsp library
//!
//! This crate provides the zeroizing buffer used for key-derived material
//! and the process-wide lock that serialises DES primitive initialisation.

#![forbid(unsafe_code)]

pub mod security;
pub mod sync;

// Re-export core security types
pub use security::SecretBuffer;

// Re-export the initialisation lock
pub use sync::{with_des_init_guard, DesInitGuard};
