//! Security primitives and memory safety utilities
//!
//! Types in this module hold key-derived material and wipe it on drop.

pub mod secret;

// Re-export core security types
pub use secret::SecretBuffer;
