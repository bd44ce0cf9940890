//! Traits at the seam between the host framework and the cipher contexts

pub mod adapter;
pub mod host;

pub use adapter::BlockCipherAdapter;
pub use host::{BlockCipherHost, KeyContextExtractor};
