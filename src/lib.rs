//! # descsp
//!
//! DES and three-key triple-DES block cipher contexts for a host
//! cryptographic service provider.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! descsp = "0.3"
//! ```
//!
//! The host implements [`api::BlockCipherHost`] to hand key octets out of
//! its own key contexts; the contexts in [`symmetric`] key themselves from
//! it and transform one 8-byte block per call. Chaining modes, padding and
//! streaming stay with the host.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`api`]: Error taxonomy, identifiers and the host/adapter traits
//! - [`common`]: Zeroizing buffers and the initialisation lock
//! - [`params`]: Algorithm constants
//! - [`algorithms`]: The DES primitive contract and software engine
//! - [`symmetric`]: The DES and triple-DES contexts

#![forbid(unsafe_code)]

pub use descsp_algorithms as algorithms;
pub use descsp_api as api;
pub use descsp_common as common;
pub use descsp_params as params;
pub use descsp_symmetric as symmetric;

/// Common imports for descsp users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorCode, Result};

    // Re-export identifiers and core traits
    pub use crate::api::{
        AlgorithmId, BlockCipherAdapter, BlockCipherHost, KeyContextExtractor, KeyUsage,
    };

    // Re-export the contexts
    pub use crate::symmetric::{DesAdapter, SingleDesAdapter, TripleDesAdapter};

    // Re-export security types
    pub use crate::common::SecretBuffer;
    pub use zeroize::Zeroize;
}
