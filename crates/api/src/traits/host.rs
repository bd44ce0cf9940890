//! Collaborators supplied by the host framework

use crate::error::Result;
use crate::types::{AlgorithmId, KeyUsage};

/// Pulls symmetric key octets out of an opaque host context
pub trait KeyContextExtractor {
    /// Opaque key-bearing context owned by the host
    type Context: ?Sized;

    /// Borrow the key octets selected for `algorithm` and `usage`
    ///
    /// The returned view lives in the caller-owned context. Adapters
    /// consume it during `init` and never retain it. Absent or
    /// usage-mismatched keys fail here, upstream of any adapter check.
    fn symmetric_key_bits<'c>(
        &self,
        context: &'c Self::Context,
        algorithm: AlgorithmId,
        usage: KeyUsage,
    ) -> Result<&'c [u8]>;
}

/// Mode-of-operation engine driving an adapter
///
/// The host owns chaining, padding and streaming; it calls `init` on an
/// adapter and then feeds it one block at a time.
pub trait BlockCipherHost: KeyContextExtractor {
    /// Receive the block size chosen by the adapter together with the
    /// host's own context
    fn setup(&mut self, block_size: usize, context: &Self::Context);
}
