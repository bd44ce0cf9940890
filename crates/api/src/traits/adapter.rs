//! Block cipher adapter contract consumed by the host

use super::host::BlockCipherHost;
use crate::error::Result;
use crate::types::AlgorithmId;

/// A keyed single-block transform exposed to a host mode engine
///
/// Lifecycle: a fresh adapter accepts `init` or destruction. After a
/// successful `init` it accepts block operations and further `init`
/// calls, each of which re-keys. `destroy` (also run on drop) wipes every
/// key-bearing byte and returns the adapter to the fresh state.
///
/// Block operations validate all lengths before writing any output byte.
/// The `final_block` flag is accepted for host compatibility and has no
/// effect: a block is self-contained.
pub trait BlockCipherAdapter {
    /// Algorithm this adapter implements
    fn algorithm(&self) -> AlgorithmId;

    /// Block size in bytes
    fn block_size(&self) -> usize {
        self.algorithm().block_size()
    }

    /// Whether the adapter currently holds keyed primitive state
    fn is_initialized(&self) -> bool;

    /// Key the adapter from a host context
    ///
    /// `encrypting` selects the key usage requested from the host. On
    /// success the adapter reports its block size through
    /// [`BlockCipherHost::setup`].
    fn init<H>(&mut self, host: &mut H, context: &H::Context, encrypting: bool) -> Result<()>
    where
        H: BlockCipherHost + ?Sized;

    /// Encrypt exactly one block from `plain` into the head of `cipher`
    ///
    /// Returns the number of bytes written (always one block).
    fn encrypt_block(&mut self, plain: &[u8], cipher: &mut [u8], final_block: bool)
        -> Result<usize>;

    /// Encrypt one block in place; `block` must be exactly one block long
    fn encrypt_block_in_place(&mut self, block: &mut [u8], final_block: bool) -> Result<usize>;

    /// Decrypt one block from the head of `cipher` into the head of `plain`
    ///
    /// The host guarantees a one-block input; only the first block of
    /// `cipher` is read.
    fn decrypt_block(&mut self, cipher: &[u8], plain: &mut [u8], final_block: bool)
        -> Result<usize>;

    /// Decrypt the first block of `block` in place
    fn decrypt_block_in_place(&mut self, block: &mut [u8], final_block: bool) -> Result<usize>;

    /// Release and zero all primitive state; never fails
    fn destroy(&mut self);
}
