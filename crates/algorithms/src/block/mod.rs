//! DES primitive contract
//!
//! A DES engine owns no state of its own: every instance of the cipher
//! keeps its round keys in a separate [`DesPrimitive::State`] that the
//! caller allocates, keys, uses and releases. Only [`DesPrimitive::init`]
//! may touch engine-global data; callers serialise it with
//! `descsp_common::DesInitGuard`.

pub mod des;

pub use des::{DesState, StdDes};

use crate::error::Result;
use descsp_params::utils::symmetric::{DES_BLOCK_SIZE, DES_KEY_SIZE};
use zeroize::Zeroize;

/// Operating mode passed to [`DesPrimitive::init`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DesMode {
    /// FIPS 46-3 DES
    #[default]
    Standard,
}

/// A DES round engine operating on caller-owned state
pub trait DesPrimitive {
    /// Per-instance state: expanded round keys and scratch
    type State: Default + Zeroize + Send;

    /// Engine name used in diagnostics
    fn name(&self) -> &'static str;

    /// Prepare `state` for keying
    ///
    /// Not required to be thread-safe. A failure leaves nothing allocated.
    fn init(&self, state: &mut Self::State, mode: DesMode) -> Result<()>;

    /// Load an 8-byte key (parity bits ignored) into an initialised state
    fn load_subkey(&self, state: &mut Self::State, key: &[u8; DES_KEY_SIZE]);

    /// Encrypt one block in place
    fn encrypt_in_place(&self, state: &Self::State, block: &mut [u8; DES_BLOCK_SIZE]);

    /// Decrypt one block in place
    fn decrypt_in_place(&self, state: &Self::State, block: &mut [u8; DES_BLOCK_SIZE]);

    /// Release resources held by an initialised state
    fn release(&self, state: &mut Self::State);
}
