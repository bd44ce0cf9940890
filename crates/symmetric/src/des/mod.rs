//! Single-DES block cipher context
//!
//! Keys one DES primitive state from an 8-byte host key and transforms
//! one 8-byte block per call.

use core::fmt;

use descsp_algorithms::{DesMode, DesPrimitive, StdDes};
use descsp_api::error::{validate, Error, Result};
use descsp_api::{AlgorithmId, BlockCipherAdapter, BlockCipherHost, KeyUsage};
use descsp_common::with_des_init_guard;
use descsp_params::utils::symmetric::{DES_BLOCK_SIZE, DES_KEY_SIZE};
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::context;
use crate::error::PrimitiveResultExt;

/// DES context bound to a host key
pub struct SingleDesAdapter<P: DesPrimitive = StdDes> {
    primitive: P,
    state: P::State,
    keyed: bool,
}

impl SingleDesAdapter<StdDes> {
    /// Creates an unkeyed context backed by the software engine
    pub fn new() -> Self {
        Self::with_primitive(StdDes)
    }
}

impl<P: DesPrimitive + Default> Default for SingleDesAdapter<P> {
    fn default() -> Self {
        Self::with_primitive(P::default())
    }
}

impl<P: DesPrimitive> SingleDesAdapter<P> {
    /// Creates an unkeyed context driving `primitive`
    pub fn with_primitive(primitive: P) -> Self {
        Self {
            primitive,
            state: P::State::default(),
            keyed: false,
        }
    }

    fn ensure_keyed(&self) -> Result<()> {
        if !self.keyed {
            return Err(Error::NotInitialized {
                algorithm: AlgorithmId::Des,
            });
        }
        Ok(())
    }
}

impl<P: DesPrimitive> BlockCipherAdapter for SingleDesAdapter<P> {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::Des
    }

    fn is_initialized(&self) -> bool {
        self.keyed
    }

    fn init<H>(&mut self, host: &mut H, ctx: &H::Context, encrypting: bool) -> Result<()>
    where
        H: BlockCipherHost + ?Sized,
    {
        let algorithm = AlgorithmId::Des;
        let usage = KeyUsage::for_direction(encrypting);
        let bits = host.symmetric_key_bits(ctx, algorithm, usage)?;
        let key = validate::key_length::<DES_KEY_SIZE>(algorithm, bits)?;

        // Re-keying drops the previous schedule first
        context::teardown(&self.primitive, &mut self.state, self.keyed);
        self.keyed = false;

        let (primitive, state) = (&self.primitive, &mut self.state);
        let outcome = with_des_init_guard(|| primitive.init(state, DesMode::Standard));
        if let Err(err) = &outcome {
            debug!(
                algorithm = %algorithm,
                primitive = primitive.name(),
                code = err.code(),
                "DES primitive init failed"
            );
            state.zeroize();
        }
        outcome.map_primitive_err(algorithm)?;

        primitive.load_subkey(state, key);
        self.keyed = true;
        trace!(algorithm = %algorithm, %usage, "context keyed");

        host.setup(DES_BLOCK_SIZE, ctx);
        Ok(())
    }

    fn encrypt_block(&mut self, plain: &[u8], cipher: &mut [u8], _final_block: bool) -> Result<usize> {
        self.ensure_keyed()?;
        let (primitive, state) = (&self.primitive, &self.state);
        context::encrypt_block_with(plain, cipher, |block| primitive.encrypt_in_place(state, block))
    }

    fn encrypt_block_in_place(&mut self, block: &mut [u8], _final_block: bool) -> Result<usize> {
        self.ensure_keyed()?;
        let (primitive, state) = (&self.primitive, &self.state);
        context::encrypt_in_place_with(block, |block| primitive.encrypt_in_place(state, block))
    }

    fn decrypt_block(&mut self, cipher: &[u8], plain: &mut [u8], _final_block: bool) -> Result<usize> {
        self.ensure_keyed()?;
        let (primitive, state) = (&self.primitive, &self.state);
        context::decrypt_block_with(cipher, plain, |block| primitive.decrypt_in_place(state, block))
    }

    fn decrypt_block_in_place(&mut self, block: &mut [u8], _final_block: bool) -> Result<usize> {
        self.ensure_keyed()?;
        let (primitive, state) = (&self.primitive, &self.state);
        context::decrypt_in_place_with(block, |block| primitive.decrypt_in_place(state, block))
    }

    fn destroy(&mut self) {
        if self.keyed {
            trace!(algorithm = %AlgorithmId::Des, "context destroyed");
        }
        context::teardown(&self.primitive, &mut self.state, self.keyed);
        self.keyed = false;
    }
}

impl<P: DesPrimitive> Drop for SingleDesAdapter<P> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<P: DesPrimitive> fmt::Debug for SingleDesAdapter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleDesAdapter")
            .field("primitive", &self.primitive.name())
            .field("keyed", &self.keyed)
            .finish_non_exhaustive()
    }
}
