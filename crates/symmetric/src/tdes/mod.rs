//! Three-key triple-DES (EDE) block cipher context
//!
//! A 24-byte host key is split into K1, K2 and K3, each keying its own
//! DES primitive state. Encryption is `E_K3(D_K2(E_K1(P)))` and
//! decryption `D_K1(E_K2(D_K3(C)))`. With K1 = K2 = K3 the construction
//! collapses to single DES under that key.

use core::fmt;

use descsp_algorithms::error::Error as PrimitiveError;
use descsp_algorithms::{DesMode, DesPrimitive, StdDes};
use descsp_api::error::{validate, Error, Result};
use descsp_api::{AlgorithmId, BlockCipherAdapter, BlockCipherHost, KeyUsage};
use descsp_common::{with_des_init_guard, SecretBuffer};
use descsp_params::utils::symmetric::{
    DES_KEY_SIZE, TDES_BLOCK_SIZE, TDES_KEY_SIZE, TDES_SUBKEY_COUNT,
};
use tracing::{debug, trace};

use crate::context::{self, Block};
use crate::error::from_primitive_error;

/// Triple-DES context bound to a host key
pub struct TripleDesAdapter<P: DesPrimitive = StdDes> {
    primitive: P,
    states: [P::State; TDES_SUBKEY_COUNT],
    keyed: bool,
}

impl TripleDesAdapter<StdDes> {
    /// Creates an unkeyed context backed by the software engine
    pub fn new() -> Self {
        Self::with_primitive(StdDes)
    }
}

impl<P: DesPrimitive + Default> Default for TripleDesAdapter<P> {
    fn default() -> Self {
        Self::with_primitive(P::default())
    }
}

impl<P: DesPrimitive> TripleDesAdapter<P> {
    /// Creates an unkeyed context driving `primitive`
    pub fn with_primitive(primitive: P) -> Self {
        Self {
            primitive,
            states: Default::default(),
            keyed: false,
        }
    }

    fn ensure_keyed(&self) -> Result<()> {
        if !self.keyed {
            return Err(Error::NotInitialized {
                algorithm: AlgorithmId::TripleDes3KeyEde,
            });
        }
        Ok(())
    }

    fn release_all(&mut self) {
        for state in self.states.iter_mut() {
            context::teardown(&self.primitive, state, self.keyed);
        }
        self.keyed = false;
    }

    /// Initialise all three states under one hold of the init lock
    ///
    /// On failure the states initialised so far are released and every
    /// state is wiped.
    fn init_states(&mut self) -> Result<()> {
        let (primitive, states) = (&self.primitive, &mut self.states);
        let outcome = with_des_init_guard(|| -> core::result::Result<(), (usize, PrimitiveError)> {
            for (index, state) in states.iter_mut().enumerate() {
                primitive
                    .init(state, DesMode::Standard)
                    .map_err(|err| (index, err))?;
            }
            Ok(())
        });

        if let Err((index, err)) = outcome {
            debug!(
                algorithm = %AlgorithmId::TripleDes3KeyEde,
                primitive = primitive.name(),
                subkey = index,
                code = err.code(),
                "DES primitive init failed"
            );
            for (i, state) in states.iter_mut().enumerate() {
                context::teardown(primitive, state, i < index);
            }
            return Err(from_primitive_error(err, AlgorithmId::TripleDes3KeyEde));
        }
        Ok(())
    }

    fn encrypt_ede(&self, block: &mut Block) {
        let [k1, k2, k3] = &self.states;
        self.primitive.encrypt_in_place(k1, block);
        self.primitive.decrypt_in_place(k2, block);
        self.primitive.encrypt_in_place(k3, block);
    }

    fn decrypt_ede(&self, block: &mut Block) {
        let [k1, k2, k3] = &self.states;
        self.primitive.decrypt_in_place(k3, block);
        self.primitive.encrypt_in_place(k2, block);
        self.primitive.decrypt_in_place(k1, block);
    }
}

impl<P: DesPrimitive> BlockCipherAdapter for TripleDesAdapter<P> {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::TripleDes3KeyEde
    }

    fn is_initialized(&self) -> bool {
        self.keyed
    }

    fn init<H>(&mut self, host: &mut H, ctx: &H::Context, encrypting: bool) -> Result<()>
    where
        H: BlockCipherHost + ?Sized,
    {
        let algorithm = AlgorithmId::TripleDes3KeyEde;
        let usage = KeyUsage::for_direction(encrypting);
        let bits = host.symmetric_key_bits(ctx, algorithm, usage)?;
        let key = validate::key_length::<TDES_KEY_SIZE>(algorithm, bits)?;

        self.release_all();
        self.init_states()?;

        // K1, K2, K3 in key order
        let mut subkey = SecretBuffer::<DES_KEY_SIZE>::zeroed();
        for (state, chunk) in self.states.iter_mut().zip(key.chunks_exact(DES_KEY_SIZE)) {
            subkey.as_mut_slice().copy_from_slice(chunk);
            self.primitive.load_subkey(state, subkey.as_array());
        }
        self.keyed = true;
        trace!(algorithm = %algorithm, %usage, "context keyed");

        host.setup(TDES_BLOCK_SIZE, ctx);
        Ok(())
    }

    fn encrypt_block(&mut self, plain: &[u8], cipher: &mut [u8], _final_block: bool) -> Result<usize> {
        self.ensure_keyed()?;
        context::encrypt_block_with(plain, cipher, |block| self.encrypt_ede(block))
    }

    fn encrypt_block_in_place(&mut self, block: &mut [u8], _final_block: bool) -> Result<usize> {
        self.ensure_keyed()?;
        context::encrypt_in_place_with(block, |block| self.encrypt_ede(block))
    }

    fn decrypt_block(&mut self, cipher: &[u8], plain: &mut [u8], _final_block: bool) -> Result<usize> {
        self.ensure_keyed()?;
        context::decrypt_block_with(cipher, plain, |block| self.decrypt_ede(block))
    }

    fn decrypt_block_in_place(&mut self, block: &mut [u8], _final_block: bool) -> Result<usize> {
        self.ensure_keyed()?;
        context::decrypt_in_place_with(block, |block| self.decrypt_ede(block))
    }

    fn destroy(&mut self) {
        if self.keyed {
            trace!(algorithm = %AlgorithmId::TripleDes3KeyEde, "context destroyed");
        }
        self.release_all();
    }
}

impl<P: DesPrimitive> Drop for TripleDesAdapter<P> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<P: DesPrimitive> fmt::Debug for TripleDesAdapter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripleDesAdapter")
            .field("primitive", &self.primitive.name())
            .field("keyed", &self.keyed)
            .finish_non_exhaustive()
    }
}
