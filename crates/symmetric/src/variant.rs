//! Runtime selection between the DES and triple-DES contexts

use descsp_algorithms::{DesPrimitive, StdDes};
use descsp_api::error::Result;
use descsp_api::{AlgorithmId, BlockCipherAdapter, BlockCipherHost};

use crate::des::SingleDesAdapter;
use crate::tdes::TripleDesAdapter;

/// A block cipher context chosen by [`AlgorithmId`]
#[derive(Debug)]
pub enum DesAdapter<P: DesPrimitive = StdDes> {
    /// Single DES
    Single(SingleDesAdapter<P>),
    /// Three-key triple-DES, EDE
    Triple(TripleDesAdapter<P>),
}

impl DesAdapter<StdDes> {
    /// Creates an unkeyed context for `algorithm`
    pub fn for_algorithm(algorithm: AlgorithmId) -> Self {
        Self::for_algorithm_with_primitive(algorithm, StdDes)
    }
}

impl<P: DesPrimitive> DesAdapter<P> {
    /// Creates an unkeyed context for `algorithm` driving `primitive`
    pub fn for_algorithm_with_primitive(algorithm: AlgorithmId, primitive: P) -> Self {
        match algorithm {
            AlgorithmId::Des => Self::Single(SingleDesAdapter::with_primitive(primitive)),
            AlgorithmId::TripleDes3KeyEde => {
                Self::Triple(TripleDesAdapter::with_primitive(primitive))
            }
        }
    }
}

macro_rules! delegate {
    ($self:ident, $adapter:ident => $call:expr) => {
        match $self {
            DesAdapter::Single($adapter) => $call,
            DesAdapter::Triple($adapter) => $call,
        }
    };
}

impl<P: DesPrimitive> BlockCipherAdapter for DesAdapter<P> {
    fn algorithm(&self) -> AlgorithmId {
        delegate!(self, adapter => adapter.algorithm())
    }

    fn is_initialized(&self) -> bool {
        delegate!(self, adapter => adapter.is_initialized())
    }

    fn init<H>(&mut self, host: &mut H, ctx: &H::Context, encrypting: bool) -> Result<()>
    where
        H: BlockCipherHost + ?Sized,
    {
        delegate!(self, adapter => adapter.init(host, ctx, encrypting))
    }

    fn encrypt_block(&mut self, plain: &[u8], cipher: &mut [u8], final_block: bool) -> Result<usize> {
        delegate!(self, adapter => adapter.encrypt_block(plain, cipher, final_block))
    }

    fn encrypt_block_in_place(&mut self, block: &mut [u8], final_block: bool) -> Result<usize> {
        delegate!(self, adapter => adapter.encrypt_block_in_place(block, final_block))
    }

    fn decrypt_block(&mut self, cipher: &[u8], plain: &mut [u8], final_block: bool) -> Result<usize> {
        delegate!(self, adapter => adapter.decrypt_block(cipher, plain, final_block))
    }

    fn decrypt_block_in_place(&mut self, block: &mut [u8], final_block: bool) -> Result<usize> {
        delegate!(self, adapter => adapter.decrypt_block_in_place(block, final_block))
    }

    fn destroy(&mut self) {
        delegate!(self, adapter => adapter.destroy())
    }
}
