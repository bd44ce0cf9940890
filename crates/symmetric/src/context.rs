//! Block handling shared by the DES and triple-DES contexts
//!
//! Both algorithms use an 8-byte block. These helpers run every length
//! check before the output buffer is touched, copy the input block into
//! place when source and destination differ, and hand the block to the
//! algorithm's in-place transform.

use descsp_algorithms::DesPrimitive;
use descsp_api::error::{validate, Error, Result};
use descsp_params::utils::symmetric::DES_BLOCK_SIZE;
use zeroize::Zeroize;

/// One DES block
pub(crate) type Block = [u8; DES_BLOCK_SIZE];

/// Borrow the first block of `buf`, failing if it cannot hold one
fn head_block(buf: &mut [u8]) -> Result<&mut Block> {
    let available = buf.len();
    buf.get_mut(..DES_BLOCK_SIZE)
        .and_then(|head| <&mut Block>::try_from(head).ok())
        .ok_or(Error::OutputLength {
            required: DES_BLOCK_SIZE,
            available,
        })
}

/// Encrypt `plain` (exactly one block) into the head of `cipher`
pub(crate) fn encrypt_block_with(
    plain: &[u8],
    cipher: &mut [u8],
    transform: impl FnOnce(&mut Block),
) -> Result<usize> {
    validate::input_length(plain.len(), DES_BLOCK_SIZE)?;
    validate::output_capacity(cipher.len(), DES_BLOCK_SIZE)?;

    let block = head_block(cipher)?;
    block.copy_from_slice(plain);
    transform(block);
    Ok(DES_BLOCK_SIZE)
}

/// Encrypt a buffer holding exactly one block in place
pub(crate) fn encrypt_in_place_with(
    buf: &mut [u8],
    transform: impl FnOnce(&mut Block),
) -> Result<usize> {
    validate::input_length(buf.len(), DES_BLOCK_SIZE)?;

    transform(head_block(buf)?);
    Ok(DES_BLOCK_SIZE)
}

/// Decrypt the head of `cipher` into the head of `plain`
///
/// The ciphertext length is implied by the host contract. Extra input is
/// ignored; input too short to hold a block is rejected because it cannot
/// be read.
pub(crate) fn decrypt_block_with(
    cipher: &[u8],
    plain: &mut [u8],
    transform: impl FnOnce(&mut Block),
) -> Result<usize> {
    validate::output_capacity(plain.len(), DES_BLOCK_SIZE)?;
    validate::min_input_length(cipher.len(), DES_BLOCK_SIZE)?;

    let block = head_block(plain)?;
    block.copy_from_slice(&cipher[..DES_BLOCK_SIZE]);
    transform(block);
    Ok(DES_BLOCK_SIZE)
}

/// Decrypt the first block of `buf` in place
pub(crate) fn decrypt_in_place_with(
    buf: &mut [u8],
    transform: impl FnOnce(&mut Block),
) -> Result<usize> {
    transform(head_block(buf)?);
    Ok(DES_BLOCK_SIZE)
}

/// Release a primitive state if it was keyed, then wipe its storage
///
/// The wipe runs whether or not the primitive's own release already did so.
pub(crate) fn teardown<P: DesPrimitive>(primitive: &P, state: &mut P::State, allocated: bool) {
    if allocated {
        primitive.release(state);
    }
    state.zeroize();
}
