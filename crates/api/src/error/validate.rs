//! Validation utilities shared by the block cipher contexts
//!
//! Every check runs before any output byte is touched.

use super::{Error, Result};
use crate::types::AlgorithmId;

/// Validate an extracted key and borrow it as a fixed-size array
#[inline(always)]
pub fn key_length<const N: usize>(algorithm: AlgorithmId, key: &[u8]) -> Result<&[u8; N]> {
    key.try_into().map_err(|_| Error::InvalidKeyAttribute {
        algorithm,
        expected: N,
        actual: key.len(),
    })
}

/// Validate an exact input length
#[inline(always)]
pub fn input_length(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InputLength { expected, actual });
    }
    Ok(())
}

/// Validate a minimum input length
#[inline(always)]
pub fn min_input_length(actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InputLength {
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that an output buffer can hold `required` bytes
#[inline(always)]
pub fn output_capacity(available: usize, required: usize) -> Result<()> {
    if available < required {
        return Err(Error::OutputLength {
            required,
            available,
        });
    }
    Ok(())
}
