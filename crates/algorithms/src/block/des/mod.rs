//! DES block cipher engine
//!
//! This module implements the Data Encryption Standard as specified in
//! FIPS 46-3. Blocks and keys are handled as big-endian 64-bit words and
//! every permutation is driven by the tables in the standard.
//!
//! ## Side channels
//!
//! The S-box stage uses combined S/P lookup tables indexed by secret
//! data. This engine is not constant-time; it exists for interoperability
//! with legacy DES and triple-DES data.

mod tables;

use byteorder::{BigEndian, ByteOrder};
use core::fmt;
use descsp_common::security::SecretBuffer;
use descsp_params::utils::symmetric::{DES_BLOCK_SIZE, DES_KEY_SIZE, DES_ROUNDS};
use once_cell::sync::Lazy;
use zeroize::{Zeroize, ZeroizeOnDrop};

use self::tables::{E, FP, IP, P, PC1, PC2, ROTATIONS, S_BOXES};
use super::{DesMode, DesPrimitive};
use crate::error::Result;

/// Bytes per 48-bit round subkey
const SUBKEY_BYTES: usize = 6;

/// Bytes of expanded key material per state
const ROUND_KEY_BYTES: usize = DES_ROUNDS * SUBKEY_BYTES;

/// Mask for one 28-bit key schedule half
const HALF_MASK: u64 = 0x0FFF_FFFF;

/// S-box outputs already routed through P, one table per S-box
static SP_TABLES: Lazy<[[u32; 64]; 8]> = Lazy::new(build_sp_tables);

fn build_sp_tables() -> [[u32; 64]; 8] {
    let mut sp = [[0u32; 64]; 8];
    for (i, sbox) in S_BOXES.iter().enumerate() {
        for (six, entry) in sp[i].iter_mut().enumerate() {
            // outer bits pick the row, inner four bits the column
            let row = ((six >> 4) & 0b10) | (six & 0b01);
            let col = (six >> 1) & 0x0F;
            let nibble = u64::from(sbox[row * 16 + col]);
            *entry = permute(nibble << (28 - 4 * i), 32, &P) as u32;
        }
    }
    sp
}

/// Apply a FIPS 46-3 bit selection table to the low `width` bits of `input`
#[inline(always)]
fn permute(input: u64, width: u32, table: &[u8]) -> u64 {
    table.iter().fold(0u64, |acc, &pos| {
        (acc << 1) | ((input >> (width - u32::from(pos))) & 1)
    })
}

/// Rotate a 28-bit key schedule half left
#[inline(always)]
fn rotate_half(half: u64, shift: u32) -> u64 {
    ((half << shift) | (half >> (28 - shift))) & HALF_MASK
}

/// The cipher function f(R, K)
#[inline(always)]
fn feistel(right: u32, subkey: u64, sp: &[[u32; 64]; 8]) -> u32 {
    let mixed = permute(u64::from(right), 32, &E) ^ subkey;
    sp.iter().enumerate().fold(0u32, |acc, (i, table)| {
        acc | table[((mixed >> (42 - 6 * i)) & 0x3F) as usize]
    })
}

/// Per-instance DES state: the sixteen expanded round subkeys
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct DesState {
    round_keys: SecretBuffer<ROUND_KEY_BYTES>,
}

impl DesState {
    /// Whether every byte of the state is zero
    pub fn is_zeroed(&self) -> bool {
        self.round_keys.is_zeroed()
    }

    fn subkey(&self, round: usize) -> u64 {
        let offset = round * SUBKEY_BYTES;
        BigEndian::read_uint(
            &self.round_keys.as_slice()[offset..offset + SUBKEY_BYTES],
            SUBKEY_BYTES,
        )
    }

    /// Run the key schedule for `key` and store the round subkeys
    fn expand_key(&mut self, key: &[u8; DES_KEY_SIZE]) {
        let mut selected = permute(BigEndian::read_u64(key), 64, &PC1);
        let mut c = (selected >> 28) & HALF_MASK;
        let mut d = selected & HALF_MASK;

        let round_keys = self.round_keys.as_mut_slice();
        for (round, &shift) in ROTATIONS.iter().enumerate() {
            c = rotate_half(c, shift);
            d = rotate_half(d, shift);
            let mut subkey = permute((c << 28) | d, 56, &PC2);

            let offset = round * SUBKEY_BYTES;
            BigEndian::write_uint(
                &mut round_keys[offset..offset + SUBKEY_BYTES],
                subkey,
                SUBKEY_BYTES,
            );
            subkey.zeroize();
        }

        selected.zeroize();
        c.zeroize();
        d.zeroize();
    }

    /// Sixteen Feistel rounds between IP and FP
    fn crypt(&self, block: &mut [u8; DES_BLOCK_SIZE], decrypt: bool) {
        let sp = &*SP_TABLES;
        let permuted = permute(BigEndian::read_u64(block), 64, &IP);
        let mut left = (permuted >> 32) as u32;
        let mut right = permuted as u32;

        for round in 0..DES_ROUNDS {
            let index = if decrypt { DES_ROUNDS - 1 - round } else { round };
            let next = left ^ feistel(right, self.subkey(index), sp);
            left = right;
            right = next;
        }

        // halves are swapped before the final permutation
        let preoutput = (u64::from(right) << 32) | u64::from(left);
        BigEndian::write_u64(block, permute(preoutput, 64, &FP));
    }
}

impl fmt::Debug for DesState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DesState([REDACTED])")
    }
}

/// Software FIPS 46-3 engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdDes;

impl DesPrimitive for StdDes {
    type State = DesState;

    fn name(&self) -> &'static str {
        "DES"
    }

    fn init(&self, state: &mut DesState, mode: DesMode) -> Result<()> {
        match mode {
            DesMode::Standard => {
                Lazy::force(&SP_TABLES);
                state.zeroize();
                Ok(())
            }
        }
    }

    fn load_subkey(&self, state: &mut DesState, key: &[u8; DES_KEY_SIZE]) {
        state.expand_key(key);
    }

    fn encrypt_in_place(&self, state: &DesState, block: &mut [u8; DES_BLOCK_SIZE]) {
        state.crypt(block, false);
    }

    fn decrypt_in_place(&self, state: &DesState, block: &mut [u8; DES_BLOCK_SIZE]) {
        state.crypt(block, true);
    }

    fn release(&self, state: &mut DesState) {
        state.zeroize();
    }
}
