//! Constants for the DES family of block ciphers

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// DES external key size in bits (56 key bits plus 8 unchecked parity bits)
pub const DES_KEY_SIZE_BITS_EXTERNAL: usize = 64;

/// DES key size in bytes
pub const DES_KEY_SIZE: usize = DES_KEY_SIZE_BITS_EXTERNAL / 8;

/// Number of DES rounds
pub const DES_ROUNDS: usize = 16;

/// Number of independent DES subkeys in three-key triple DES
pub const TDES_SUBKEY_COUNT: usize = 3;

/// Three-key triple DES (EDE) key size in bytes
pub const TDES_KEY_SIZE: usize = DES_KEY_SIZE * TDES_SUBKEY_COUNT;

/// Three-key triple DES block size in bytes
pub const TDES_BLOCK_SIZE: usize = DES_BLOCK_SIZE;

/// Algorithm identifier for single DES
pub const DES_ALGORITHM_ID: &str = "DES";

/// Algorithm identifier for three-key triple DES in EDE composition
pub const TDES_ALGORITHM_ID: &str = "3DES-3KEY-EDE";
