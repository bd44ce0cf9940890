//! Identifiers exchanged with the host key store

use core::fmt;
use core::str::FromStr;

use descsp_params::utils::symmetric::{
    DES_ALGORITHM_ID, DES_BLOCK_SIZE, DES_KEY_SIZE, TDES_ALGORITHM_ID, TDES_BLOCK_SIZE,
    TDES_KEY_SIZE,
};

/// Algorithm identifier requested from the key context extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// Single DES, 8-byte key
    Des,
    /// Triple DES, three independent keys, encrypt-decrypt-encrypt
    TripleDes3KeyEde,
}

impl AlgorithmId {
    /// Identifier string understood by the host key store
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Des => DES_ALGORITHM_ID,
            Self::TripleDes3KeyEde => TDES_ALGORITHM_ID,
        }
    }

    /// Exact key length accepted for this algorithm, in bytes
    pub const fn key_size(self) -> usize {
        match self {
            Self::Des => DES_KEY_SIZE,
            Self::TripleDes3KeyEde => TDES_KEY_SIZE,
        }
    }

    /// Block size reported to the host, in bytes
    pub const fn block_size(self) -> usize {
        match self {
            Self::Des => DES_BLOCK_SIZE,
            Self::TripleDes3KeyEde => TDES_BLOCK_SIZE,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unsupported algorithm identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported algorithm identifier: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for AlgorithmId {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            DES_ALGORITHM_ID => Ok(Self::Des),
            TDES_ALGORITHM_ID => Ok(Self::TripleDes3KeyEde),
            other => Err(UnknownAlgorithm(other.to_owned())),
        }
    }
}

/// Intended use of the key material pulled from a host context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyUsage {
    /// Key may be used to encrypt
    Encrypt,
    /// Key may be used to decrypt
    Decrypt,
}

impl KeyUsage {
    /// Usage matching the direction passed to `init`
    pub const fn for_direction(encrypting: bool) -> Self {
        if encrypting {
            Self::Encrypt
        } else {
            Self::Decrypt
        }
    }

    /// Usage name as the host key store spells it
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Encrypt => "ENCRYPT",
            Self::Decrypt => "DECRYPT",
        }
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
