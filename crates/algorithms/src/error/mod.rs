//! Error handling for the DES primitive

use core::fmt;

/// The error type for DES primitive operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// State initialisation failed
    Resource {
        /// Engine that reported the failure
        primitive: &'static str,
        /// Raw non-zero status returned by the engine
        code: i32,
    },
}

/// Result type for DES primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a Resource error from an engine status
    pub fn resource(primitive: &'static str, code: i32) -> Self {
        Error::Resource { primitive, code }
    }

    /// Raw engine status carried by this error
    pub fn code(&self) -> i32 {
        match self {
            Error::Resource { code, .. } => *code,
        }
    }
}

// Display implementation for error formatting
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Resource { primitive, code } => {
                write!(f, "{} state initialisation returned {}", primitive, code)
            }
        }
    }
}

impl std::error::Error for Error {}
