//! Error handling for PKE operations.

use core::fmt;

use lwekem_algorithms::error::Error as PrimitiveError;
use lwekem_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure in ring arithmetic, sampling or encoding
    Primitive(PrimitiveError),
    /// Zero dimension or modulus, or a noise width the samplers cannot use
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
    /// A key, coin or ciphertext vector does not have the length the parameters require
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Plaintext other than 0 or 1
    InvalidPlaintext(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::InvalidParameter { name, reason } => {
                write!(f, "Invalid LWE parameter '{}': {}", name, reason)
            }
            Error::DimensionMismatch {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Dimension mismatch for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::InvalidPlaintext(bit) => {
                write!(f, "Plaintext must be a single bit, got {}", bit)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::Length {
                context,
                expected,
                actual,
            } => Error::DimensionMismatch {
                context,
                expected,
                actual,
            },
            other => Error::Primitive(other),
        }
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidParameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.to_string(),
            },
            Error::DimensionMismatch {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidPlaintext(bit) => CoreError::InvalidParameter {
                context: "LWE plaintext",
                message: format!("plaintext must be 0 or 1, got {}", bit),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Validation helpers for PKE inputs
pub mod validate {
    use super::{Error, Result};

    /// Validate a parameter condition
    #[inline(always)]
    pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
        if !condition {
            return Err(Error::InvalidParameter { name, reason });
        }
        Ok(())
    }

    /// Validate a vector length
    #[inline(always)]
    pub fn dimension(context: &'static str, actual: usize, expected: usize) -> Result<()> {
        if actual != expected {
            return Err(Error::DimensionMismatch {
                context,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Validate a single-bit plaintext
    #[inline(always)]
    pub fn plaintext(bit: u8) -> Result<()> {
        if bit > 1 {
            return Err(Error::InvalidPlaintext(bit));
        }
        Ok(())
    }
}
