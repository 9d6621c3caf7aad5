//! Error handling for KEM operations

use core::fmt;

use lwekem_algorithms::error::Error as PrimitiveError;
use lwekem_api::error::Error as CoreError;
use lwekem_pke::Error as PkeError;

/// Error type for KEM operations
///
/// A ciphertext that fails the re-encryption check is not an error: it
/// yields the implicit-rejection key. These variants cover structurally
/// invalid inputs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Error from the underlying LWE encryption scheme
    Pke(PkeError),

    /// Invalid key format
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Invalid ciphertext format
    InvalidCiphertext {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// Serialization/deserialization errors
    Serialization {
        context: &'static str,
        details: &'static str,
    },

    /// Failure setting up or running a parallel batch
    Batch { details: String },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::Pke(e) => write!(f, "PKE error: {}", e),
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "Invalid {} ciphertext: {}", algorithm, reason)
            }
            Error::Serialization { context, details } => {
                write!(f, "Serialization error in {}: {}", context, details)
            }
            Error::Batch { details } => write!(f, "Batch error: {}", details),
        }
    }
}

// Standard error trait
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Pke(e) => Some(e),
            _ => None,
        }
    }
}

// From PrimitiveError to Error
impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<PkeError> for Error {
    fn from(err: PkeError) -> Self {
        Error::Pke(err)
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Pke(e) => e.into(),
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason.to_string(),
            },
            Error::Serialization { context, details } => CoreError::SerializationError {
                context,
                message: details.to_string(),
            },
            Error::Batch { details } => CoreError::Other {
                context: "batch runner",
                message: details,
            },
        }
    }
}

// Include validation submodule
pub mod validate;

// Re-export core error handling traits
pub use lwekem_api::error::ResultExt;
