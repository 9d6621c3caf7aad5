//! Public API traits and types for the lwekem library
//!
//! This crate provides the public API surface for the lwekem workspace:
//! the `Kem` trait, byte serialization traits, the shared error type and
//! zeroizing key containers.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
