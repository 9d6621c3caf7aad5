//! Hash functions used by the canonical encoder and the KEM hash chain
//!
//! Only SHA-256 is needed: every hash in the key-encapsulation mechanism is
//! SHA-256 over the canonical text encoding of an integer vector.

use crate::error::Result;

pub mod sha256;

pub use sha256::{Sha256, Sha256Digest};

/// Trait for incremental hash functions
pub trait HashFunction: Sized {
    /// Fixed-size digest produced by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Returns the digest and resets the state
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Digest size in bytes
    fn output_size() -> usize;

    /// Internal block size in bytes
    fn block_size() -> usize;

    /// Human-readable algorithm name
    fn name() -> String;

    /// One-shot convenience wrapper
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut h = Self::new();
        h.update(data)?;
        h.finalize()
    }
}
