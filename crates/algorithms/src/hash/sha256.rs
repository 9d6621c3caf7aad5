//! SHA-256 adapter over the `sha2` crate

use ::sha2::Digest as _;
use lwekem_params::utils::hash::{SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE};
use zeroize::Zeroize;

use super::HashFunction;
use crate::error::Result;

/// SHA-256 with the `HashFunction` interface
#[derive(Clone, Default)]
pub struct Sha256 {
    inner: ::sha2::Sha256,
}

/// A 32-byte SHA-256 digest
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Sha256Digest([u8; SHA256_OUTPUT_SIZE]);

impl Sha256Digest {
    /// Borrow the raw digest bytes
    pub fn as_bytes(&self) -> &[u8; SHA256_OUTPUT_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for Sha256Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Sha256Digest(")?;
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

impl HashFunction for Sha256 {
    type Output = Sha256Digest;

    fn new() -> Self {
        Self::default()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.inner.update(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let out = self.inner.finalize_reset();
        let mut digest = [0u8; SHA256_OUTPUT_SIZE];
        digest.copy_from_slice(&out);
        Ok(Sha256Digest(digest))
    }

    fn output_size() -> usize {
        SHA256_OUTPUT_SIZE
    }

    fn block_size() -> usize {
        SHA256_BLOCK_SIZE
    }

    fn name() -> String {
        "SHA-256".to_string()
    }
}
