//! Canonical encoding of integer vectors as hash input
//!
//! Vectors are rendered as decimal integers separated by commas, with no
//! trailing separator and no whitespace. This text is never parsed back: it
//! exists only to feed SHA-256 deterministically. Digests are turned back into
//! small integers by reading their first 256 bits as big-endian bytes.

use core::fmt::{self, Display, Write};

use lwekem_params::pqc::lwe::LWE_DIGEST_BITS;

use crate::error::{validate, Error, Result};
use crate::hash::{HashFunction, Sha256};
use crate::lattice::Matrix;

/// Render a vector as comma-separated decimal integers
pub fn encode_vector<T: Display>(v: &[T]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_vector(&mut out, v, true);
    out
}

fn write_vector<W: Write, T: Display>(w: &mut W, v: &[T], mut first: bool) -> fmt::Result {
    for x in v {
        if !first {
            w.write_char(',')?;
        }
        write!(w, "{}", x)?;
        first = false;
    }
    Ok(())
}

/// Row-major flattening of `A` followed by `t`
pub fn flatten_matrix_and_vector(a: &Matrix, t: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.as_slice().len() + t.len());
    out.extend_from_slice(a.as_slice());
    out.extend_from_slice(t);
    out
}

/// Big-endian bits of a byte string, most significant bit first
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&b| (0..8).rev().map(move |i| (b >> i) & 1 == 1))
        .collect()
}

/// Bits of a digest, truncated or right-padded with zeros to exactly 256
pub fn digest_to_bits(digest: &[u8]) -> Vec<bool> {
    let mut bits = bytes_to_bits(digest);
    bits.resize(LWE_DIGEST_BITS, false);
    bits
}

/// Split a bit string into bytes and widen each to `i32`
///
/// Fails with an encoding error when the length is not a multiple of 8.
pub fn bits_to_i32_vector(bits: &[bool]) -> Result<Vec<i32>> {
    validate::encoding(
        bits.len() % 8 == 0,
        "bits_to_i32_vector",
        "bit string length is not a multiple of 8",
    )?;
    Ok(bits
        .chunks_exact(8)
        .map(|byte| byte.iter().fold(0i32, |acc, &b| (acc << 1) | b as i32))
        .collect())
}

/// `fmt::Write` sink that feeds text straight into SHA-256
struct HashWriter<'a> {
    hasher: &'a mut Sha256,
}

impl Write for HashWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.hasher
            .update(s.as_bytes())
            .map(|_| ())
            .map_err(|_| fmt::Error)
    }
}

/// Streams the canonical encoding of a concatenation of vectors into SHA-256
///
/// Absorbing `a` then `b` hashes exactly the text of `encode_vector(a ‖ b)`,
/// without building the concatenation or the string.
#[derive(Clone)]
pub struct CanonicalHasher {
    hasher: Sha256,
    empty: bool,
}

impl CanonicalHasher {
    /// Start an empty encoding
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
            empty: true,
        }
    }

    /// Append a vector to the hashed concatenation
    pub fn absorb<T: Display>(&mut self, v: &[T]) -> Result<&mut Self> {
        let first = self.empty;
        let mut w = HashWriter {
            hasher: &mut self.hasher,
        };
        write_vector(&mut w, v, first).map_err(|_| Error::Processing {
            operation: "canonical encoding",
            details: "hash sink rejected input",
        })?;
        self.empty &= v.is_empty();
        Ok(self)
    }

    /// Append one scalar
    pub fn absorb_scalar<T: Display>(&mut self, x: T) -> Result<&mut Self> {
        self.absorb(core::slice::from_ref(&x))
    }

    /// Append `Flatten(A, t)`
    pub fn absorb_matrix_and_vector(&mut self, a: &Matrix, t: &[u32]) -> Result<&mut Self> {
        self.absorb(a.as_slice())?.absorb(t)
    }

    /// `BitsToInt32Vector(DigestToBits(digest))` of everything absorbed
    pub fn finalize(&mut self) -> Result<Vec<i32>> {
        let digest = self.hasher.finalize()?;
        self.empty = true;
        bits_to_i32_vector(&digest_to_bits(digest.as_ref()))
    }
}

impl Default for CanonicalHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// `BitsToInt32Vector(DigestToBits(SHA-256(EncodeVector(v))))`
pub fn hash_vector<T: Display>(v: &[T]) -> Result<Vec<i32>> {
    CanonicalHasher::new().absorb(v)?.finalize()
}
