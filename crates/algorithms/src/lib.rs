//! Arithmetic, sampling, hashing and encoding primitives for lwekem
//!
//! This crate holds everything the LWE encryption scheme and the KEM
//! transform build on:
//!
//! - [`lattice`]: Euclidean `modulo`, the [`Zq`] ring, dense row-major
//!   matrices and the noise/uniform samplers
//! - [`hash`]: SHA-256 behind the [`HashFunction`] trait
//! - [`encoding`]: the canonical text encoding hashed by the KEM and the
//!   digest-to-bytes conversion
//!
//! All randomness is supplied by the caller.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Lattice arithmetic and samplers
pub mod lattice;
pub use lattice::{
    modulo, sample_bits, sample_matrix, sample_uniform_bounded, Matrix, NoiseDistribution, Zq,
};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha256};

// Canonical encoder
pub mod encoding;
pub use encoding::{
    bits_to_i32_vector, bytes_to_bits, digest_to_bits, encode_vector, flatten_matrix_and_vector,
    hash_vector, CanonicalHasher,
};
