//! Key Encapsulation Mechanisms (KEM)
//!
//! This crate implements an LWE-based key encapsulation mechanism: a
//! Fujisaki-Okamoto transform over the one-bit scheme in `lwekem-pke`,
//! with implicit rejection and a parallel batch runner for correctness
//! measurements.

#![forbid(unsafe_code)]

pub mod error;
pub mod lwe;

// Re-exports
pub use error::{Error, Result};
pub use lwe::{
    run_batch, BatchConfig, BatchReport, CoinMode, Lwe1024, Lwe512, LweCiphertext, LweKem,
    LweKemParams, LwePublicKey, LweSecretKey, LweSharedSecret,
};
