//! Public-key encryption for the lwekem library.
//!
//! A one-bit Learning-With-Errors scheme over unstructured matrices. The
//! encryption randomness is an explicit input, so the KEM transform can
//! re-encrypt deterministically.

#![forbid(unsafe_code)]

pub mod error;
pub mod lwe;

// Re-export key items
pub use error::{Error, Result};
pub use lwe::{
    decrypt, decryption_noise, encode_bit, encrypt, keygen, Ciphertext, Coins, LweParams,
    PublicKey, SecretKey,
};
