//! One-bit LWE public-key encryption
//!
//! `A` is `m × n`, addressed `[row][col]`. Key generation computes
//! `t = A·s + e` (length `m`); encryption computes `u = Aᵀ·r + e1`
//! (length `n`) and `v = ⟨t, r⟩ + e2 + Encode(bit)`. Every stored ring
//! element is reduced into `[0, q)`.

mod params;
mod scheme;
mod types;

pub use params::LweParams;
pub use scheme::{decrypt, decryption_noise, encode_bit, encrypt, keygen};
pub use types::{Ciphertext, Coins, PublicKey, SecretKey};
