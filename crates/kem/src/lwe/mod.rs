//! LWE Key Encapsulation Mechanism (KEM).
//!
//! A one-bit LWE encryption scheme turned into a KEM by a Fujisaki-Okamoto
//! transform with implicit rejection. The session key is a 256-bit
//! SHA-256 digest chained over the public key, the plaintext bit and the
//! ciphertext.

// Modules defining the LWE KEM logic and parameters.
mod batch; // Parallel trial runner
mod ind_cca; // Fujisaki-Okamoto transform
mod kem; // Defines the LweKem struct and implements api::Kem
mod keys; // Key, ciphertext and session-key types
mod params;
mod serialize; // Byte layouts for keys and ciphertexts

// Concrete LWE variants
mod lwe1024;
mod lwe512;

// Re-export the primary KEM types for each profile.
pub use self::lwe1024::Lwe1024;
pub use self::lwe512::Lwe512;

pub use self::batch::{run_batch, run_trials, BatchConfig, BatchReport, CoinMode, TrialOutcome};
pub use self::kem::LweKem;
pub use self::keys::{LweCiphertext, LwePublicKey, LweSecretKey, LweSharedSecret};
pub use self::params::{Lwe1024ParamsImpl, Lwe512ParamsImpl, LweKemParams, LWE_SESSION_KEY_BYTES};
