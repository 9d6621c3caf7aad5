//! # lwekem
//!
//! A Learning-With-Errors public-key encryption scheme and the key
//! encapsulation mechanism built on it with a Fujisaki-Okamoto transform.
//!
//! ## Usage
//!
//! ```no_run
//! use lwekem::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = Lwe512::keypair(&mut OsRng)?;
//! let (ct, shared) = Lwe512::encapsulate(&mut OsRng, &pk)?;
//! assert_eq!(Lwe512::decapsulate(&sk, &ct)?, shared);
//! # Ok::<(), lwekem::api::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`lwekem-api`]: the `Kem` and serialization traits, the shared error type
//! - [`lwekem-params`]: the LWE-512 and LWE-1024 parameter profiles
//! - [`lwekem-algorithms`]: Z_q arithmetic, samplers, SHA-256 and the canonical encoder
//! - [`lwekem-pke`]: one-bit LWE encryption with explicit coins
//! - [`lwekem-kem`]: the KEM transform with implicit rejection and the batch runner

pub use lwekem_algorithms as algorithms;
pub use lwekem_api as api;
pub use lwekem_internal as internal;
pub use lwekem_kem as kem;
pub use lwekem_params as params;
pub use lwekem_pke as pke;

/// Common imports for lwekem users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::api::{Kem, Serialize, SerializeSecret};

    pub use crate::kem::{
        run_batch, BatchConfig, BatchReport, CoinMode, Lwe1024, Lwe512, LweCiphertext,
        LwePublicKey, LweSecretKey, LweSharedSecret,
    };

    pub use crate::pke::{Coins, LweParams};
}
