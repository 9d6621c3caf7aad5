//! Shared harness for the lwekem integration tests.
pub mod constant_time;

use lwekem_api::Kem;
use lwekem_kem::{LweKem, LweKemParams};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic generator for reproducible test runs.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Generate a keypair for profile `P` from a fixed seed.
pub fn keypair<P: LweKemParams>(
    seed: u64,
) -> <LweKem<P> as Kem>::KeyPair {
    let mut rng = seeded_rng(seed);
    match LweKem::<P>::keypair(&mut rng) {
        Ok(keypair) => keypair,
        Err(e) => panic!("keypair generation failed for {}: {}", P::NAME, e),
    }
}
