//! Parallel encapsulate/decapsulate trials.
//!
//! Each trial index owns a ChaCha20 generator seeded from the batch seed on
//! its own stream, so results do not depend on thread count or scheduling.
//! Keys are shared read-only across workers; outcomes are collected in index
//! order and reduced afterwards.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use tracing::debug;

use lwekem_algorithms::sample_bits;
use lwekem_pke::{decrypt, Coins};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ind_cca::{kem_decaps, kem_encaps_bit, kem_encaps_with_coins, CoinSource};
use super::keys::{LwePublicKey, LweSecretKey};
use super::params::LweKemParams;
use crate::error::{Error, Result};

/// How each trial obtains its encryption coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoinMode {
    /// Fresh `(r, e1, e2)` per trial, handed to both encapsulation and decapsulation
    Explicit,
    /// Coins expanded from the plaintext bit; decapsulation sees only the ciphertext
    #[default]
    Derived,
}

/// Batch settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchConfig {
    /// Number of independent trials
    pub trials: usize,
    /// Seed shared by every trial's generator
    pub seed: u64,
    pub mode: CoinMode,
    /// Worker threads; `None` uses the global rayon pool
    pub threads: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: 0,
            mode: CoinMode::Derived,
            threads: None,
        }
    }
}

/// Outcome of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    pub bit: u8,
    pub decrypted: u8,
    /// Re-encryption reproduced the ciphertext
    pub accepted: bool,
    /// Accepted and both sides hold the same session key
    pub agreed: bool,
}

/// Aggregate over a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchReport {
    pub trials: usize,
    pub accepted: usize,
    pub agreed: usize,
    pub bit_errors: usize,
    pub elapsed: Duration,
}

impl BatchReport {
    fn from_outcomes(outcomes: &[TrialOutcome], elapsed: Duration) -> Self {
        outcomes.iter().fold(
            BatchReport {
                trials: outcomes.len(),
                accepted: 0,
                agreed: 0,
                bit_errors: 0,
                elapsed,
            },
            |mut acc, o| {
                acc.accepted += o.accepted as usize;
                acc.agreed += o.agreed as usize;
                acc.bit_errors += (o.bit != o.decrypted) as usize;
                acc
            },
        )
    }

    /// Fraction of trials that failed the re-encryption check
    pub fn failure_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.trials - self.accepted) as f64 / self.trials as f64
    }
}

fn run_trial<P: LweKemParams>(
    pk: &LwePublicKey<P>,
    sk: &LweSecretKey<P>,
    config: &BatchConfig,
    index: usize,
) -> Result<TrialOutcome> {
    let params = P::params()?;
    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
    rng.set_stream(index as u64);

    let bit = sample_bits(&mut rng, 1)[0];
    let (ct, encapsulated, decapsulation) = match config.mode {
        CoinMode::Explicit => {
            let coins = Coins::sample(&params, &mut rng)?;
            let (ct, key) = kem_encaps_with_coins(pk, bit, &coins)?;
            let dec = kem_decaps(sk, &ct, CoinSource::Explicit(&coins))?;
            (ct, key, dec)
        }
        CoinMode::Derived => {
            let (ct, key) = kem_encaps_bit(pk, bit)?;
            let dec = kem_decaps(sk, &ct, CoinSource::Derived)?;
            (ct, key, dec)
        }
    };

    let accepted = bool::from(decapsulation.accepted);
    Ok(TrialOutcome {
        bit,
        decrypted: decrypt(&params, sk.pke(), ct.pke())?,
        accepted,
        agreed: accepted && decapsulation.key == encapsulated,
    })
}

/// Run `config.trials` independent encapsulate/decapsulate pairs in parallel
/// and return the per-index outcomes.
pub fn run_trials<P: LweKemParams>(
    pk: &LwePublicKey<P>,
    sk: &LweSecretKey<P>,
    config: &BatchConfig,
) -> Result<Vec<TrialOutcome>> {
    let work = || {
        (0..config.trials)
            .into_par_iter()
            .map(|index| run_trial(pk, sk, config, index))
            .collect::<Result<Vec<_>>>()
    };

    match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| Error::Batch {
                details: e.to_string(),
            })?
            .install(work),
        None => work(),
    }
}

/// Run a batch and reduce it to a report.
pub fn run_batch<P: LweKemParams>(
    pk: &LwePublicKey<P>,
    sk: &LweSecretKey<P>,
    config: &BatchConfig,
) -> Result<BatchReport> {
    debug!(
        algorithm = P::NAME,
        trials = config.trials,
        mode = ?config.mode,
        threads = ?config.threads,
        "starting batch"
    );

    let start = Instant::now();
    let outcomes = run_trials(pk, sk, config)?;
    let report = BatchReport::from_outcomes(&outcomes, start.elapsed());

    debug!(
        algorithm = P::NAME,
        accepted = report.accepted,
        agreed = report.agreed,
        bit_errors = report.bit_errors,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "batch finished"
    );
    Ok(report)
}
