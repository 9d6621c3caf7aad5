//! Sampling algorithms for LWE secrets, errors and public matrices
//!
//! Every sampler draws from a caller-owned RNG. Nothing here keeps generator
//! state of its own, so parallel callers give each worker its own RNG.

use rand::{CryptoRng, Rng, RngCore};

use super::matrix::Matrix;
use super::ring::Zq;
use crate::error::{validate, Error, Result};
use lwekem_params::pqc::lwe::LWE_GAUSSIAN_TAILCUT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for sampling vectors uniformly over Z_q
pub trait UniformSampler {
    /// Samples `len` entries uniformly in `[0, q)`
    fn sample_uniform<R: RngCore + CryptoRng>(rng: &mut R, zq: &Zq, len: usize)
        -> Result<Vec<u32>>;
}

/// Trait for sampling vectors from a Centered Binomial Distribution (CBD)
pub trait CbdSampler {
    /// Samples `len` entries from CBD(eta), each in `[-eta, eta]`
    fn sample_cbd<R: RngCore + CryptoRng>(rng: &mut R, eta: u8, len: usize) -> Result<Vec<i32>>;
}

/// Trait for sampling vectors from a discrete Gaussian distribution
pub trait GaussianSampler {
    /// Samples `len` entries from the discrete Gaussian of mean 0 and deviation `sigma`
    fn sample_gaussian<R: RngCore + CryptoRng>(
        rng: &mut R,
        sigma: f64,
        len: usize,
    ) -> Result<Vec<i32>>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl UniformSampler for DefaultSamplers {
    fn sample_uniform<R: RngCore + CryptoRng>(
        rng: &mut R,
        zq: &Zq,
        len: usize,
    ) -> Result<Vec<u32>> {
        let q = zq.q() as u64;
        // Largest multiple of q that fits in 32 bits
        let threshold = ((1u64 << 32) / q) * q;

        let mut out = Vec::with_capacity(len);
        while out.len() < len {
            let sample = rng.next_u32() as u64;
            if sample < threshold {
                out.push((sample % q) as u32);
            }
        }
        Ok(out)
    }
}

impl CbdSampler for DefaultSamplers {
    fn sample_cbd<R: RngCore + CryptoRng>(rng: &mut R, eta: u8, len: usize) -> Result<Vec<i32>> {
        if eta == 0 || eta > 16 {
            return Err(Error::param(
                "eta",
                format!("eta must be in range [1, 16], got {}", eta),
            ));
        }

        // CBD(eta): sum of eta bits minus sum of the next eta bits
        let eta = eta as u32;
        let mask = (1u32 << eta) - 1;
        let out = (0..len)
            .map(|_| {
                let word = rng.next_u32();
                let a = (word & mask).count_ones() as i32;
                let b = ((word >> eta) & mask).count_ones() as i32;
                a - b
            })
            .collect();
        Ok(out)
    }
}

impl GaussianSampler for DefaultSamplers {
    fn sample_gaussian<R: RngCore + CryptoRng>(
        rng: &mut R,
        sigma: f64,
        len: usize,
    ) -> Result<Vec<i32>> {
        validate::parameter(
            sigma.is_finite() && sigma > 0.0,
            "stddev",
            "standard deviation must be positive and finite",
        )?;

        let sigma_sq_2 = 2.0 * sigma * sigma;
        let bound = (sigma * LWE_GAUSSIAN_TAILCUT).ceil() as i32;

        let out = (0..len)
            .map(|_| loop {
                // Uniform candidate in the tail-cut window
                let x = rng.gen_range(-bound..=bound);

                // Accept with probability exp(-x²/(2σ²))
                let prob = (-((x as f64) * (x as f64)) / sigma_sq_2).exp();
                let u: f64 = rng.gen();
                if u < prob {
                    break x;
                }
            })
            .collect();
        Ok(out)
    }
}

/// Centered small-magnitude distribution used for secrets and errors
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoiseDistribution {
    /// Centered binomial with support `[-eta, eta]`
    CenteredBinomial {
        /// Number of coin pairs
        eta: u8,
    },
    /// Discrete Gaussian with mean 0
    Gaussian {
        /// Standard deviation
        stddev: f64,
    },
}

impl NoiseDistribution {
    /// Check the distribution's own parameter
    pub fn validate(&self) -> Result<()> {
        match *self {
            NoiseDistribution::CenteredBinomial { eta } => {
                validate::parameter((1..=16).contains(&eta), "eta", "eta must be in range [1, 16]")
            }
            NoiseDistribution::Gaussian { stddev } => validate::parameter(
                stddev.is_finite() && stddev > 0.0,
                "stddev",
                "standard deviation must be positive and finite",
            ),
        }
    }

    /// Sample a vector of `len` independent entries
    pub fn sample_vec<R: RngCore + CryptoRng>(&self, rng: &mut R, len: usize) -> Result<Vec<i32>> {
        match *self {
            NoiseDistribution::CenteredBinomial { eta } => {
                DefaultSamplers::sample_cbd(rng, eta, len)
            }
            NoiseDistribution::Gaussian { stddev } => {
                DefaultSamplers::sample_gaussian(rng, stddev, len)
            }
        }
    }

    /// Sample a single entry
    pub fn sample<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<i32> {
        let v = self.sample_vec(rng, 1)?;
        v.first().copied().ok_or(Error::Processing {
            operation: "noise sampling",
            details: "empty sample",
        })
    }

    /// Largest magnitude a sample can take
    pub fn max_magnitude(&self) -> u32 {
        match *self {
            NoiseDistribution::CenteredBinomial { eta } => eta as u32,
            NoiseDistribution::Gaussian { stddev } => (stddev * LWE_GAUSSIAN_TAILCUT).ceil() as u32,
        }
    }
}

/// Uniform integer in `[-bound, bound]`
pub fn sample_uniform_bounded<R: RngCore + CryptoRng>(rng: &mut R, bound: u32) -> i32 {
    let bound = bound.min(i32::MAX as u32) as i32;
    rng.gen_range(-bound..=bound)
}

/// Vector of uniform integers in `[-bound, bound]`
pub fn sample_uniform_bounded_vec<R: RngCore + CryptoRng>(
    rng: &mut R,
    bound: u32,
    len: usize,
) -> Vec<i32> {
    (0..len).map(|_| sample_uniform_bounded(rng, bound)).collect()
}

/// Uniform bits, one per byte, for plaintext generation
pub fn sample_bits<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| (rng.next_u32() & 1) as u8).collect()
}

/// Uniform `rows × cols` matrix over Z_q
pub fn sample_matrix<R: RngCore + CryptoRng>(
    rng: &mut R,
    zq: &Zq,
    rows: usize,
    cols: usize,
) -> Result<Matrix> {
    let data = DefaultSamplers::sample_uniform(rng, zq, rows * cols)?;
    Matrix::from_row_major(rows, cols, data)
}
