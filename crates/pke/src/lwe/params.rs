//! Runtime parameter sets

use lwekem_algorithms::{NoiseDistribution, Zq};
use lwekem_params::pqc::lwe::{LweParamSet, LWE_1024, LWE_512};

use tracing::debug;

use crate::error::{validate, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validated LWE parameters
///
/// - `s` is drawn from the centered binomial distribution CBD(`eta`)
/// - `e` is drawn from the discrete Gaussian of deviation `stddev`
/// - `r` and `e1` are drawn from the ephemeral distribution, the same
///   Gaussian unless overridden with [`LweParams::with_ephemeral_noise`]
/// - `e2` is uniform in `[-eta, eta]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LweParams {
    n: usize,
    m: usize,
    q: u32,
    stddev: f64,
    eta: u8,
    ephemeral: NoiseDistribution,
}

impl LweParams {
    /// Build and validate a parameter set
    pub fn new(n: usize, m: usize, q: u32, stddev: f64, eta: u8) -> Result<Self> {
        let params = Self {
            n,
            m,
            q,
            stddev,
            eta,
            ephemeral: NoiseDistribution::Gaussian { stddev },
        };
        params.validate()?;
        Ok(params)
    }

    /// Parameters from a compile-time profile
    pub fn from_profile(profile: &LweParamSet) -> Result<Self> {
        Self::new(profile.n, profile.m, profile.q, profile.stddev, profile.eta)
    }

    /// `n = m = 512`, `q = 66536`, `stddev = 3.19`, `eta = 5`
    pub fn lwe_512() -> Self {
        Self {
            n: LWE_512.n,
            m: LWE_512.m,
            q: LWE_512.q,
            stddev: LWE_512.stddev,
            eta: LWE_512.eta,
            ephemeral: NoiseDistribution::Gaussian {
                stddev: LWE_512.stddev,
            },
        }
    }

    /// `n = m = 1024`, `q = 3329`, `stddev = 2.3`, `eta = 3`
    pub fn lwe_1024() -> Self {
        Self {
            n: LWE_1024.n,
            m: LWE_1024.m,
            q: LWE_1024.q,
            stddev: LWE_1024.stddev,
            eta: LWE_1024.eta,
            ephemeral: NoiseDistribution::Gaussian {
                stddev: LWE_1024.stddev,
            },
        }
    }

    /// Replace the distribution used for `r` and `e1`
    pub fn with_ephemeral_noise(mut self, noise: NoiseDistribution) -> Result<Self> {
        self.ephemeral = noise;
        self.validate()?;
        Ok(self)
    }

    /// Reject zero dimensions, a zero modulus and unusable noise widths
    pub fn validate(&self) -> Result<()> {
        let checked = self.check();
        if let Err(e) = &checked {
            debug!(
                n = self.n,
                m = self.m,
                q = self.q,
                stddev = self.stddev,
                eta = self.eta,
                error = %e,
                "rejected LWE parameters"
            );
        }
        checked
    }

    fn check(&self) -> Result<()> {
        validate::parameter(self.n > 0, "n", "dimension must be positive")?;
        validate::parameter(self.m > 0, "m", "dimension must be positive")?;
        validate::parameter(self.q > 0, "q", "modulus must be positive")?;
        validate::parameter(
            self.stddev.is_finite() && self.stddev > 0.0,
            "stddev",
            "standard deviation must be positive and finite",
        )?;
        validate::parameter(
            (1..=16).contains(&self.eta),
            "eta",
            "eta must be in range [1, 16]",
        )?;
        self.ephemeral.validate()?;
        Ok(())
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn q(&self) -> u32 {
        self.q
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    pub fn eta(&self) -> u8 {
        self.eta
    }

    /// Distribution of the secret `s`
    pub fn secret_noise(&self) -> NoiseDistribution {
        NoiseDistribution::CenteredBinomial { eta: self.eta }
    }

    /// Distribution of the key-generation error `e`
    pub fn error_noise(&self) -> NoiseDistribution {
        NoiseDistribution::Gaussian {
            stddev: self.stddev,
        }
    }

    /// Distribution of `r` and `e1`
    pub fn ephemeral_noise(&self) -> NoiseDistribution {
        self.ephemeral
    }

    /// Decoding radius `q/4`
    pub fn bound(&self) -> u32 {
        self.q / 4
    }

    /// Ring context for these parameters
    pub fn zq(&self) -> Result<Zq> {
        Ok(Zq::new(self.q)?)
    }
}
