//! Constants for the LWE key encapsulation mechanism

/// Size of a session key in bytes
pub const LWE_SESSION_KEY_BYTES: usize = 32;

/// Number of digest bits kept as key material
pub const LWE_DIGEST_BITS: usize = 256;

/// Size of the implicit-rejection seed in bytes
pub const LWE_REJECTION_SEED_BYTES: usize = 32;

/// Size of the seed expanded into encryption coins
pub const LWE_COINS_SEED_BYTES: usize = 32;

/// Rejection-sampling tail cut for the discrete Gaussian, in standard deviations
pub const LWE_GAUSSIAN_TAILCUT: f64 = 6.0;

/// Structure containing an LWE parameter profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LweParamSet {
    /// Secret dimension (length of `s`, `u`, `e1`)
    pub n: usize,

    /// Sample dimension (rows of `A`, length of `t`, `e`, `r`)
    pub m: usize,

    /// Modulus
    pub q: u32,

    /// Standard deviation of the discrete Gaussian for `e`, `r`, `e1`
    pub stddev: f64,

    /// Centered binomial width for `s`; also the bound on `e2`
    pub eta: u8,
}

/// Profile with a 17-bit modulus and wide noise
pub const LWE_512: LweParamSet = LweParamSet {
    n: 512,
    m: 512,
    q: 66536,
    stddev: 3.19,
    eta: 5,
};

/// Profile with the Kyber modulus and a larger dimension
pub const LWE_1024: LweParamSet = LweParamSet {
    n: 1024,
    m: 1024,
    q: 3329,
    stddev: 2.3,
    eta: 3,
};
