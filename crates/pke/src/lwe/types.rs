//! Key, ciphertext and coin types

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use lwekem_algorithms::{sample_uniform_bounded, Matrix};

use super::params::LweParams;
use crate::error::{validate, Result};

/// Public key `(A, t)` with `t = A·s + e mod q`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) matrix: Matrix,
    pub(crate) t: Vec<u32>,
}

impl PublicKey {
    /// Assemble a public key, checking `t` has one entry per row of `A`
    pub fn new(matrix: Matrix, t: Vec<u32>) -> Result<Self> {
        validate::dimension("public key t", t.len(), matrix.rows())?;
        Ok(Self { matrix, t })
    }

    /// The `m × n` matrix `A`
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// The vector `t` of length `m`
    pub fn t(&self) -> &[u32] {
        &self.t
    }

    /// Check the key's dimensions against a parameter set
    pub fn check(&self, params: &LweParams) -> Result<()> {
        validate::dimension("public key rows", self.matrix.rows(), params.m())?;
        validate::dimension("public key cols", self.matrix.cols(), params.n())?;
        validate::dimension("public key t", self.t.len(), params.m())
    }

    /// Check every entry of `A` and `t` lies in `[0, q)`
    pub fn check_entries(&self, params: &LweParams) -> Result<()> {
        let zq = params.zq()?;
        zq.check_reduced(self.matrix.as_slice(), "public key A")?;
        zq.check_reduced(&self.t, "public key t")?;
        Ok(())
    }
}

/// Secret vector `s` with entries in `[-eta, eta]`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub(crate) s: Vec<i32>,
}

impl SecretKey {
    pub fn new(s: Vec<i32>) -> Self {
        Self { s }
    }

    pub fn s(&self) -> &[i32] {
        &self.s
    }
}

impl core::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.s.len())
            .finish_non_exhaustive()
    }
}

/// Ciphertext `(u, v)` of a single bit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ciphertext {
    pub(crate) u: Vec<u32>,
    pub(crate) v: u32,
}

impl Ciphertext {
    pub fn new(u: Vec<u32>, v: u32) -> Self {
        Self { u, v }
    }

    /// Vector part, length `n`
    pub fn u(&self) -> &[u32] {
        &self.u
    }

    /// Scalar part
    pub fn v(&self) -> u32 {
        self.v
    }

    /// Mutable access for tamper tests
    #[doc(hidden)]
    pub fn u_mut(&mut self) -> &mut [u32] {
        &mut self.u
    }

    #[doc(hidden)]
    pub fn v_mut(&mut self) -> &mut u32 {
        &mut self.v
    }
}

/// Encryption randomness `(r, e1, e2)` for one call to `encrypt`
///
/// `r` has length `m`, `e1` length `n`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Coins {
    pub(crate) r: Vec<i32>,
    pub(crate) e1: Vec<i32>,
    pub(crate) e2: i32,
}

impl Coins {
    pub fn new(r: Vec<i32>, e1: Vec<i32>, e2: i32) -> Self {
        Self { r, e1, e2 }
    }

    /// Fresh coins from the parameter set's ephemeral distributions
    pub fn sample<R: RngCore + CryptoRng>(params: &LweParams, rng: &mut R) -> Result<Self> {
        let noise = params.ephemeral_noise();
        let r = noise.sample_vec(rng, params.m())?;
        let e1 = noise.sample_vec(rng, params.n())?;
        let e2 = sample_uniform_bounded(rng, params.eta() as u32);
        Ok(Self { r, e1, e2 })
    }

    pub fn r(&self) -> &[i32] {
        &self.r
    }

    pub fn e1(&self) -> &[i32] {
        &self.e1
    }

    pub fn e2(&self) -> i32 {
        self.e2
    }

    pub(crate) fn check(&self, params: &LweParams) -> Result<()> {
        validate::dimension("coins r", self.r.len(), params.m())?;
        validate::dimension("coins e1", self.e1.len(), params.n())?;
        Ok(())
    }
}

impl core::fmt::Debug for Coins {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Coins").finish_non_exhaustive()
    }
}
