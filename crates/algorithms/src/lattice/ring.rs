//! Modular integer arithmetic

use crate::error::{validate, Error, Result};

/// Euclidean remainder: the representative of `a` in `[0, b)` for any sign of `a`
///
/// `b` must be positive. Truncated remainder (`%`) returns negative values
/// for negative `a` and must not be used for ring reductions.
#[inline]
pub fn modulo(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0, "modulus must be positive");
    a.rem_euclid(b)
}

/// The ring Z_q with a fixed modulus
///
/// Inputs to the binary operations are expected in `[0, q)`; outputs always are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zq {
    q: u32,
}

impl Zq {
    /// Create the ring context, rejecting `q = 0`
    pub fn new(q: u32) -> Result<Self> {
        validate::parameter(q > 0, "q", "modulus must be positive")?;
        Ok(Self { q })
    }

    /// The modulus
    #[inline]
    pub fn q(&self) -> u32 {
        self.q
    }

    /// Reduce any signed integer into `[0, q)`
    #[inline]
    pub fn reduce(&self, a: i64) -> u32 {
        modulo(a, self.q as i64) as u32
    }

    /// Lift a small signed value into the ring
    #[inline]
    pub fn lift(&self, a: i32) -> u32 {
        self.reduce(a as i64)
    }

    /// `a + b mod q`
    #[inline]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        ((a as u64 + b as u64) % self.q as u64) as u32
    }

    /// `a - b mod q`
    #[inline]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        ((a as u64 + self.q as u64 - (b as u64 % self.q as u64)) % self.q as u64) as u32
    }

    /// `a · b mod q`
    #[inline]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        ((a as u64 * b as u64) % self.q as u64) as u32
    }

    /// `-a mod q`
    #[inline]
    pub fn neg(&self, a: u32) -> u32 {
        self.sub(0, a)
    }

    /// Centered representative in `(-q/2, q/2]`
    #[inline]
    pub fn centered(&self, a: u32) -> i64 {
        let a = a % self.q;
        if a > self.q / 2 {
            a as i64 - self.q as i64
        } else {
            a as i64
        }
    }

    /// `Σ a[i]·x[i] mod q` for a ring vector `a` and a small signed vector `x`
    ///
    /// The accumulator is reduced after every multiply-accumulate step.
    pub fn inner_product(&self, a: &[u32], x: &[i32]) -> Result<u32> {
        validate::length("inner product", x.len(), a.len())?;
        let q = self.q as u64;
        let acc = a.iter().zip(x.iter()).fold(0u64, |acc, (&ai, &xi)| {
            (acc + ai as u64 * self.lift(xi) as u64) % q
        });
        Ok(acc as u32)
    }

    /// Reduce every entry of a signed vector
    pub fn reduce_vec(&self, x: &[i32]) -> Vec<u32> {
        x.iter().map(|&v| self.lift(v)).collect()
    }

    /// Entry-wise sum of a ring vector and a small signed vector
    pub fn add_small(&self, a: &[u32], e: &[i32]) -> Result<Vec<u32>> {
        validate::length("vector addition", e.len(), a.len())?;
        Ok(a.iter()
            .zip(e.iter())
            .map(|(&ai, &ei)| self.add(ai, self.lift(ei)))
            .collect())
    }

    /// Check that every entry is a canonical representative
    pub fn check_reduced(&self, a: &[u32], context: &'static str) -> Result<()> {
        if a.iter().any(|&v| v >= self.q) {
            return Err(Error::encoding(context, "entry not reduced modulo q"));
        }
        Ok(())
    }
}
