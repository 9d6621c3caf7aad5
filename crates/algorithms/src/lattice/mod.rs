//! Lattice arithmetic over Z_q
//!
//! Plain matrix/vector algebra for unstructured LWE: no polynomial rings,
//! no NTT. Every value stored in a [`Matrix`] or returned by a [`Zq`]
//! operation is a canonical representative in `[0, q)`. Small signed noise
//! vectors are kept as `i32` and lifted into the ring only when they take
//! part in arithmetic.

pub mod matrix;
pub mod norm;
pub mod ring;
pub mod sampling;

pub use matrix::Matrix;
pub use norm::{euclidean_norm, infinity_norm};
pub use ring::{modulo, Zq};
pub use sampling::{
    sample_bits, sample_matrix, sample_uniform_bounded, sample_uniform_bounded_vec, CbdSampler,
    DefaultSamplers, GaussianSampler, NoiseDistribution, UniformSampler,
};
