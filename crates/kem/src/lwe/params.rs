//! LWE KEM parameter definitions.

use core::fmt::Debug;

use lwekem_params::pqc::lwe::{LweParamSet, LWE_1024, LWE_512};
use lwekem_pke::{LweParams, Result as PkeResult};

/// Size of the session key in bytes.
pub use lwekem_params::pqc::lwe::LWE_SESSION_KEY_BYTES;

/// Trait binding a parameter profile to the `LweKem` type.
pub trait LweKemParams: Clone + Copy + Debug + PartialEq + Eq + Send + Sync + 'static {
    /// Algorithm name string.
    const NAME: &'static str;
    /// Compile-time profile.
    const PROFILE: LweParamSet;

    /// Runtime parameters for the PKE.
    ///
    /// Override to change the ephemeral noise distribution.
    fn params() -> PkeResult<LweParams> {
        LweParams::from_profile(&Self::PROFILE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lwe512ParamsImpl;
impl LweKemParams for Lwe512ParamsImpl {
    const NAME: &'static str = "LWE-KEM-512";
    const PROFILE: LweParamSet = LWE_512;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lwe1024ParamsImpl;
impl LweKemParams for Lwe1024ParamsImpl {
    const NAME: &'static str = "LWE-KEM-1024";
    const PROFILE: LweParamSet = LWE_1024;
}
