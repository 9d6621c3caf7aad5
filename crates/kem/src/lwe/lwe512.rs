//! LWE KEM with `n = m = 512`, `q = 66536`.

use super::kem::LweKem;
use super::params::Lwe512ParamsImpl;

/// LWE-KEM-512, implementing `api::Kem`.
pub type Lwe512 = LweKem<Lwe512ParamsImpl>;
