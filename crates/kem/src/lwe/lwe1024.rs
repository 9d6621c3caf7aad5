//! LWE KEM with `n = m = 1024`, `q = 3329`.

use super::kem::LweKem;
use super::params::Lwe1024ParamsImpl;

/// LWE-KEM-1024, implementing `api::Kem`.
pub type Lwe1024 = LweKem<Lwe1024ParamsImpl>;
