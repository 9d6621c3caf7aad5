//! Key, ciphertext and session-key types for the LWE KEM.

use core::fmt;
use core::marker::PhantomData;

use lwekem_api::SecretBytes;
use lwekem_params::pqc::lwe::{LWE_REJECTION_SEED_BYTES, LWE_SESSION_KEY_BYTES};
use lwekem_pke::{Ciphertext, PublicKey, SecretKey};
use zeroize::Zeroize;

use super::params::LweKemParams;

/// Public key `(A, t)` together with its cached hash `H(Encode(Flatten(A, t)))`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LwePublicKey<P: LweKemParams> {
    pub(crate) inner: PublicKey,
    pub(crate) h_pk: Vec<i32>,
    pub(crate) _params: PhantomData<P>,
}

impl<P: LweKemParams> LwePublicKey<P> {
    /// The underlying PKE public key.
    pub fn pke(&self) -> &PublicKey {
        &self.inner
    }

    /// The 32 byte values of the public-key hash.
    pub fn hash(&self) -> &[i32] {
        &self.h_pk
    }
}

/// Secret key: `s`, the implicit-rejection seed `z`, and a copy of the public key.
#[derive(Clone)]
pub struct LweSecretKey<P: LweKemParams> {
    pub(crate) s: SecretKey,
    pub(crate) z: SecretBytes<LWE_REJECTION_SEED_BYTES>,
    pub(crate) public: LwePublicKey<P>,
}

impl<P: LweKemParams> LweSecretKey<P> {
    /// The underlying PKE secret key.
    pub fn pke(&self) -> &SecretKey {
        &self.s
    }

    /// The public key this secret key was generated with.
    pub fn public_key(&self) -> &LwePublicKey<P> {
        &self.public
    }
}

impl<P: LweKemParams> Zeroize for LweSecretKey<P> {
    fn zeroize(&mut self) {
        self.s.zeroize();
        self.z.zeroize();
    }
}

impl<P: LweKemParams> fmt::Debug for LweSecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LweSecretKey")
            .field("algorithm", &P::NAME)
            .finish_non_exhaustive()
    }
}

/// Ciphertext `(u, v)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LweCiphertext<P: LweKemParams> {
    pub(crate) inner: Ciphertext,
    pub(crate) _params: PhantomData<P>,
}

impl<P: LweKemParams> LweCiphertext<P> {
    pub(crate) fn new(inner: Ciphertext) -> Self {
        Self {
            inner,
            _params: PhantomData,
        }
    }

    /// The underlying PKE ciphertext.
    pub fn pke(&self) -> &Ciphertext {
        &self.inner
    }

    /// Mutable access to the PKE ciphertext, for fault-injection tests.
    #[doc(hidden)]
    pub fn pke_mut(&mut self) -> &mut Ciphertext {
        &mut self.inner
    }
}

/// 256-bit session key. Compared in constant time; never printed.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct LweSharedSecret(pub(crate) SecretBytes<LWE_SESSION_KEY_BYTES>);

impl LweSharedSecret {
    pub(crate) fn new(bytes: [u8; LWE_SESSION_KEY_BYTES]) -> Self {
        Self(SecretBytes::new(bytes))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl AsRef<[u8]> for LweSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl fmt::Debug for LweSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LweSharedSecret([REDACTED])")
    }
}
