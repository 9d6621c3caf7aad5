//! `LweKem` and its `api::Kem` implementation.

use core::marker::PhantomData;

use lwekem_api::error::{Error as CoreError, Result as ApiResult};
use lwekem_api::Kem as KemTrait;
use lwekem_pke::Coins;
use rand::{CryptoRng, RngCore};

use super::ind_cca::{
    kem_decaps, kem_encaps, kem_encaps_bit, kem_encaps_with_coins, kem_keygen, CoinSource,
};
use super::keys::{LweCiphertext, LwePublicKey, LweSecretKey, LweSharedSecret};
use super::params::LweKemParams;
use crate::error::Result;

/// LWE key encapsulation for the parameter profile `P`.
///
/// The trait methods derive the encryption coins from the plaintext bit, so
/// decapsulation needs only the secret key and the ciphertext. The
/// `*_with_coins` methods take `(r, e1, e2)` from the caller on both sides.
pub struct LweKem<P: LweKemParams> {
    _params: PhantomData<P>,
}

impl<P: LweKemParams> LweKem<P> {
    /// Encapsulate `bit` under caller-supplied coins.
    pub fn encapsulate_with_coins(
        public_key: &LwePublicKey<P>,
        bit: u8,
        coins: &Coins,
    ) -> Result<(LweCiphertext<P>, LweSharedSecret)> {
        kem_encaps_with_coins(public_key, bit, coins)
    }

    /// Decapsulate, re-encrypting under the same caller-supplied coins.
    ///
    /// Always returns a key; on a failed re-encryption check it is the
    /// pseudorandom rejection key.
    pub fn decapsulate_with_coins(
        secret_key: &LweSecretKey<P>,
        ciphertext: &LweCiphertext<P>,
        coins: &Coins,
    ) -> Result<LweSharedSecret> {
        Ok(kem_decaps(secret_key, ciphertext, CoinSource::Explicit(coins))?.key)
    }

    /// Encapsulate a chosen bit with derived coins.
    ///
    /// Deterministic: one public key and one bit always give the same
    /// ciphertext.
    pub fn encapsulate_bit(
        public_key: &LwePublicKey<P>,
        bit: u8,
    ) -> Result<(LweCiphertext<P>, LweSharedSecret)> {
        kem_encaps_bit(public_key, bit)
    }
}

impl<P: LweKemParams> KemTrait for LweKem<P> {
    type PublicKey = LwePublicKey<P>;
    type SecretKey = LweSecretKey<P>;
    type SharedSecret = LweSharedSecret;
    type Ciphertext = LweCiphertext<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        kem_keygen::<P, R>(rng).map_err(CoreError::from)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        kem_encaps(public_key, rng).map_err(CoreError::from)
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        kem_decaps(secret_key, ciphertext, CoinSource::Derived)
            .map(|d| d.key)
            .map_err(CoreError::from)
    }
}
