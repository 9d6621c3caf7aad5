//! Fujisaki-Okamoto transform over the one-bit LWE scheme.
//!
//! Every hash is SHA-256 over the canonical comma-separated encoding of an
//! integer vector, read back as 32 byte values:
//!
//! - `Hpk    = H(Flatten(A, t))`, cached in the public key
//! - `Kcand  = H(Hpk ‖ bit)`
//! - `Hc     = H(u ‖ v)`
//! - `K      = H(Kcand ‖ Hc)`, or `H(z ‖ Hc)` when the re-encryption check fails
//!
//! Decapsulation never logs and never reports which key it returned.

use core::fmt::Display;

use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;
use zeroize::Zeroize;

use lwekem_algorithms::{CanonicalHasher, HashFunction, Sha256};
use lwekem_api::SecretBytes;
use lwekem_internal::constant_time::{ct_eq_words, ct_select_bytes};
use lwekem_params::pqc::lwe::{LWE_COINS_SEED_BYTES, LWE_SESSION_KEY_BYTES};
use lwekem_pke::error::validate as pke_validate;
use lwekem_pke::{decrypt, encrypt, keygen, Ciphertext, Coins, LweParams, PublicKey};

use super::keys::{LweCiphertext, LwePublicKey, LweSecretKey, LweSharedSecret};
use super::params::LweKemParams;
use crate::error::{validate, Error, Result};

// Domain separator for the coin-expansion seed
const COINS_DOMAIN: &[u8] = b"lwekem-coins-v1";

/// Where re-encryption takes its randomness from.
#[derive(Clone, Copy)]
pub(crate) enum CoinSource<'a> {
    /// Caller-supplied `(r, e1, e2)`, identical to the encapsulator's
    Explicit(&'a Coins),
    /// Expanded from `Kcand` of the decrypted bit
    Derived,
}

/// Result of decapsulation with the re-encryption verdict kept alongside.
pub(crate) struct Decapsulation {
    pub(crate) key: LweSharedSecret,
    pub(crate) accepted: Choice,
}

/// `H(Encode(Flatten(A, t)))`
pub(crate) fn hash_public_key(pk: &PublicKey) -> Result<Vec<i32>> {
    Ok(CanonicalHasher::new()
        .absorb_matrix_and_vector(pk.matrix(), pk.t())?
        .finalize()?)
}

/// `H(Encode(Hpk ‖ bit))`
fn candidate_key(h_pk: &[i32], bit: u8) -> Result<Vec<i32>> {
    Ok(CanonicalHasher::new()
        .absorb(h_pk)?
        .absorb_scalar(bit)?
        .finalize()?)
}

/// `H(Encode(u ‖ v))`
fn hash_ciphertext(ct: &Ciphertext) -> Result<Vec<i32>> {
    Ok(CanonicalHasher::new()
        .absorb(ct.u())?
        .absorb_scalar(ct.v())?
        .finalize()?)
}

/// `H(Encode(prefix ‖ Hc))` as key bytes
fn session_key<T: Display>(prefix: &[T], h_c: &[i32]) -> Result<[u8; LWE_SESSION_KEY_BYTES]> {
    let mut digest = CanonicalHasher::new()
        .absorb(prefix)?
        .absorb(h_c)?
        .finalize()?;
    let key = digest_bytes(&digest);
    digest.zeroize();
    key
}

fn digest_bytes(values: &[i32]) -> Result<[u8; LWE_SESSION_KEY_BYTES]> {
    if values.len() != LWE_SESSION_KEY_BYTES {
        return Err(Error::Primitive(lwekem_algorithms::Error::Length {
            context: "session key digest",
            expected: LWE_SESSION_KEY_BYTES,
            actual: values.len(),
        }));
    }
    let mut out = [0u8; LWE_SESSION_KEY_BYTES];
    for (o, &v) in out.iter_mut().zip(values) {
        *o = u8::try_from(v).map_err(|_| Error::Primitive(lwekem_algorithms::Error::encoding(
            "session key digest",
            "digest value outside byte range",
        )))?;
    }
    Ok(out)
}

/// Expand `(r, e1, e2)` from `Kcand` through ChaCha20
///
/// Depends only on the public key and the plaintext bit, so the
/// decapsulator can rebuild the encapsulator's coins from `(sk, ct)`.
fn derive_coins(params: &LweParams, k_cand: &[i32]) -> Result<Coins> {
    let mut hasher = Sha256::new();
    hasher.update(COINS_DOMAIN)?;
    for &v in k_cand {
        hasher.update(&v.to_le_bytes())?;
    }
    let mut seed: [u8; LWE_COINS_SEED_BYTES] = *hasher.finalize()?.as_bytes();
    let mut rng = ChaCha20Rng::from_seed(seed);
    seed.zeroize();
    Ok(Coins::sample(params, &mut rng)?)
}

/// Key generation: PKE key pair, rejection seed `z`, cached `Hpk`.
pub(crate) fn kem_keygen<P: LweKemParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(LwePublicKey<P>, LweSecretKey<P>)> {
    let params = P::params()?;
    let (pk, s) = keygen(&params, rng)?;
    let z = SecretBytes::random(rng);
    let h_pk = hash_public_key(&pk)?;

    debug!(algorithm = P::NAME, "LWE KEM key pair ready");

    let public = LwePublicKey {
        inner: pk,
        h_pk,
        _params: core::marker::PhantomData,
    };
    Ok((public.clone(), LweSecretKey { s, z, public }))
}

fn encaps_inner<P: LweKemParams>(
    params: &LweParams,
    pk: &LwePublicKey<P>,
    bit: u8,
    k_cand: &[i32],
    coins: &Coins,
) -> Result<(LweCiphertext<P>, LweSharedSecret)> {
    let ct = encrypt(params, &pk.inner, coins, bit)?;
    let h_c = hash_ciphertext(&ct)?;
    let mut key = session_key(k_cand, &h_c)?;
    let ss = LweSharedSecret::new(key);
    key.zeroize();
    Ok((LweCiphertext::new(ct), ss))
}

/// Encapsulation under caller-supplied coins.
pub(crate) fn kem_encaps_with_coins<P: LweKemParams>(
    pk: &LwePublicKey<P>,
    bit: u8,
    coins: &Coins,
) -> Result<(LweCiphertext<P>, LweSharedSecret)> {
    pke_validate::plaintext(bit)?;
    let params = P::params()?;
    let mut k_cand = candidate_key(&pk.h_pk, bit)?;
    let out = encaps_inner(&params, pk, bit, &k_cand, coins);
    k_cand.zeroize();
    out
}

/// Encapsulation of a chosen bit with coins derived from `Kcand`.
pub(crate) fn kem_encaps_bit<P: LweKemParams>(
    pk: &LwePublicKey<P>,
    bit: u8,
) -> Result<(LweCiphertext<P>, LweSharedSecret)> {
    pke_validate::plaintext(bit)?;
    let params = P::params()?;
    let mut k_cand = candidate_key(&pk.h_pk, bit)?;
    let coins = derive_coins(&params, &k_cand)?;
    let out = encaps_inner(&params, pk, bit, &k_cand, &coins);
    k_cand.zeroize();
    out
}

/// Encapsulation of a uniformly random bit.
pub(crate) fn kem_encaps<P: LweKemParams, R: RngCore + CryptoRng>(
    pk: &LwePublicKey<P>,
    rng: &mut R,
) -> Result<(LweCiphertext<P>, LweSharedSecret)> {
    let bit = (rng.next_u32() & 1) as u8;
    kem_encaps_bit(pk, bit)
}

/// Decapsulation with implicit rejection.
///
/// Both candidate keys are always computed; the returned one is chosen in
/// constant time from the re-encryption comparison.
pub(crate) fn kem_decaps<P: LweKemParams>(
    sk: &LweSecretKey<P>,
    ct: &LweCiphertext<P>,
    source: CoinSource<'_>,
) -> Result<Decapsulation> {
    let params = P::params()?;
    validate::ciphertext(
        ct.inner.u().len() == params.n(),
        P::NAME,
        "u does not have n entries",
    )?;

    // 1. bit' = Decrypt(u, s, v)
    let bit = decrypt(&params, &sk.s, &ct.inner)?;

    // 2. Kcand' from bit'
    let mut k_cand = candidate_key(&sk.public.h_pk, bit)?;

    // 3. Re-encrypt bit'
    let derived;
    let coins = match source {
        CoinSource::Explicit(coins) => coins,
        CoinSource::Derived => {
            derived = derive_coins(&params, &k_cand)?;
            &derived
        }
    };
    let reencrypted = encrypt(&params, &sk.public.inner, coins, bit)?;

    // 4. (u', v') == (u, v), without early exit
    let accepted = ct_eq_words(reencrypted.u(), ct.inner.u())
        & reencrypted.v().ct_eq(&ct.inner.v());

    // 5. Both keys bound to the received ciphertext
    let h_c = hash_ciphertext(&ct.inner)?;
    let mut k_accept = session_key(&k_cand, &h_c)?;
    let mut k_reject = session_key(sk.z.as_ref(), &h_c)?;
    let key = LweSharedSecret::new(ct_select_bytes(&k_reject, &k_accept, accepted));

    k_cand.zeroize();
    k_accept.zeroize();
    k_reject.zeroize();

    Ok(Decapsulation { key, accepted })
}
