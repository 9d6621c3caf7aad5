//! Key generation, encryption and decryption

use rand::{CryptoRng, RngCore};
use tracing::debug;

use lwekem_algorithms::sample_matrix;

use super::params::LweParams;
use super::types::{Ciphertext, Coins, PublicKey, SecretKey};
use crate::error::{validate, Result};

/// Ring encoding of a plaintext bit: `0 -> 0`, `1 -> floor(q/2)`
pub fn encode_bit(params: &LweParams, bit: u8) -> Result<u32> {
    validate::plaintext(bit)?;
    Ok(bit as u32 * (params.q() / 2))
}

/// Nearest codeword of `mu` among `{0, q/2}` under wraparound distance
fn decode(params: &LweParams, mu: u32) -> u8 {
    let bound = params.bound();
    if mu <= bound || mu > params.q() - bound {
        0
    } else {
        1
    }
}

/// Generate `(A, t)` and `s`
///
/// Parameters are validated before any randomness is drawn.
pub fn keygen<R: RngCore + CryptoRng>(
    params: &LweParams,
    rng: &mut R,
) -> Result<(PublicKey, SecretKey)> {
    params.validate()?;
    let zq = params.zq()?;

    debug!(
        n = params.n(),
        m = params.m(),
        q = params.q(),
        stddev = params.stddev(),
        eta = params.eta(),
        "generating LWE key pair"
    );

    let matrix = sample_matrix(rng, &zq, params.m(), params.n())?;
    let secret = SecretKey::new(params.secret_noise().sample_vec(rng, params.n())?);
    let mut e = params.error_noise().sample_vec(rng, params.m())?;

    let t = zq.add_small(&matrix.mul_vec(&zq, &secret.s)?, &e)?;
    zeroize::Zeroize::zeroize(&mut e);

    Ok((PublicKey { matrix, t }, secret))
}

/// Encrypt one bit under explicit coins
///
/// `u = Aᵀ·r + e1 mod q`, `v = ⟨t, r⟩ + e2 + Encode(bit) mod q`. No
/// randomness is drawn: equal inputs give equal ciphertexts.
pub fn encrypt(
    params: &LweParams,
    public_key: &PublicKey,
    coins: &Coins,
    bit: u8,
) -> Result<Ciphertext> {
    validate::plaintext(bit)?;
    public_key.check(params)?;
    coins.check(params)?;
    let zq = params.zq()?;

    let u = zq.add_small(
        &public_key.matrix.transpose_mul_vec(&zq, &coins.r)?,
        &coins.e1,
    )?;

    let tr = zq.inner_product(&public_key.t, &coins.r)?;
    let v = zq.add(
        zq.add(tr, zq.lift(coins.e2)),
        encode_bit(params, bit)?,
    );

    Ok(Ciphertext { u, v })
}

/// `μ = v − ⟨s, u⟩ mod q`, with ciphertext entries reduced first
fn phase(params: &LweParams, secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<u32> {
    validate::dimension("ciphertext u", ciphertext.u.len(), params.n())?;
    validate::dimension("secret key s", secret_key.s.len(), params.n())?;
    let zq = params.zq()?;

    let q = params.q();
    let u: Vec<u32> = ciphertext.u.iter().map(|&x| x % q).collect();
    let su = zq.inner_product(&u, &secret_key.s)?;
    Ok(zq.sub(ciphertext.v % q, su))
}

/// Recover the bit: 0 when `μ` lies within `q/4` of zero, else 1
pub fn decrypt(params: &LweParams, secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<u8> {
    Ok(decode(params, phase(params, secret_key, ciphertext)?))
}

/// Centered distance between `μ` and the codeword of `bit`
///
/// Decryption of `bit` succeeds while its magnitude stays below `q/4`.
/// Used to measure noise growth.
pub fn decryption_noise(
    params: &LweParams,
    secret_key: &SecretKey,
    ciphertext: &Ciphertext,
    bit: u8,
) -> Result<i64> {
    let zq = params.zq()?;
    let mu = phase(params, secret_key, ciphertext)?;
    Ok(zq.centered(zq.sub(mu, encode_bit(params, bit)?)))
}
