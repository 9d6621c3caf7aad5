//! Byte layouts for LWE KEM keys and ciphertexts.
//!
//! All words are little-endian `u32`/`i32`. Each layout starts with the
//! dimensions it was produced under so a key for one profile is rejected by
//! another.
//!
//! - public key: `n ‖ m ‖ q ‖ A (m·n words, row-major) ‖ t (m words)`
//! - secret key: `n ‖ m ‖ q ‖ s (n words) ‖ z (32 bytes) ‖ public key`
//! - ciphertext: `n ‖ u (n words) ‖ v`
//! - shared secret: 32 raw bytes

use core::marker::PhantomData;

use lwekem_algorithms::Matrix;
use lwekem_api::error::{Error as CoreError, Result as ApiResult};
use lwekem_api::{SecretBytes, Serialize, SerializeSecret};
use lwekem_internal::endian::{get_i32_le, get_u32_le, put_i32_le, put_u32_le};
use lwekem_params::pqc::lwe::{LWE_REJECTION_SEED_BYTES, LWE_SESSION_KEY_BYTES};
use lwekem_pke::{Ciphertext, LweParams, PublicKey, SecretKey};
use zeroize::Zeroizing;

use super::ind_cca::hash_public_key;
use super::keys::{LweCiphertext, LwePublicKey, LweSecretKey, LweSharedSecret};
use super::params::LweKemParams;
use crate::error::{validate, Error, Result};

const WORD: usize = 4;

/// Sequential reader over a byte slice
struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
    context: &'static str,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8], context: &'static str) -> Self {
        Self {
            bytes,
            offset: 0,
            context,
        }
    }

    fn u32(&mut self) -> Result<u32> {
        let w = get_u32_le(self.bytes, self.offset).ok_or(Error::Serialization {
            context: self.context,
            details: "input truncated",
        })?;
        self.offset += WORD;
        Ok(w)
    }

    fn i32(&mut self) -> Result<i32> {
        let w = get_i32_le(self.bytes, self.offset).ok_or(Error::Serialization {
            context: self.context,
            details: "input truncated",
        })?;
        self.offset += WORD;
        Ok(w)
    }

    fn u32_vec(&mut self, len: usize) -> Result<Vec<u32>> {
        (0..len).map(|_| self.u32()).collect()
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self.offset.checked_add(len).ok_or(Error::Serialization {
            context: self.context,
            details: "length overflow",
        })?;
        let out = self.bytes.get(self.offset..end).ok_or(Error::Serialization {
            context: self.context,
            details: "input truncated",
        })?;
        self.offset = end;
        Ok(out)
    }

    fn rest(&mut self) -> &'a [u8] {
        let out = &self.bytes[self.offset.min(self.bytes.len())..];
        self.offset = self.bytes.len();
        out
    }

    fn finish(&self) -> Result<()> {
        validate::serialization(
            self.offset == self.bytes.len(),
            self.context,
            "trailing bytes",
        )
    }
}

fn check_header(
    reader: &mut Reader<'_>,
    params: &LweParams,
    key_type: &'static str,
) -> Result<()> {
    let n = reader.u32()? as usize;
    let m = reader.u32()? as usize;
    let q = reader.u32()?;
    validate::key(
        n == params.n() && m == params.m() && q == params.q(),
        key_type,
        "dimensions or modulus do not match the parameter set",
    )
}

fn put_header(out: &mut Vec<u8>, params: &LweParams) {
    put_u32_le(out, params.n() as u32);
    put_u32_le(out, params.m() as u32);
    put_u32_le(out, params.q());
}

pub(crate) fn pack_pk<P: LweKemParams>(pk: &LwePublicKey<P>) -> Result<Vec<u8>> {
    let params = P::params()?;
    let matrix = pk.inner.matrix().as_slice();
    let mut out = Vec::with_capacity(WORD * (3 + matrix.len() + pk.inner.t().len()));
    put_header(&mut out, &params);
    for &a in matrix.iter().chain(pk.inner.t()) {
        put_u32_le(&mut out, a);
    }
    Ok(out)
}

pub(crate) fn unpack_pk<P: LweKemParams>(bytes: &[u8]) -> Result<LwePublicKey<P>> {
    let params = P::params()?;
    let mut reader = Reader::new(bytes, "LwePublicKey::from_bytes");
    check_header(&mut reader, &params, "public")?;

    let expected = WORD * (3 + params.m() * params.n() + params.m());
    validate::serialization(bytes.len() == expected, reader.context, "wrong length")?;

    let data = reader.u32_vec(params.m() * params.n())?;
    let t = reader.u32_vec(params.m())?;
    reader.finish()?;

    let matrix = Matrix::from_row_major(params.m(), params.n(), data)?;
    let inner = PublicKey::new(matrix, t)?;
    inner
        .check_entries(&params)
        .map_err(|_| Error::InvalidKey {
            key_type: "public",
            reason: "entry not reduced modulo q",
        })?;

    let h_pk = hash_public_key(&inner)?;
    Ok(LwePublicKey {
        inner,
        h_pk,
        _params: PhantomData,
    })
}

pub(crate) fn pack_sk<P: LweKemParams>(sk: &LweSecretKey<P>) -> Result<Zeroizing<Vec<u8>>> {
    let params = P::params()?;
    let pk = pack_pk(&sk.public)?;
    let mut out = Zeroizing::new(Vec::with_capacity(
        WORD * (3 + params.n()) + LWE_REJECTION_SEED_BYTES + pk.len(),
    ));
    put_header(&mut out, &params);
    for &s in sk.s.s() {
        put_i32_le(&mut out, s);
    }
    out.extend_from_slice(sk.z.as_ref());
    out.extend_from_slice(&pk);
    Ok(out)
}

pub(crate) fn unpack_sk<P: LweKemParams>(bytes: &[u8]) -> Result<LweSecretKey<P>> {
    let params = P::params()?;
    let mut reader = Reader::new(bytes, "LweSecretKey::from_bytes");
    check_header(&mut reader, &params, "secret")?;

    let eta = params.eta() as i32;
    let mut s = Zeroizing::new(Vec::with_capacity(params.n()));
    for _ in 0..params.n() {
        let v = reader.i32()?;
        validate::key((-eta..=eta).contains(&v), "secret", "entry of s out of range")?;
        s.push(v);
    }
    let z = SecretBytes::from_slice(reader.take(LWE_REJECTION_SEED_BYTES)?).map_err(|_| {
        Error::Serialization {
            context: "LweSecretKey::from_bytes",
            details: "rejection seed truncated",
        }
    })?;
    let public = unpack_pk::<P>(reader.rest())?;

    Ok(LweSecretKey {
        s: SecretKey::new(s.to_vec()),
        z,
        public,
    })
}

pub(crate) fn pack_ciphertext<P: LweKemParams>(ct: &LweCiphertext<P>) -> Vec<u8> {
    let u = ct.inner.u();
    let mut out = Vec::with_capacity(WORD * (2 + u.len()));
    put_u32_le(&mut out, u.len() as u32);
    for &x in u {
        put_u32_le(&mut out, x);
    }
    put_u32_le(&mut out, ct.inner.v());
    out
}

pub(crate) fn unpack_ciphertext<P: LweKemParams>(bytes: &[u8]) -> Result<LweCiphertext<P>> {
    let params = P::params()?;
    let mut reader = Reader::new(bytes, "LweCiphertext::from_bytes");
    let n = reader.u32()? as usize;
    validate::ciphertext(n == params.n(), P::NAME, "u does not have n entries")?;
    validate::serialization(
        bytes.len() == WORD * (2 + params.n()),
        reader.context,
        "wrong length",
    )?;

    let u = reader.u32_vec(n)?;
    let v = reader.u32()?;
    reader.finish()?;

    let q = params.q();
    validate::ciphertext(
        v < q && u.iter().all(|&x| x < q),
        P::NAME,
        "entry not reduced modulo q",
    )?;
    Ok(LweCiphertext::new(Ciphertext::new(u, v)))
}

/// `to_bytes` cannot fail for a key built by this crate: the only error
/// source is `P::params()`, which succeeds for every profile that can
/// produce an `LwePublicKey<P>`. The empty buffer on that path is never
/// observed.
impl<P: LweKemParams> Serialize for LwePublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        unpack_pk::<P>(bytes).map_err(CoreError::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        pack_pk(self).unwrap_or_default()
    }
}

/// `to_bytes_zeroizing` cannot fail for a key built by this crate, for the
/// same reason as the public key. The empty buffer on the error path is
/// never observed.
impl<P: LweKemParams> SerializeSecret for LweSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        unpack_sk::<P>(bytes).map_err(CoreError::from)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        pack_sk(self).unwrap_or_else(|_| Zeroizing::new(Vec::new()))
    }
}

impl<P: LweKemParams> Serialize for LweCiphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        unpack_ciphertext::<P>(bytes).map_err(CoreError::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        pack_ciphertext(self)
    }
}

impl SerializeSecret for LweSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(LweSharedSecret(SecretBytes::<LWE_SESSION_KEY_BYTES>::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}
