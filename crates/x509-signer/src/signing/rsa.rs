use rand_core::CryptoRngCore;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Sha256, Sha384, Sha512};

use super::algorithm::HashAlgorithm;
use crate::error::{Result, SignerError};

/// PKCS#1 v1.5 scheme whose DigestInfo carries the OID of `hash`.
pub(crate) fn pkcs1v15_scheme(hash: HashAlgorithm) -> Result<Pkcs1v15Sign> {
    match hash {
        HashAlgorithm::Sha256 => Ok(Pkcs1v15Sign::new::<Sha256>()),
        HashAlgorithm::Sha384 => Ok(Pkcs1v15Sign::new::<Sha384>()),
        HashAlgorithm::Sha512 => Ok(Pkcs1v15Sign::new::<Sha512>()),
        other => Err(SignerError::UnsupportedDigest(other)),
    }
}

/// RSA PKCS#1 v1.5 signature over an already-computed `hashed` value.
///
/// `rng` only blinds the private-key operation; the signature itself is
/// deterministic.
pub(crate) fn sign_pkcs1v15<R: CryptoRngCore>(
    key: &RsaPrivateKey,
    rng: &mut R,
    hash: HashAlgorithm,
    hashed: &[u8],
) -> Result<Vec<u8>> {
    key.sign_with_rng(rng, pkcs1v15_scheme(hash)?, hashed)
        .map_err(|e| SignerError::SigningFailed(format!("RSA PKCS#1 v1.5 with {hash}: {e}")))
}
