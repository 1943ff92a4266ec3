use p256::ecdsa::signature::hazmat::RandomizedPrehashSigner;
use rand_core::CryptoRngCore;

use crate::error::{Result, SignerError};

/// ASN.1 DER ECDSA signature over P-256 for an already-computed hash.
///
/// Nonces follow RFC 6979 with `rng` mixed in as added entropy. Hashes longer
/// than the curve order are truncated to its bit length.
pub(crate) fn sign_p256<R: CryptoRngCore>(
    key: &p256::ecdsa::SigningKey,
    rng: &mut R,
    hashed: &[u8],
) -> Result<Vec<u8>> {
    let signature: p256::ecdsa::Signature = key
        .sign_prehash_with_rng(rng, hashed)
        .map_err(|e| SignerError::SigningFailed(format!("P-256 ECDSA: {e}")))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

/// ASN.1 DER ECDSA signature over P-384 for an already-computed hash.
pub(crate) fn sign_p384<R: CryptoRngCore>(
    key: &p384::ecdsa::SigningKey,
    rng: &mut R,
    hashed: &[u8],
) -> Result<Vec<u8>> {
    let signature: p384::ecdsa::Signature = key
        .sign_prehash_with_rng(rng, hashed)
        .map_err(|e| SignerError::SigningFailed(format!("P-384 ECDSA: {e}")))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

const P521_FIELD_BYTES: usize = 66;

/// Left-pad `hashed` to the P-521 field size.
///
/// The prehash is read as a big-endian integer, so leading zeros leave its
/// value unchanged. Without them a SHA-256 hash is shorter than the half-field
/// minimum the prehash signer enforces.
pub(crate) fn p521_prehash(hashed: &[u8]) -> Vec<u8> {
    if hashed.len() >= P521_FIELD_BYTES {
        return hashed.to_vec();
    }
    let mut padded = vec![0u8; P521_FIELD_BYTES - hashed.len()];
    padded.extend_from_slice(hashed);
    padded
}

/// ASN.1 DER ECDSA signature over P-521 for an already-computed hash.
pub(crate) fn sign_p521<R: CryptoRngCore>(
    key: &p521::ecdsa::SigningKey,
    rng: &mut R,
    hashed: &[u8],
) -> Result<Vec<u8>> {
    let signature: p521::ecdsa::Signature = key
        .sign_prehash_with_rng(rng, &p521_prehash(hashed))
        .map_err(|e| SignerError::SigningFailed(format!("P-521 ECDSA: {e}")))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::HashAlgorithm;
    use p256::ecdsa::signature::hazmat::PrehashVerifier;
    use pkcs8::DecodePrivateKey;
    use rand_chacha::ChaCha20Rng;
    use rand_chacha::rand_core::SeedableRng;

    fn p256_key() -> p256::ecdsa::SigningKey {
        p256::ecdsa::SigningKey::from_pkcs8_pem(include_str!("../../tests/fixtures/ec_p256_key.pem"))
            .unwrap()
    }

    fn p384_key() -> p384::ecdsa::SigningKey {
        p384::ecdsa::SigningKey::from_pkcs8_pem(include_str!("../../tests/fixtures/ec_p384_key.pem"))
            .unwrap()
    }

    #[test]
    fn p256_signature_is_der_sequence() {
        let hashed = HashAlgorithm::Sha256.digest(b"data").unwrap();
        let sig = sign_p256(&p256_key(), &mut ChaCha20Rng::from_seed([1u8; 32]), &hashed).unwrap();
        assert_eq!(sig[0], 0x30, "DER signature should start with SEQUENCE");
        assert!(sig.len() <= 72, "P-256 DER signature is at most 72 bytes, got {}", sig.len());
    }

    #[test]
    fn p256_accepts_longer_hashes() {
        let key = p256_key();
        let verifying_key = p256::ecdsa::VerifyingKey::from(&key);
        let hashed = HashAlgorithm::Sha512.digest(b"data").unwrap();
        let sig = sign_p256(&key, &mut ChaCha20Rng::from_seed([2u8; 32]), &hashed).unwrap();

        let signature = p256::ecdsa::Signature::from_der(&sig).unwrap();
        verifying_key.verify_prehash(&hashed, &signature).unwrap();
    }

    #[test]
    fn p384_signature_verifies() {
        let key = p384_key();
        let verifying_key = p384::ecdsa::VerifyingKey::from(&key);
        let hashed = HashAlgorithm::Sha256.digest(b"verify me").unwrap();
        let sig = sign_p384(&key, &mut ChaCha20Rng::from_seed([3u8; 32]), &hashed).unwrap();

        assert!(sig.len() <= 104);
        let signature = p384::ecdsa::Signature::from_der(&sig).unwrap();
        verifying_key.verify_prehash(&hashed, &signature).unwrap();
    }

    #[test]
    fn randomness_changes_signature() {
        let key = p256_key();
        let hashed = HashAlgorithm::Sha256.digest(b"hello").unwrap();
        let sig1 = sign_p256(&key, &mut ChaCha20Rng::from_seed([4u8; 32]), &hashed).unwrap();
        let sig2 = sign_p256(&key, &mut ChaCha20Rng::from_seed([5u8; 32]), &hashed).unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn p521_signs_every_supported_hash() {
        let info_pem = include_str!("../../tests/fixtures/ec_p521_key.pem");
        let secret = p521::SecretKey::from_pkcs8_pem(info_pem).unwrap();
        let key = p521::ecdsa::SigningKey::from_bytes(&secret.to_bytes()).unwrap();
        let verifying_key = p521::ecdsa::VerifyingKey::from(&key);

        let mut rng = ChaCha20Rng::from_seed([8u8; 32]);
        for hash in [HashAlgorithm::Sha256, HashAlgorithm::Sha384, HashAlgorithm::Sha512] {
            let hashed = hash.digest(b"test").unwrap();
            let sig = sign_p521(&key, &mut rng, &hashed).unwrap();
            assert_eq!(sig[0], 0x30);
            assert!(sig.len() <= 139, "P-521 DER signature is at most 139 bytes");

            let signature = p521::ecdsa::Signature::from_der(&sig).unwrap();
            verifying_key
                .verify_prehash(&p521_prehash(&hashed), &signature)
                .unwrap();
        }
    }

    #[test]
    fn p521_prehash_keeps_integer_value() {
        let hashed = [0xabu8; 32];
        let padded = p521_prehash(&hashed);
        assert_eq!(padded.len(), 66);
        assert!(padded[..34].iter().all(|&b| b == 0));
        assert_eq!(&padded[34..], &hashed);
        assert_eq!(p521_prehash(&[1u8; 70]).len(), 70);
    }

    #[test]
    fn short_prehash_is_signing_failure() {
        match sign_p384(&p384_key(), &mut ChaCha20Rng::from_seed([6u8; 32]), &[0u8; 8]) {
            Err(SignerError::SigningFailed(_)) => {}
            other => panic!("expected SigningFailed, got {other:?}"),
        }
    }
}
