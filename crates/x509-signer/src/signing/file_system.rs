use rand_core::CryptoRngCore;
use x509_certificate::X509Certificate;

use super::algorithm::{HashAlgorithm, SigningAlgorithm};
use super::key::{PrivateKey, PublicKey};
use super::signer::CertificateSigner;
use super::{ecdsa, rsa};
use crate::error::{Result, SignerError};

/// Signer over key material already held in process memory.
#[derive(Debug)]
pub struct FileSystemSigner {
    private_key: PrivateKey,
    certificate: X509Certificate,
    certificate_chain: Vec<X509Certificate>,
}

impl FileSystemSigner {
    pub fn new(
        private_key: PrivateKey,
        certificate: X509Certificate,
        certificate_chain: Vec<X509Certificate>,
    ) -> Self {
        Self {
            private_key,
            certificate,
            certificate_chain,
        }
    }

    pub fn signing_algorithm(&self) -> SigningAlgorithm {
        self.private_key.signing_algorithm()
    }
}

impl CertificateSigner for FileSystemSigner {
    fn public_key(&self) -> PublicKey {
        self.private_key.public_key()
    }

    fn sign(
        &self,
        mut rng: &mut dyn CryptoRngCore,
        data: &[u8],
        hash: HashAlgorithm,
    ) -> Result<Vec<u8>> {
        let hashed = hash.digest(data)?;
        match &self.private_key {
            PrivateKey::EcP256(key) => ecdsa::sign_p256(key, &mut rng, &hashed),
            PrivateKey::EcP384(key) => ecdsa::sign_p384(key, &mut rng, &hashed),
            PrivateKey::EcP521(key) => ecdsa::sign_p521(key, &mut rng, &hashed),
            PrivateKey::Rsa(key) => rsa::sign_pkcs1v15(key, &mut rng, hash, &hashed),
        }
    }

    fn certificate(&self) -> &X509Certificate {
        &self.certificate
    }

    fn certificate_chain(&self) -> &[X509Certificate] {
        &self.certificate_chain
    }

    fn close(&self) {
        tracing::trace!("closing in-memory signer");
    }
}

/// Build a signer from a decoded private key, its certificate and chain.
///
/// `private_key` may be an already-typed RSA or EC key, or a PKCS#8
/// `PrivateKeyInfo` of any algorithm; keys that are neither RSA nor P-256/P-384/P-521
/// fail with [`SignerError::UnsupportedAlgorithm`].
pub fn build_signer_from_key<K>(
    private_key: K,
    certificate: X509Certificate,
    certificate_chain: Vec<X509Certificate>,
) -> Result<(FileSystemSigner, SigningAlgorithm)>
where
    K: TryInto<PrivateKey>,
    SignerError: From<K::Error>,
{
    let private_key = private_key.try_into()?;
    let signing_algorithm = private_key.signing_algorithm();
    tracing::debug!(
        %signing_algorithm,
        chain_len = certificate_chain.len(),
        "built file system signer"
    );
    Ok((
        FileSystemSigner::new(private_key, certificate, certificate_chain),
        signing_algorithm,
    ))
}
