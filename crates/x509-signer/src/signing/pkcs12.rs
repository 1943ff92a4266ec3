use std::fs;
use std::path::Path;

use p12::PFX;
use pkcs8::PrivateKeyInfo;
use x509_certificate::X509Certificate;

use super::algorithm::SigningAlgorithm;
use super::file_system::FileSystemSigner;
use super::key::PrivateKey;
use crate::error::{Result, SignerError};

/// Only unencrypted archives, or ones protected by the empty password, are
/// accepted.
const PKCS12_PASSWORD: &str = "";

/// Build a signer from the PKCS#12 archive at `path`.
///
/// The leaf certificate is the one matching the archive's private key. Every
/// certificate bag must still decode as DER X.509, otherwise the archive is
/// reported as [`SignerError::MalformedArchive`]. Certificates other than the
/// leaf are not kept, so the returned signer always has an empty chain.
pub fn build_signer_from_pkcs12(
    path: impl AsRef<Path>,
) -> Result<(FileSystemSigner, SigningAlgorithm)> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let (private_key, certificate) = decode(&bytes)?;
    let signing_algorithm = private_key.signing_algorithm();
    tracing::debug!(
        path = %path.display(),
        %signing_algorithm,
        "built PKCS#12 signer"
    );
    Ok((
        FileSystemSigner::new(private_key, certificate, Vec::new()),
        signing_algorithm,
    ))
}

fn decode(bytes: &[u8]) -> Result<(PrivateKey, X509Certificate)> {
    let pfx = PFX::parse(bytes)
        .map_err(|e| SignerError::MalformedArchive(format!("parsing PKCS#12: {e:?}")))?;

    if !pfx.verify_mac(PKCS12_PASSWORD) {
        return Err(SignerError::MalformedArchive(
            "MAC verification failed with the empty password".into(),
        ));
    }

    let keys = pfx
        .key_bags(PKCS12_PASSWORD)
        .map_err(|e| SignerError::MalformedArchive(format!("extracting keys: {e:?}")))?;
    let certs = pfx
        .cert_x509_bags(PKCS12_PASSWORD)
        .map_err(|e| SignerError::MalformedArchive(format!("extracting certificates: {e:?}")))?;

    let key_der = keys.first().ok_or(SignerError::NoPrivateKey)?;
    let key_info = PrivateKeyInfo::try_from(key_der.as_slice())
        .map_err(|e| SignerError::MalformedArchive(format!("private key bag: {e}")))?;
    let private_key = PrivateKey::try_from(key_info)?;

    let certificate = select_leaf(&private_key, &certs)?;
    Ok((private_key, certificate))
}

/// Pick the certificate carrying `private_key`'s public key, else the first one.
fn select_leaf(private_key: &PrivateKey, certs: &[Vec<u8>]) -> Result<X509Certificate> {
    let certificates = certs
        .iter()
        .map(|der| X509Certificate::from_der(der))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SignerError::MalformedArchive(format!("certificate bag: {e}")))?;

    let subject_public_key = private_key.public_key().subject_public_key()?;
    let leaf = certificates
        .iter()
        .position(|cert| cert.public_key_data().as_ref() == subject_public_key.as_slice())
        .unwrap_or(0);

    certificates
        .into_iter()
        .nth(leaf)
        .ok_or_else(|| SignerError::MalformedArchive("PKCS#12 has no certificate".into()))
}
