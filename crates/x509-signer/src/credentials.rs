//! Loading PEM credentials from disk for [`build_signer_from_key`].
//!
//! [`build_signer_from_key`]: crate::signing::build_signer_from_key

use std::fs;
use std::path::Path;

use x509_certificate::X509Certificate;

use crate::error::{Result, SignerError};
use crate::signing::PrivateKey;

pub fn read_certificate(path: impl AsRef<Path>) -> Result<X509Certificate> {
    let pem = fs::read(path)?;
    X509Certificate::from_pem(pem)
        .map_err(|e| SignerError::InvalidCredential(format!("certificate PEM: {e}")))
}

/// Read every certificate in a PEM bundle, keeping file order.
pub fn read_certificate_chain(path: impl AsRef<Path>) -> Result<Vec<X509Certificate>> {
    let pem = fs::read(path)?;
    X509Certificate::from_pem_multiple(pem)
        .map_err(|e| SignerError::InvalidCredential(format!("certificate chain PEM: {e}")))
}

/// Read an unencrypted PKCS#8 private key.
pub fn read_private_key(path: impl AsRef<Path>) -> Result<PrivateKey> {
    let pem = fs::read_to_string(path)?;
    PrivateKey::from_pkcs8_pem(&pem)
}
