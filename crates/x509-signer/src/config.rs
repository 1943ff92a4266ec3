use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::credentials::{read_certificate, read_certificate_chain, read_private_key};
use crate::error::Result;
use crate::signing::{
    FileSystemSigner, SigningAlgorithm, build_signer_from_key, build_signer_from_pkcs12,
};

/// Where a signer's key and certificates come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum CredentialSource {
    /// A PKCS#12 archive protected by the empty password.
    Pkcs12 { path: PathBuf },
    /// PEM files: a leaf certificate, a PKCS#8 private key and an optional chain bundle.
    Pem {
        certificate: PathBuf,
        private_key: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        certificate_chain: Option<PathBuf>,
    },
}

impl CredentialSource {
    pub fn build_signer(&self) -> Result<(FileSystemSigner, SigningAlgorithm)> {
        match self {
            CredentialSource::Pkcs12 { path } => build_signer_from_pkcs12(path),
            CredentialSource::Pem {
                certificate,
                private_key,
                certificate_chain,
            } => {
                let certificate = read_certificate(certificate)?;
                let private_key = read_private_key(private_key)?;
                let certificate_chain = match certificate_chain {
                    Some(path) => read_certificate_chain(path)?,
                    None => Vec::new(),
                };
                build_signer_from_key(private_key, certificate, certificate_chain)
            }
        }
    }
}
