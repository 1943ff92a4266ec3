use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::{Result, SignerError};

/// Signing algorithm identifier embedded in SigV4 X.509 credential headers.
///
/// Fixed once a signer is built from its key type; it is never derived
/// from the hash selector passed to an individual `sign` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    #[serde(rename = "aws4-x509-rsa-sha256")]
    RsaSha256,
    #[serde(rename = "aws4-x509-ecdsa-sha256")]
    EcdsaSha256,
}

impl SigningAlgorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SigningAlgorithm::RsaSha256 => "aws4-x509-rsa-sha256",
            SigningAlgorithm::EcdsaSha256 => "aws4-x509-ecdsa-sha256",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hash function applied to the data before signing.
///
/// Only SHA-256, SHA-384 and SHA-512 are accepted by signers; the other
/// variants exist so callers can name them and get a typed rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Hash `data`, failing with `UnsupportedDigest` outside the SHA-2 trio.
    pub fn digest(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            HashAlgorithm::Sha256 => Ok(Sha256::digest(data).to_vec()),
            HashAlgorithm::Sha384 => Ok(Sha384::digest(data).to_vec()),
            HashAlgorithm::Sha512 => Ok(Sha512::digest(data).to_vec()),
            other => Err(SignerError::UnsupportedDigest(*other)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        };
        f.write_str(name)
    }
}
