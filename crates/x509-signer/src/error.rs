use std::convert::Infallible;

use crate::signing::HashAlgorithm;

pub type Result<T, E = SignerError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("unsupported digest: {0}")]
    UnsupportedDigest(HashAlgorithm),
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("signing failed: {0}")]
    SigningFailed(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed PKCS#12 archive: {0}")]
    MalformedArchive(String),
    #[error("PKCS#12 has no private key")]
    NoPrivateKey,
    #[error("invalid credential: {0}")]
    InvalidCredential(String),
    #[error("signature verification failed")]
    InvalidSignature,
}

impl SignerError {
    /// Whether repeating the failed operation could succeed.
    ///
    /// Only filesystem reads are worth retrying; a key or archive that was
    /// rejected once will be rejected again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SignerError::Io(_))
    }
}

impl From<Infallible> for SignerError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
