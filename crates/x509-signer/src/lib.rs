pub mod config;
pub mod credentials;
pub mod error;
pub mod signing;

pub use config::CredentialSource;
pub use error::{Result, SignerError};
pub use signing::{
    CertificateSigner, FileSystemSigner, HashAlgorithm, PrivateKey, PublicKey, SigningAlgorithm,
    build_signer_from_key, build_signer_from_pkcs12,
};
