mod algorithm;
mod ecdsa;
mod file_system;
mod key;
mod pkcs12;
mod rsa;
mod signer;

pub use algorithm::{HashAlgorithm, SigningAlgorithm};
pub use file_system::{FileSystemSigner, build_signer_from_key};
pub use key::{PrivateKey, PublicKey};
pub use pkcs12::build_signer_from_pkcs12;
pub use signer::CertificateSigner;
