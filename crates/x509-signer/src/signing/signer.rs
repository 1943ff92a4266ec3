use rand_core::CryptoRngCore;
use x509_certificate::X509Certificate;

use super::algorithm::HashAlgorithm;
use super::key::PublicKey;
use crate::error::Result;

/// Signs request data on behalf of an X.509 certificate holder.
///
/// Implementations are sync and immutable once built, so one signer can be
/// shared across threads. Hardware-backed implementations should still
/// honor `close` as the point where their key handle is released.
pub trait CertificateSigner: Send + Sync {
    /// Public key matching the private key used by `sign`.
    fn public_key(&self) -> PublicKey;

    /// Hash `data` with `hash` and sign the result.
    ///
    /// RSA keys produce PKCS#1 v1.5 signatures, EC keys ASN.1 DER ECDSA
    /// signatures. Hashes other than SHA-256/384/512 are rejected.
    fn sign(&self, rng: &mut dyn CryptoRngCore, data: &[u8], hash: HashAlgorithm) -> Result<Vec<u8>>;

    /// Leaf certificate presented alongside signatures.
    fn certificate(&self) -> &X509Certificate;

    /// Intermediate certificates, in the order they were supplied.
    fn certificate_chain(&self) -> &[X509Certificate];

    /// Release external resources. Safe to call more than once.
    fn close(&self);
}
