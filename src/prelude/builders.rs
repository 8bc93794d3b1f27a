//! Builder for password-based envelopes.
//!
//! # Runtime Profiles
//!
//! | Profile | Salt | Budget | Use Case |
//! |---------|------|--------|----------|
//! | `interactive()` | 32 B | 100 ms | Per-request envelopes |
//! | `moderate()` | 32 B | 500 ms | Balanced (default) |
//! | `sensitive()` | 64 B | 2 s | Long-lived, rarely built envelopes |
//!
//! # Example
//!
//! ```rust,no_run
//! use envelope::prelude::*;
//!
//! let bundle = DirectoryBundle::new("certs");
//!
//! let envelope = EnvelopeBuilder::interactive()
//!     .algorithm(KeyWrapAlgorithm::RsaOaepSha256)
//!     .try_build_from_bundle(&bundle, "recipient", b"password")?;
//!
//! let sealed = envelope.encrypt_str("Hello world!")?;
//! # let _ = sealed;
//! # Ok::<(), EnvelopeError>(())
//! ```

use crate::core::bundle::CertificateBundle;
use crate::core::cipher::Aes256Cbc;
use crate::core::envelope::Envelope;
use crate::core::error::EnvelopeResult;
use crate::core::operations::kdf::KdfParams;
use crate::core::operations::pke::KeyWrapAlgorithm;

/// Builder for [`Envelope<Aes256Cbc>`] from a password and a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeBuilder {
    algorithm: KeyWrapAlgorithm,
    params: KdfParams,
}

impl Default for EnvelopeBuilder {
    fn default() -> Self {
        Self::moderate()
    }
}

impl EnvelopeBuilder {
    /// Creates a new builder with default (moderate) parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self::moderate()
    }

    /// Interactive profile: 100 ms derivation budget.
    #[must_use]
    pub const fn interactive() -> Self {
        Self::with_params(KdfParams::interactive())
    }

    /// Moderate profile: 500 ms derivation budget.
    ///
    /// This is the recommended default.
    #[must_use]
    pub const fn moderate() -> Self {
        Self::with_params(KdfParams::moderate())
    }

    /// Sensitive profile: 2 s derivation budget and a 64-byte salt.
    #[must_use]
    pub const fn sensitive() -> Self {
        Self::with_params(KdfParams::sensitive())
    }

    const fn with_params(params: KdfParams) -> Self {
        Self {
            algorithm: KeyWrapAlgorithm::RsaPkcs1v15,
            params,
        }
    }

    /// Sets the key wrap scheme.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: KeyWrapAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the random salt length in bytes. Must be below 133.
    #[must_use]
    pub const fn salt_len(mut self, salt_len: usize) -> Self {
        self.params.salt_len = salt_len;
        self
    }

    /// Sets the key derivation budget in milliseconds.
    #[must_use]
    pub const fn target_runtime_ms(mut self, target_runtime_ms: u32) -> Self {
        self.params.target_runtime_ms = target_runtime_ms;
        self
    }

    /// Returns the configured key wrap scheme.
    #[must_use]
    pub const fn get_algorithm(&self) -> KeyWrapAlgorithm {
        self.algorithm
    }

    /// Returns the configured derivation parameters.
    #[must_use]
    pub const fn get_params(&self) -> KdfParams {
        self.params
    }

    /// Builds an envelope for the certificate in `certificate_der`.
    ///
    /// # Errors
    ///
    /// Any error of [`Envelope::with_password`].
    pub fn try_build(
        &self,
        certificate_der: &[u8],
        password: &[u8],
    ) -> EnvelopeResult<Envelope<Aes256Cbc>> {
        Envelope::with_password(certificate_der, self.algorithm, password, self.params)
    }

    /// Builds an envelope for the certificate called `name` in `bundle`.
    ///
    /// # Errors
    ///
    /// Any error of [`Aes256Cbc::new`] or [`Envelope::from_bundle`].
    pub fn try_build_from_bundle<B: CertificateBundle + ?Sized>(
        &self,
        bundle: &B,
        name: &str,
        password: &[u8],
    ) -> EnvelopeResult<Envelope<Aes256Cbc>> {
        let cipher = Aes256Cbc::new(password, self.params)?;
        Envelope::from_bundle(bundle, name, self.algorithm, cipher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bundle::MemoryBundle;
    use crate::core::cipher::SymmetricCipher;
    use crate::core::error::EnvelopeError;

    const CERTIFICATE: &[u8] = include_bytes!("../../tests/fixtures/certificate.der");

    #[test]
    fn test_presets() {
        assert_eq!(EnvelopeBuilder::interactive().get_params().target_runtime_ms, 100);
        assert_eq!(EnvelopeBuilder::moderate().get_params().target_runtime_ms, 500);
        assert_eq!(EnvelopeBuilder::sensitive().get_params().target_runtime_ms, 2_000);
        assert_eq!(EnvelopeBuilder::default(), EnvelopeBuilder::new());
        assert_eq!(
            EnvelopeBuilder::new().get_algorithm(),
            KeyWrapAlgorithm::RsaPkcs1v15
        );
    }

    #[test]
    fn test_setters() {
        let builder = EnvelopeBuilder::new()
            .algorithm(KeyWrapAlgorithm::RsaOaepSha1)
            .salt_len(16)
            .target_runtime_ms(5);
        assert_eq!(builder.get_algorithm(), KeyWrapAlgorithm::RsaOaepSha1);
        assert_eq!(builder.get_params().salt_len, 16);
        assert_eq!(builder.get_params().target_runtime_ms, 5);
    }

    #[test]
    fn test_build() -> EnvelopeResult<()> {
        let envelope = EnvelopeBuilder::new()
            .target_runtime_ms(5)
            .try_build(CERTIFICATE, b"password")?;
        let sealed = envelope.encrypt_str("Hello world!")?;
        assert_eq!(
            envelope.cipher().decrypt_to_string(sealed.payload())?.as_deref(),
            Some("Hello world!")
        );
        Ok(())
    }

    #[test]
    fn test_build_from_bundle() -> EnvelopeResult<()> {
        let bundle = MemoryBundle::new().with_certificate("certificate", CERTIFICATE);
        let builder = EnvelopeBuilder::new().target_runtime_ms(5);

        builder.try_build_from_bundle(&bundle, "certificate", b"password")?;

        let result = builder.try_build_from_bundle(&bundle, "doesNotExist", b"password");
        assert!(matches!(result, Err(EnvelopeError::InvalidCertificate)));
        Ok(())
    }

    #[test]
    fn test_build_from_bundle_matches_envelope() -> EnvelopeResult<()> {
        let bundle = MemoryBundle::new()
            .with_certificate("certificate", CERTIFICATE)
            .with_certificate("malformed", b"not a certificate".to_vec());
        let builder = EnvelopeBuilder::interactive()
            .algorithm(KeyWrapAlgorithm::RsaOaepSha1)
            .target_runtime_ms(5);

        let envelope = builder.try_build_from_bundle(&bundle, "certificate", b"password")?;
        assert_eq!(envelope.algorithm(), KeyWrapAlgorithm::RsaOaepSha1);

        for name in ["doesNotExist", "malformed"] {
            let cipher = Aes256Cbc::new(b"password", builder.get_params())?;
            let direct = Envelope::from_bundle(&bundle, name, builder.get_algorithm(), cipher);
            let built = builder.try_build_from_bundle(&bundle, name, b"password");
            assert!(matches!(direct, Err(EnvelopeError::InvalidCertificate)));
            assert!(matches!(built, Err(EnvelopeError::InvalidCertificate)));
        }
        Ok(())
    }

    #[test]
    fn test_build_from_bundle_invalid_salt() {
        let bundle = MemoryBundle::new().with_certificate("certificate", CERTIFICATE);
        let result = EnvelopeBuilder::new()
            .salt_len(133)
            .try_build_from_bundle(&bundle, "certificate", b"password");
        assert!(matches!(result, Err(EnvelopeError::InvalidSalt { len: 133 })));
    }

    #[test]
    fn test_build_invalid_salt() {
        let result = EnvelopeBuilder::new()
            .salt_len(133)
            .try_build(CERTIFICATE, b"password");
        assert!(matches!(result, Err(EnvelopeError::InvalidSalt { len: 133 })));
    }
}
