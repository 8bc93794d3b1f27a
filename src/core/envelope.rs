//! `Envelope` - hybrid encryption to a certificate holder.
//!
//! The plaintext is encrypted with a symmetric cipher, and the cipher's
//! shared secret is wrapped under the recipient's RSA public key. Only
//! the holder of the matching private key can unwrap the secret and
//! decrypt the payload; this crate never holds that private key.

use crate::core::bundle::CertificateBundle;
use crate::core::cipher::{Aes256Cbc, SymmetricCipher};
use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::operations::kdf::KdfParams;
use crate::core::operations::pke::{import_public_key, wrap_key, KeyWrapAlgorithm};
use crate::core::types::{Ciphertext, RecipientKey};

/// Seals plaintexts for the holder of one certificate.
///
/// Generic over the [`SymmetricCipher`]; every envelope from one instance
/// reuses that cipher's key material.
///
/// # Example
///
/// ```rust,no_run
/// use envelope::core::envelope::Envelope;
/// use envelope::core::operations::kdf::KdfParams;
/// use envelope::core::operations::pke::KeyWrapAlgorithm;
///
/// let der = std::fs::read("recipient.der").expect("certificate");
/// let envelope = Envelope::with_password(
///     &der,
///     KeyWrapAlgorithm::default(),
///     b"password",
///     KdfParams::default(),
/// )?;
///
/// let sealed = envelope.encrypt_str("Hello world!")?;
/// println!("{}", sealed.wrapped_key_base64());
/// println!("{}", sealed.payload_base64());
/// # Ok::<(), envelope::EnvelopeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Envelope<C: SymmetricCipher> {
    recipient: RecipientKey,
    algorithm: KeyWrapAlgorithm,
    cipher: C,
}

impl<C: SymmetricCipher> Envelope<C> {
    /// Builds an envelope for the certificate in `certificate_der`.
    ///
    /// # Errors
    ///
    /// [`EnvelopeError::InvalidCertificate`] if the certificate cannot be
    /// used.
    pub fn new(
        certificate_der: &[u8],
        algorithm: KeyWrapAlgorithm,
        cipher: C,
    ) -> EnvelopeResult<Self> {
        let recipient = import_public_key(certificate_der)?;
        Ok(Self {
            recipient,
            algorithm,
            cipher,
        })
    }

    /// Builds an envelope for the certificate called `name` in `bundle`.
    ///
    /// # Errors
    ///
    /// [`EnvelopeError::InvalidCertificate`] if the resource is missing or
    /// the certificate cannot be used.
    pub fn from_bundle<B: CertificateBundle + ?Sized>(
        bundle: &B,
        name: &str,
        algorithm: KeyWrapAlgorithm,
        cipher: C,
    ) -> EnvelopeResult<Self> {
        let der = bundle.certificate_der(name).ok_or_else(|| {
            tracing::debug!(name, "certificate resource not found");
            EnvelopeError::InvalidCertificate
        })?;
        Self::new(&der, algorithm, cipher)
    }

    /// Encrypts `plaintext` and wraps the cipher's shared secret.
    ///
    /// The payload is exactly what the cipher alone produces for
    /// `plaintext`.
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::CryptOperationFailed`] from the symmetric cipher
    /// - [`EnvelopeError::KeyWrapFailed`] from the RSA primitive
    pub fn encrypt(&self, plaintext: &[u8]) -> EnvelopeResult<Ciphertext> {
        let payload = self.cipher.encrypt(plaintext)?;
        let secret = self.cipher.shared_secret();
        let wrapped_key = wrap_key(&self.recipient, self.algorithm, secret.as_bytes())?;

        tracing::debug!(
            algorithm = %self.algorithm,
            payload_len = payload.len(),
            wrapped_key_len = wrapped_key.len(),
            "sealed envelope"
        );
        Ok(Ciphertext::new(wrapped_key, payload))
    }

    /// Encrypts the UTF-8 bytes of `plaintext`.
    ///
    /// # Errors
    ///
    /// See [`encrypt`](Self::encrypt).
    pub fn encrypt_str(&self, plaintext: &str) -> EnvelopeResult<Ciphertext> {
        self.encrypt(plaintext.as_bytes())
    }

    /// The recipient's public key.
    #[must_use]
    pub fn recipient(&self) -> &RecipientKey {
        &self.recipient
    }

    /// The key wrap scheme.
    #[must_use]
    pub fn algorithm(&self) -> KeyWrapAlgorithm {
        self.algorithm
    }

    /// The symmetric cipher.
    #[must_use]
    pub fn cipher(&self) -> &C {
        &self.cipher
    }
}

impl Envelope<Aes256Cbc> {
    /// Builds an envelope around a fresh [`Aes256Cbc`] derived from
    /// `password` with a random salt, calibrated rounds, and a random IV.
    ///
    /// # Errors
    ///
    /// Any error of [`Aes256Cbc::new`] or [`Envelope::new`].
    pub fn with_password(
        certificate_der: &[u8],
        algorithm: KeyWrapAlgorithm,
        password: &[u8],
        params: KdfParams,
    ) -> EnvelopeResult<Self> {
        let cipher = Aes256Cbc::new(password, params)?;
        Self::new(certificate_der, algorithm, cipher)
    }
}
