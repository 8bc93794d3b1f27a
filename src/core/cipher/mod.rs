//! Symmetric cipher capability.
//!
//! An [`Envelope`](crate::core::envelope::Envelope) accepts any type that
//! can encrypt, decrypt, and export its key material as a
//! [`SharedSecret`]. [`Aes256Cbc`] is the provided implementation.

mod aes256cbc;

pub use aes256cbc::Aes256Cbc;

use crate::core::error::EnvelopeResult;
use crate::core::types::SharedSecret;

/// A symmetric cipher whose key material can be exported for wrapping.
///
/// Implementations hold fixed key material: every call on one instance
/// uses the same key, and [`shared_secret`](Self::shared_secret) returns
/// the same value for the lifetime of the instance.
pub trait SymmetricCipher {
    /// Transportable encoding of the cipher's key material.
    fn shared_secret(&self) -> SharedSecret;

    /// Encrypts `plaintext`.
    ///
    /// # Errors
    ///
    /// [`EnvelopeError::CryptOperationFailed`](crate::EnvelopeError::CryptOperationFailed)
    /// if the primitive fails.
    fn encrypt(&self, plaintext: &[u8]) -> EnvelopeResult<Vec<u8>>;

    /// Decrypts `ciphertext`.
    ///
    /// # Errors
    ///
    /// [`EnvelopeError::CryptOperationFailed`](crate::EnvelopeError::CryptOperationFailed)
    /// if the primitive fails or the padding is invalid.
    fn decrypt(&self, ciphertext: &[u8]) -> EnvelopeResult<Vec<u8>>;

    /// Encrypts the UTF-8 bytes of `plaintext`.
    fn encrypt_str(&self, plaintext: &str) -> EnvelopeResult<Vec<u8>> {
        self.encrypt(plaintext.as_bytes())
    }

    /// Decrypts `ciphertext` and decodes it as UTF-8.
    ///
    /// Returns `Ok(None)` when the plaintext is not valid UTF-8. Without a
    /// MAC, a ciphertext from a different key can occasionally pass the
    /// padding check; callers expecting text should treat `None` as an
    /// authentication failure.
    fn decrypt_to_string(&self, ciphertext: &[u8]) -> EnvelopeResult<Option<String>> {
        Ok(String::from_utf8(self.decrypt(ciphertext)?).ok())
    }
}

impl<C: SymmetricCipher + ?Sized> SymmetricCipher for &C {
    fn shared_secret(&self) -> SharedSecret {
        (**self).shared_secret()
    }

    fn encrypt(&self, plaintext: &[u8]) -> EnvelopeResult<Vec<u8>> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> EnvelopeResult<Vec<u8>> {
        (**self).decrypt(ciphertext)
    }
}

impl<C: SymmetricCipher + ?Sized> SymmetricCipher for Box<C> {
    fn shared_secret(&self) -> SharedSecret {
        (**self).shared_secret()
    }

    fn encrypt(&self, plaintext: &[u8]) -> EnvelopeResult<Vec<u8>> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> EnvelopeResult<Vec<u8>> {
        (**self).decrypt(ciphertext)
    }
}
