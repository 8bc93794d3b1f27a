//! RSA key wrapping of shared secrets.

use core::fmt::{self, Display};

use rand_core::OsRng;
use rsa::{Oaep, Pkcs1v15Encrypt};

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::types::RecipientKey;

/// Asymmetric encryption scheme used to wrap the shared secret.
///
/// Passed through to the RSA primitive unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyWrapAlgorithm {
    /// RSAES-PKCS1-v1_5. Decryptable with `openssl pkeyutl -decrypt`.
    #[default]
    RsaPkcs1v15,
    /// RSAES-OAEP with SHA-1 and MGF1-SHA-1.
    RsaOaepSha1,
    /// RSAES-OAEP with SHA-256 and MGF1-SHA-256.
    RsaOaepSha256,
}

impl KeyWrapAlgorithm {
    /// Bytes of padding overhead this scheme adds inside the modulus.
    #[must_use]
    pub const fn overhead(self) -> usize {
        match self {
            Self::RsaPkcs1v15 => 11,
            Self::RsaOaepSha1 => 2 * 20 + 2,
            Self::RsaOaepSha256 => 2 * 32 + 2,
        }
    }

    /// Largest secret this scheme can wrap under `recipient`.
    #[must_use]
    pub fn max_secret_len(self, recipient: &RecipientKey) -> usize {
        recipient.size_bytes().saturating_sub(self.overhead())
    }
}

impl Display for KeyWrapAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RsaPkcs1v15 => "rsa-pkcs1v15",
            Self::RsaOaepSha1 => "rsa-oaep-sha1",
            Self::RsaOaepSha256 => "rsa-oaep-sha256",
        };
        f.write_str(name)
    }
}

/// Encrypts `secret` under the recipient's public key.
///
/// # Errors
///
/// [`EnvelopeError::KeyWrapFailed`] carrying the primitive's diagnostic,
/// e.g. when `secret` is too long for the modulus and scheme.
pub fn wrap_key(
    recipient: &RecipientKey,
    algorithm: KeyWrapAlgorithm,
    secret: &[u8],
) -> EnvelopeResult<Vec<u8>> {
    let key = recipient.as_rsa();
    let mut rng = OsRng;

    let wrapped = match algorithm {
        KeyWrapAlgorithm::RsaPkcs1v15 => key.encrypt(&mut rng, Pkcs1v15Encrypt, secret),
        KeyWrapAlgorithm::RsaOaepSha1 => key.encrypt(&mut rng, Oaep::new::<sha1::Sha1>(), secret),
        KeyWrapAlgorithm::RsaOaepSha256 => {
            key.encrypt(&mut rng, Oaep::new::<sha2::Sha256>(), secret)
        }
    };

    wrapped.map_err(|e| EnvelopeError::KeyWrapFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::{RsaPrivateKey, RsaPublicKey};

    fn test_keypair() -> (RsaPrivateKey, RecipientKey) {
        let private_key = RsaPrivateKey::new(&mut OsRng, 1024).expect("key generation");
        let public_key = RsaPublicKey::from(&private_key);
        (private_key, RecipientKey::new(public_key))
    }

    #[test]
    fn test_wrap_unwrap_each_algorithm() -> EnvelopeResult<()> {
        let (private_key, recipient) = test_keypair();
        let secret = b"0123456789abcdef\nfedcba9876543210";

        let wrapped = wrap_key(&recipient, KeyWrapAlgorithm::RsaPkcs1v15, secret)?;
        assert_eq!(wrapped.len(), recipient.size_bytes());
        let unwrapped = private_key
            .decrypt(Pkcs1v15Encrypt, &wrapped)
            .expect("pkcs1v15 unwrap");
        assert_eq!(unwrapped, secret);

        let wrapped = wrap_key(&recipient, KeyWrapAlgorithm::RsaOaepSha1, secret)?;
        let unwrapped = private_key
            .decrypt(Oaep::new::<sha1::Sha1>(), &wrapped)
            .expect("oaep-sha1 unwrap");
        assert_eq!(unwrapped, secret);

        let wrapped = wrap_key(&recipient, KeyWrapAlgorithm::RsaOaepSha256, secret)?;
        let unwrapped = private_key
            .decrypt(Oaep::new::<sha2::Sha256>(), &wrapped)
            .expect("oaep-sha256 unwrap");
        assert_eq!(unwrapped, secret);
        Ok(())
    }

    #[test]
    fn test_wrap_is_randomized() -> EnvelopeResult<()> {
        let (_, recipient) = test_keypair();
        let a = wrap_key(&recipient, KeyWrapAlgorithm::RsaPkcs1v15, b"secret")?;
        let b = wrap_key(&recipient, KeyWrapAlgorithm::RsaPkcs1v15, b"secret")?;
        assert_ne!(a, b);
        Ok(())
    }

    #[test]
    fn test_secret_too_long() {
        let (_, recipient) = test_keypair();
        let algorithm = KeyWrapAlgorithm::RsaOaepSha256;
        let secret = vec![0x61u8; algorithm.max_secret_len(&recipient) + 1];

        let result = wrap_key(&recipient, algorithm, &secret);
        assert!(matches!(result, Err(EnvelopeError::KeyWrapFailed(_))));
    }

    #[test]
    fn test_max_secret_len() {
        let (_, recipient) = test_keypair();
        // 1024-bit modulus = 128 bytes
        assert_eq!(KeyWrapAlgorithm::RsaPkcs1v15.max_secret_len(&recipient), 117);
        assert_eq!(KeyWrapAlgorithm::RsaOaepSha1.max_secret_len(&recipient), 86);
        assert_eq!(KeyWrapAlgorithm::RsaOaepSha256.max_secret_len(&recipient), 62);
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(KeyWrapAlgorithm::default(), KeyWrapAlgorithm::RsaPkcs1v15);
        assert_eq!(KeyWrapAlgorithm::RsaPkcs1v15.to_string(), "rsa-pkcs1v15");
        assert_eq!(KeyWrapAlgorithm::RsaOaepSha256.to_string(), "rsa-oaep-sha256");
    }
}
