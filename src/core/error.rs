//! Error types for envelope operations.
//!
//! Every failure from a cryptographic primitive is wrapped, never
//! reinterpreted: the primitive's own diagnostic travels in the variant
//! payload. Certificate failures are intentionally collapsed into a single
//! kind since the caller can only discard the certificate.

use thiserror::Error;

/// Errors that can occur while deriving keys, running the cipher, or
/// building and sealing an envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The random source could not produce the requested bytes.
    #[error("Random byte generation failed")]
    RandomGenerationFailed,

    /// A key derivation was requested with zero rounds.
    #[error("Key derivation rounds must be non-zero")]
    InvalidRounds,

    /// The salt is too long for round calibration.
    #[error("Salt length {len} exceeds calibration limit")]
    InvalidSalt {
        /// Length of the rejected salt in bytes.
        len: usize,
    },

    /// The PBKDF2 primitive reported a failure.
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    /// The key does not have the AES-256 key size.
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Required length in bytes.
        expected: usize,
        /// Supplied length in bytes.
        actual: usize,
    },

    /// The IV does not have the AES block size.
    #[error("Invalid IV length: expected {expected}, got {actual}")]
    InvalidIvLength {
        /// Required length in bytes.
        expected: usize,
        /// Supplied length in bytes.
        actual: usize,
    },

    /// The block cipher failed, including padding validation on decrypt.
    #[error("Cipher operation failed: {0}")]
    CryptOperationFailed(String),

    /// The certificate could not be parsed, evaluated, or yielded no
    /// usable public key.
    /// Intentionally vague.
    #[error("Invalid certificate")]
    InvalidCertificate,

    /// The asymmetric primitive failed to wrap the shared secret.
    #[error("Key wrap failed: {0}")]
    KeyWrapFailed(String),
}

/// Result type alias for envelope operations.
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
