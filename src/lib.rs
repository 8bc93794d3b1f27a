//! Hybrid encryption envelopes.
//!
//! A plaintext is encrypted with AES-256-CBC under a key derived from a
//! password, and the key material is wrapped under a recipient's RSA
//! public key taken from an X.509 certificate. The result is a pair of
//! buffers that only the holder of the matching private key can open.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use envelope::{Aes256Cbc, Envelope, KdfParams, KeyWrapAlgorithm};
//!
//! let der = std::fs::read("recipient.der").expect("certificate");
//! let cipher = Aes256Cbc::new(b"password", KdfParams::default())?;
//! let envelope = Envelope::new(&der, KeyWrapAlgorithm::RsaPkcs1v15, cipher)?;
//!
//! let sealed = envelope.encrypt_str("Hello world!")?;
//! let (wrapped_key, payload) = sealed.into_parts();
//! # let _ = (wrapped_key, payload);
//! # Ok::<(), envelope::EnvelopeError>(())
//! ```
//!
//! # Construction
//!
//! | Layer | Algorithm |
//! |-------|-----------|
//! | Key derivation | PBKDF2-HMAC-SHA1, 32-byte output, calibrated rounds |
//! | Payload | AES-256-CBC, PKCS#7 padding, random IV |
//! | Shared secret | `hex(key) "\n" hex(iv)` |
//! | Key wrap | RSA PKCS#1 v1.5 (default) or OAEP |
//!
//! # Security
//!
//! - Key material is zeroized on drop
//! - Debug output redacts key material
//! - Constant-time comparison for keys and shared secrets
//! - No unsafe code
//!
//! There is no MAC over the payload. Decrypting with the wrong key usually
//! fails the padding check but can yield garbage; add authentication
//! separately if integrity matters.
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports and builders (requires `prelude` feature)

#![forbid(unsafe_code)]

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::cipher::{Aes256Cbc, SymmetricCipher};
pub use core::envelope::Envelope;
pub use core::error::{EnvelopeError, EnvelopeResult};
pub use core::operations::kdf::KdfParams;
pub use core::operations::pke::KeyWrapAlgorithm;
pub use core::types::{Ciphertext, SharedSecret};
