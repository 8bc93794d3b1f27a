//! Cryptographic operations.
//!
//! - [`kdf`] - Password-based key derivation (PBKDF2-HMAC-SHA1, calibrated)
//! - [`pke`] - Certificate import and RSA key wrapping

pub mod kdf;
pub mod pke;
