//! `Key` and `Iv` - fixed-size AES-256-CBC key material.
//!
//! Both are produced once per cipher instance and never change afterwards.

use core::fmt::{self, Debug};

use zeroize::Zeroize;

use crate::core::error::{EnvelopeError, EnvelopeResult};

/// AES-256 key size in bytes.
pub const KEY_SIZE: usize = 32;

/// AES block size in bytes, which is also the CBC IV size.
pub const IV_SIZE: usize = 16;

/// A 256-bit symmetric key.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Key {
    bytes: [u8; KEY_SIZE],
}

impl Key {
    /// Creates a new `Key` from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    /// Lowercase hexadecimal rendering of the key.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = EnvelopeError;

    fn try_from(bytes: &[u8]) -> EnvelopeResult<Self> {
        let array: [u8; KEY_SIZE] =
            bytes
                .try_into()
                .map_err(|_| EnvelopeError::InvalidKeyLength {
                    expected: KEY_SIZE,
                    actual: bytes.len(),
                })?;
        Ok(Self::new(array))
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").field("key", &"[REDACTED]").finish()
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for Key {}

/// A 128-bit CBC initialization vector.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Iv {
    bytes: [u8; IV_SIZE],
}

impl Iv {
    /// Creates a new `Iv` from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; IV_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns a reference to the raw IV bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; IV_SIZE] {
        &self.bytes
    }

    /// Lowercase hexadecimal rendering of the IV.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl From<[u8; IV_SIZE]> for Iv {
    fn from(bytes: [u8; IV_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for Iv {
    type Error = EnvelopeError;

    fn try_from(bytes: &[u8]) -> EnvelopeResult<Self> {
        let array: [u8; IV_SIZE] =
            bytes
                .try_into()
                .map_err(|_| EnvelopeError::InvalidIvLength {
                    expected: IV_SIZE,
                    actual: bytes.len(),
                })?;
        Ok(Self::new(array))
    }
}

impl AsRef<[u8]> for Iv {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iv").field("iv", &"[REDACTED]").finish()
    }
}

impl PartialEq for Iv {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for Iv {}
