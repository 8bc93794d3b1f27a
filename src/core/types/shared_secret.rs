//! `SharedSecret` - transportable encoding of a cipher's key and IV.
//!
//! Format: `{hex(key)}\n{hex(iv)}` as UTF-8 bytes, lowercase hex.
//!
//! The encoding is what gets wrapped under the recipient's public key. A
//! recipient holding the private key can feed it to OpenSSL directly:
//!
//! ```text
//! set -- $(openssl pkeyutl -decrypt -inkey key.pem -in wrapped.bin)
//! openssl aes-256-cbc -d -K $1 -iv $2 -in payload.bin
//! ```

use core::fmt::{self, Debug};

use zeroize::{Zeroize, Zeroizing};

use crate::core::types::{Iv, Key, IV_SIZE, KEY_SIZE};

/// Length of an encoded AES-256-CBC secret: two hex runs and a separator.
const ENCODED_LEN: usize = 2 * KEY_SIZE + 1 + 2 * IV_SIZE;

/// Key and IV bundled for out-of-band transport.
///
/// # Security
///
/// - Zeroized on drop
/// - Debug output redacts the contents
/// - Equality comparison uses constant-time comparison
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SharedSecret {
    encoded: Vec<u8>,
}

impl SharedSecret {
    /// Encodes a key and IV.
    #[must_use]
    pub fn new(key: &Key, iv: &Iv) -> Self {
        let key_hex = Zeroizing::new(key.to_hex());
        let iv_hex = Zeroizing::new(iv.to_hex());

        // Sized up front so the secret is never reallocated and left behind
        let mut encoded = Vec::with_capacity(ENCODED_LEN);
        encoded.extend_from_slice(key_hex.as_bytes());
        encoded.push(b'\n');
        encoded.extend_from_slice(iv_hex.as_bytes());
        Self { encoded }
    }

    /// Wraps an already-encoded secret, e.g. one recovered by unwrapping.
    #[must_use]
    pub fn from_encoded(encoded: Vec<u8>) -> Self {
        Self { encoded }
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }

    /// Splits the encoding back into its hexadecimal key and IV halves.
    ///
    /// Returns `None` when the encoding is not UTF-8 or has no separator.
    #[must_use]
    pub fn hex_parts(&self) -> Option<(&str, &str)> {
        core::str::from_utf8(&self.encoded).ok()?.split_once('\n')
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.encoded
    }
}

impl Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("len", &self.encoded.len())
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.encoded.ct_eq(&other.encoded).into()
    }
}

impl Eq for SharedSecret {}
