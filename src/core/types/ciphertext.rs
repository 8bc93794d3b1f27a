//! `Ciphertext` - the two-part output of an envelope.

use base64::prelude::*;

/// A sealed envelope: the wrapped shared secret and the encrypted payload.
///
/// The two buffers carry no framing. Callers that ship both together pick
/// their own transport encoding; base64 helpers are provided for the
/// common text case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    wrapped_key: Vec<u8>,
    payload: Vec<u8>,
}

impl Ciphertext {
    /// Creates a new `Ciphertext` from its parts.
    #[must_use]
    pub fn new(wrapped_key: Vec<u8>, payload: Vec<u8>) -> Self {
        Self {
            wrapped_key,
            payload,
        }
    }

    /// The shared secret encrypted under the recipient's public key.
    #[must_use]
    pub fn wrapped_key(&self) -> &[u8] {
        &self.wrapped_key
    }

    /// The plaintext encrypted under the symmetric cipher.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consumes the `Ciphertext` and returns `(wrapped_key, payload)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.wrapped_key, self.payload)
    }

    /// Standard base64 of the wrapped key.
    #[must_use]
    pub fn wrapped_key_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.wrapped_key)
    }

    /// Standard base64 of the payload.
    #[must_use]
    pub fn payload_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.payload)
    }
}
