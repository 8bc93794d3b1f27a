//! `RecipientKey` - a public key resolved from an X.509 certificate.

use core::fmt::{self, Debug};

use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;

/// The recipient's public key, read-only once imported.
///
/// Obtained through [`import_public_key`](crate::core::operations::pke::import_public_key).
#[derive(Clone, PartialEq, Eq)]
pub struct RecipientKey {
    key: RsaPublicKey,
}

impl RecipientKey {
    pub(crate) fn new(key: RsaPublicKey) -> Self {
        Self { key }
    }

    /// Modulus size in bits.
    #[must_use]
    pub fn size_bits(&self) -> usize {
        self.key.n().bits() as usize
    }

    /// Modulus size in bytes, which is also the wrapped key size.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.key.size()
    }

    pub(crate) fn as_rsa(&self) -> &RsaPublicKey {
        &self.key
    }
}

impl Debug for RecipientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipientKey")
            .field("algorithm", &"rsa")
            .field("bits", &self.size_bits())
            .finish()
    }
}
