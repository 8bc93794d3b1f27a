//! Value types carried through the envelope.
//!
//! - [`Key`] / [`Iv`] - AES-256-CBC key material
//! - [`SharedSecret`] - transportable key + IV encoding
//! - [`Ciphertext`] - wrapped key + payload pair
//! - [`RecipientKey`] - public key imported from a certificate

mod ciphertext;
mod key;
mod recipient;
mod shared_secret;

pub use ciphertext::Ciphertext;
pub use key::{Iv, Key, IV_SIZE, KEY_SIZE};
pub use recipient::RecipientKey;
pub use shared_secret::SharedSecret;
