//! Public key encryption (PKE) operations.
//!
//! The recipient's public key is resolved from a DER-encoded X.509
//! certificate and used to wrap a cipher's shared secret, so that only
//! the holder of the matching private key can recover it.
//!
//! - [`import_public_key`] - certificate to [`RecipientKey`](crate::core::types::RecipientKey)
//! - [`wrap_key`] - RSA encryption under a [`KeyWrapAlgorithm`]

mod certificate;
mod rsa_wrap;

pub use certificate::{import_public_key, MAX_MODULUS_BITS};
pub use rsa_wrap::{wrap_key, KeyWrapAlgorithm};
