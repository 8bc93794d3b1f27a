//! Ergonomic layer for envelope operations.
//!
//! The prelude module re-exports the common types and provides
//! [`EnvelopeBuilder`] with preset runtime budgets.
//!
//! # Usage
//!
//! ```rust
//! use envelope::prelude::*;
//! ```

mod builders;

pub use builders::EnvelopeBuilder;

pub use crate::core::bundle::{CertificateBundle, DirectoryBundle, MemoryBundle};
pub use crate::core::cipher::{Aes256Cbc, SymmetricCipher};
pub use crate::core::envelope::Envelope;
pub use crate::core::error::{EnvelopeError, EnvelopeResult};
pub use crate::core::operations::kdf::KdfParams;
pub use crate::core::operations::pke::KeyWrapAlgorithm;
pub use crate::core::random::{OsRandom, RandomSource};
pub use crate::core::types::{Ciphertext, Iv, Key, RecipientKey, SharedSecret};
