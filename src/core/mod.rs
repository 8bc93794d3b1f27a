//! Core envelope types and operations.
//!
//! - [`error`] - Error types
//! - [`random`] - Random byte source capability
//! - [`types`] - Key material, shared secrets, ciphertexts, recipient keys
//! - [`operations`] - Key derivation, certificate import, key wrapping
//! - [`cipher`] - Symmetric cipher capability and AES-256-CBC
//! - [`envelope`] - Hybrid encryption composition
//! - [`bundle`] - Certificate lookup by name

pub mod bundle;
pub mod cipher;
pub mod envelope;
pub mod error;
pub mod operations;
pub mod random;
pub mod types;

// Re-export commonly used items
pub use error::{EnvelopeError, EnvelopeResult};
