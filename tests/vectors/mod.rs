//! Test vector types for key derivation and AES-256-CBC tests.
//!
//! Vectors were generated independently of this crate (Python `hashlib`
//! and `cryptography`) so they pin interoperability, not just stability.

// Some fields are only read by one of the test binaries
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Deterministic cipher construction and its expected key material.
#[derive(Debug, Deserialize)]
pub struct DerivationTestVector {
    pub name: String,
    /// UTF-8 password
    pub password: String,
    /// Hex-encoded salt
    pub salt: String,
    pub rounds: u32,
    /// Hex-encoded IV
    pub iv: String,
    /// Hex-encoded expected key
    pub key: String,
    /// Expected shared secret encoding
    #[serde(rename = "shared-secret")]
    pub shared_secret: String,
}

/// Deterministic encryption of a plaintext.
#[derive(Debug, Deserialize)]
pub struct CryptTestVector {
    pub name: String,
    /// UTF-8 password
    pub password: String,
    /// Hex-encoded salt
    pub salt: String,
    pub rounds: u32,
    /// Hex-encoded IV
    pub iv: String,
    /// Hex-encoded plaintext
    pub plaintext: String,
    /// Hex-encoded expected ciphertext
    pub ciphertext: String,
}

/// Decode a hex string to bytes.
pub fn hex_decode(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("invalid hex {s:?}: {e}"))
}

/// Load test vectors from `tests/vectors/{file}`.
pub fn load_vectors<T: serde::de::DeserializeOwned>(file: &str) -> TestVectorSuite<T> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/vectors")
        .join(file);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&content).expect("failed to parse test vectors")
}
