//! Password-based key derivation.
//!
//! Keys are derived with PBKDF2-HMAC-SHA1 into a 32-byte AES-256 key.
//! The round count is either given explicitly or calibrated so that the
//! derivation takes roughly a target wall-clock time on the current
//! machine.
//!
//! # Example
//!
//! ```rust
//! use envelope::core::operations::kdf::{calibrate_rounds, derive_key, derive_key_calibrated};
//!
//! // Explicit rounds: deterministic
//! let a = derive_key(b"password", b"salt", 1_000)?;
//! let b = derive_key(b"password", b"salt", 1_000)?;
//! assert_eq!(a, b);
//!
//! // Calibrated rounds: sized to a 10 ms budget
//! let rounds = calibrate_rounds(8, 4, 10)?;
//! assert!(rounds >= 1);
//! let _key = derive_key_calibrated(b"password", b"salt", 10)?;
//! # Ok::<(), envelope::EnvelopeError>(())
//! ```

mod calibrate;
mod params;
mod pbkdf2_impl;

pub use calibrate::{calibrate_rounds, MAX_SALT_LEN};
pub use params::KdfParams;
pub use pbkdf2_impl::{derive_key, derive_key_calibrated};
