//! PBKDF2-HMAC-SHA1 key derivation.
//!
//! Produces the 32-byte AES-256 key from a password and salt, either with
//! an explicit round count or with a round count calibrated to a runtime
//! budget.

use hmac::Hmac;
use sha1::Sha1;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::operations::kdf::calibrate::{calibrate_rounds, check_salt_len};
use crate::core::types::{Key, KEY_SIZE};

type HmacSha1 = Hmac<Sha1>;

/// Runs PBKDF2-HMAC-SHA1 into `out`.
///
/// Shared by derivation and calibration so both time the same primitive.
pub(crate) fn pbkdf2_sha1(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    out: &mut [u8],
) -> EnvelopeResult<()> {
    pbkdf2::pbkdf2::<HmacSha1>(password, salt, rounds, out)
        .map_err(|e| EnvelopeError::KeyDerivationFailed(e.to_string()))
}

/// Derives an AES-256 key with an explicit round count.
///
/// # Errors
///
/// - [`EnvelopeError::InvalidRounds`] if `rounds` is zero
/// - [`EnvelopeError::InvalidSalt`] if `salt` is 133 bytes or longer
/// - [`EnvelopeError::KeyDerivationFailed`] if the primitive fails
///
/// # Example
///
/// ```rust
/// use envelope::core::operations::kdf::derive_key;
///
/// let key = derive_key(b"password", b"", 10_000)?;
/// assert_eq!(
///     key.to_hex(),
///     "17dab8db64084126762256304ece4d1be9835355078639cae426b53d3b0a141f"
/// );
/// # Ok::<(), envelope::EnvelopeError>(())
/// ```
pub fn derive_key(password: &[u8], salt: &[u8], rounds: u32) -> EnvelopeResult<Key> {
    if rounds == 0 {
        return Err(EnvelopeError::InvalidRounds);
    }
    check_salt_len(salt.len())?;

    let mut bytes = [0u8; KEY_SIZE];
    pbkdf2_sha1(password, salt, rounds, &mut bytes)?;
    let key = Key::new(bytes);
    zeroize::Zeroize::zeroize(&mut bytes);

    Ok(key)
}

/// Derives an AES-256 key with a round count sized to `target_runtime_ms`.
///
/// The budget only sizes the round count up front; the derivation itself
/// always runs to completion.
///
/// # Errors
///
/// - [`EnvelopeError::InvalidSalt`] if `salt` is 133 bytes or longer
/// - [`EnvelopeError::KeyDerivationFailed`] if the primitive fails
pub fn derive_key_calibrated(
    password: &[u8],
    salt: &[u8],
    target_runtime_ms: u32,
) -> EnvelopeResult<Key> {
    let rounds = calibrate_rounds(password.len(), salt.len(), target_runtime_ms)?;
    derive_key(password, salt, rounds)
}
