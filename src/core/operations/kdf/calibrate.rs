//! Round-count calibration for PBKDF2.
//!
//! A probe derivation with a fixed round count is timed on dummy inputs of
//! the same shape as the real password and salt, and the result is scaled
//! linearly to the requested budget.

use std::time::{Duration, Instant};

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::operations::kdf::pbkdf2_impl::pbkdf2_sha1;
use crate::core::types::KEY_SIZE;

/// Salts must be strictly shorter than this many bytes.
pub const MAX_SALT_LEN: usize = 133;

/// Rounds used by the timing probe.
const PROBE_ROUNDS: u32 = 10_000;

/// Probe attempts before giving up on a measurable duration.
const PROBE_ATTEMPTS: usize = 5;

/// Used when the clock never registers the probe.
const UNMEASURABLE_ROUNDS: u32 = 123_456;

pub(crate) fn check_salt_len(len: usize) -> EnvelopeResult<()> {
    if len >= MAX_SALT_LEN {
        return Err(EnvelopeError::InvalidSalt { len });
    }
    Ok(())
}

/// Estimates the largest PBKDF2-HMAC-SHA1 round count whose runtime stays
/// within `target_runtime_ms` on this machine.
///
/// The estimate is for a 32-byte output with a password of `password_len`
/// bytes and a salt of `salt_len` bytes. The result is always at least 1.
///
/// # Errors
///
/// - [`EnvelopeError::InvalidSalt`] if `salt_len` is 133 or more
/// - [`EnvelopeError::KeyDerivationFailed`] if the probe derivation fails
pub fn calibrate_rounds(
    password_len: usize,
    salt_len: usize,
    target_runtime_ms: u32,
) -> EnvelopeResult<u32> {
    check_salt_len(salt_len)?;

    let password = vec![b'a'; password_len.max(1)];
    let salt: Vec<u8> = (0..salt_len).map(|i| i as u8).collect();
    let mut out = [0u8; KEY_SIZE];

    let mut elapsed = Duration::ZERO;
    for _ in 0..PROBE_ATTEMPTS {
        let start = Instant::now();
        pbkdf2_sha1(&password, &salt, PROBE_ROUNDS, &mut out)?;
        elapsed = start.elapsed();
        if !elapsed.is_zero() {
            break;
        }
    }

    let rounds = rounds_for_budget(elapsed, target_runtime_ms);
    tracing::debug!(
        password_len,
        salt_len,
        target_runtime_ms,
        probe_micros = elapsed.as_micros() as u64,
        rounds,
        "calibrated pbkdf2 rounds"
    );

    Ok(rounds)
}

/// Scales the probe timing to the budget, flooring and clamping to `1..=u32::MAX`.
fn rounds_for_budget(probe_elapsed: Duration, target_runtime_ms: u32) -> u32 {
    let probe_nanos = probe_elapsed.as_nanos();
    if probe_nanos == 0 {
        return UNMEASURABLE_ROUNDS;
    }

    let budget_nanos = u128::from(target_runtime_ms) * 1_000_000;
    let rounds = budget_nanos * u128::from(PROBE_ROUNDS) / probe_nanos;

    u32::try_from(rounds).unwrap_or(u32::MAX).max(1)
}
