//! Random byte generation.
//!
//! Salts and IVs are drawn from a [`RandomSource`]. Any cryptographically
//! secure `rand_core` generator qualifies; [`OsRandom`] is the operating
//! system's CSPRNG and the source used when none is supplied.

use rand_core::{CryptoRng, RngCore};

use crate::core::error::{EnvelopeError, EnvelopeResult};

/// Capability that fills buffers with cryptographically secure random bytes.
///
/// Implemented for every `RngCore + CryptoRng` generator. Failures are
/// reported as [`EnvelopeError::RandomGenerationFailed`] and are never
/// retried.
pub trait RandomSource {
    /// Fills `dest` entirely with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> EnvelopeResult<()>;
}

impl<R: RngCore + CryptoRng + ?Sized> RandomSource for R {
    fn fill(&mut self, dest: &mut [u8]) -> EnvelopeResult<()> {
        self.try_fill_bytes(dest)
            .map_err(|_| EnvelopeError::RandomGenerationFailed)
    }
}

/// The operating system CSPRNG.
pub use rand_core::OsRng as OsRandom;

/// Returns `len` fresh random bytes from `source`.
pub(crate) fn random_bytes<R: RandomSource + ?Sized>(
    source: &mut R,
    len: usize,
) -> EnvelopeResult<Vec<u8>> {
    let mut bytes = vec![0u8; len];
    source.fill(&mut bytes)?;
    Ok(bytes)
}
