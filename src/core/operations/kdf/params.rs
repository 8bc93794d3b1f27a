//! Parameters for randomly salted, calibrated key derivation.

/// Salt length and runtime budget for the random-key construction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Length of the random salt in bytes. Must be below 133.
    pub salt_len: usize,
    /// Wall-clock budget for the derivation in milliseconds.
    pub target_runtime_ms: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::moderate()
    }
}

impl KdfParams {
    /// Interactive profile: 32-byte salt, 100 ms budget.
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            salt_len: 32,
            target_runtime_ms: 100,
        }
    }

    /// Moderate profile: 32-byte salt, 500 ms budget.
    ///
    /// This is the default.
    #[must_use]
    pub const fn moderate() -> Self {
        Self {
            salt_len: 32,
            target_runtime_ms: 500,
        }
    }

    /// Sensitive profile: 64-byte salt, 2 s budget.
    #[must_use]
    pub const fn sensitive() -> Self {
        Self {
            salt_len: 64,
            target_runtime_ms: 2_000,
        }
    }

    /// Sets the random salt length in bytes.
    #[must_use]
    pub const fn salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = salt_len;
        self
    }

    /// Sets the derivation budget in milliseconds.
    #[must_use]
    pub const fn target_runtime_ms(mut self, target_runtime_ms: u32) -> Self {
        self.target_runtime_ms = target_runtime_ms;
        self
    }
}
