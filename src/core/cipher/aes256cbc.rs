//! AES-256-CBC with PKCS#7 padding.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use zeroize::Zeroizing;

use crate::core::cipher::SymmetricCipher;
use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::operations::kdf::{derive_key, derive_key_calibrated, KdfParams};
use crate::core::random::{random_bytes, OsRandom, RandomSource};
use crate::core::types::{Iv, Key, SharedSecret, IV_SIZE};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES-256 in CBC mode with PKCS#7 padding.
///
/// The key and IV are fixed at construction; every encryption on one
/// instance uses the same pair. Ciphertext length is the plaintext length
/// rounded up to the next 16-byte boundary, plus a full block when the
/// plaintext is already aligned.
///
/// There is no MAC. See [`SymmetricCipher::decrypt_to_string`].
///
/// # Example
///
/// ```rust
/// use envelope::core::cipher::{Aes256Cbc, SymmetricCipher};
/// use envelope::core::operations::kdf::KdfParams;
///
/// let cipher = Aes256Cbc::new(b"password", KdfParams::default().target_runtime_ms(10))?;
///
/// let ciphertext = cipher.encrypt_str("Hello world!")?;
/// assert_eq!(ciphertext.len(), 16);
/// assert_eq!(cipher.decrypt_to_string(&ciphertext)?.as_deref(), Some("Hello world!"));
/// # Ok::<(), envelope::EnvelopeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aes256Cbc {
    key: Key,
    iv: Iv,
}

impl Aes256Cbc {
    /// Builds a cipher from raw key and IV bytes.
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::InvalidKeyLength`] unless `key` is 32 bytes
    /// - [`EnvelopeError::InvalidIvLength`] unless `iv` is 16 bytes
    pub fn from_parts(key: &[u8], iv: &[u8]) -> EnvelopeResult<Self> {
        let key = Key::try_from(key)?;
        let iv = Iv::try_from(iv)?;
        Ok(Self { key, iv })
    }

    /// Derives the key with an explicit salt and round count and uses the
    /// given IV. Deterministic: equal inputs give equal ciphers.
    ///
    /// Meant for fixtures and interoperability checks. Reusing a key and
    /// IV across messages leaks plaintext structure.
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::InvalidRounds`] if `rounds` is zero
    /// - [`EnvelopeError::InvalidSalt`] if `salt` is 133 bytes or longer
    /// - [`EnvelopeError::KeyDerivationFailed`] if PBKDF2 fails
    /// - [`EnvelopeError::InvalidIvLength`] unless `iv` is 16 bytes
    pub fn with_fixed_iv(
        password: &[u8],
        salt: &[u8],
        rounds: u32,
        iv: &[u8],
    ) -> EnvelopeResult<Self> {
        let key = derive_key(password, salt, rounds)?;
        let iv = Iv::try_from(iv)?;
        tracing::trace!(rounds, "constructed aes-256-cbc cipher with fixed iv");
        Ok(Self { key, iv })
    }

    /// Derives the key from `password` and a fresh random salt with a
    /// calibrated round count, and draws a random IV, using the operating
    /// system CSPRNG.
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::RandomGenerationFailed`] if the CSPRNG fails
    /// - [`EnvelopeError::InvalidSalt`] if `params.salt_len` is 133 or more
    /// - [`EnvelopeError::KeyDerivationFailed`] if PBKDF2 fails
    pub fn new(password: &[u8], params: KdfParams) -> EnvelopeResult<Self> {
        Self::with_random_source(&mut OsRandom, password, params)
    }

    /// Same as [`new`](Self::new) with a caller-supplied random source.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_random_source<R: RandomSource + ?Sized>(
        random: &mut R,
        password: &[u8],
        params: KdfParams,
    ) -> EnvelopeResult<Self> {
        let mut salt = random_bytes(random, params.salt_len)?;
        let derived = derive_key_calibrated(password, &salt, params.target_runtime_ms);
        zeroize::Zeroize::zeroize(&mut salt);
        let key = derived?;

        let mut iv = [0u8; IV_SIZE];
        random.fill(&mut iv)?;

        tracing::trace!(
            salt_len = params.salt_len,
            target_runtime_ms = params.target_runtime_ms,
            "constructed aes-256-cbc cipher with random salt and iv"
        );
        Ok(Self {
            key,
            iv: Iv::new(iv),
        })
    }

    /// Rebuilds a cipher from an unwrapped [`SharedSecret`] encoding.
    ///
    /// This is the recipient side of an envelope, once the wrapped key has
    /// been decrypted with the private key.
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::InvalidKeyLength`] if the key half is missing,
    ///   not hex, or not 32 bytes
    /// - [`EnvelopeError::InvalidIvLength`] if the IV half is not hex or
    ///   not 16 bytes
    pub fn from_shared_secret(secret: &SharedSecret) -> EnvelopeResult<Self> {
        let (key_hex, iv_hex) = secret
            .hex_parts()
            .ok_or(EnvelopeError::InvalidKeyLength {
                expected: crate::core::types::KEY_SIZE,
                actual: 0,
            })?;

        let key = Zeroizing::new(hex::decode(key_hex).unwrap_or_default());
        let iv = Zeroizing::new(hex::decode(iv_hex).unwrap_or_default());
        Self::from_parts(&key, &iv)
    }

    /// The cipher's key.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The cipher's IV.
    #[must_use]
    pub fn iv(&self) -> &Iv {
        &self.iv
    }
}

impl SymmetricCipher for Aes256Cbc {
    fn shared_secret(&self) -> SharedSecret {
        SharedSecret::new(&self.key, &self.iv)
    }

    fn encrypt(&self, plaintext: &[u8]) -> EnvelopeResult<Vec<u8>> {
        let encryptor = Aes256CbcEnc::new_from_slices(self.key.as_bytes(), self.iv.as_bytes())
            .map_err(|e| EnvelopeError::CryptOperationFailed(e.to_string()))?;
        Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> EnvelopeResult<Vec<u8>> {
        let decryptor = Aes256CbcDec::new_from_slices(self.key.as_bytes(), self.iv.as_bytes())
            .map_err(|e| EnvelopeError::CryptOperationFailed(e.to_string()))?;
        decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|e| EnvelopeError::CryptOperationFailed(e.to_string()))
    }
}
