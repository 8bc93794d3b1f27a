#![no_main]

use envelope::core::types::SharedSecret;
use envelope::{Aes256Cbc, SymmetricCipher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let cipher = match Aes256Cbc::from_parts(&[0x42; 32], &[0x24; 16]) {
        Ok(cipher) => cipher,
        Err(_) => return,
    };
    let _ = cipher.decrypt(data);
    let _ = cipher.decrypt_to_string(data);

    // Unwrapped secrets come from the network too
    let _ = Aes256Cbc::from_shared_secret(&SharedSecret::from_encoded(data.to_vec()));
});
