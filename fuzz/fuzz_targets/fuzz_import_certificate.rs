#![no_main]

use envelope::core::operations::pke::import_public_key;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary DER must be rejected cleanly, never panic
    let _ = import_public_key(data);
});
