#![no_main]

use farsikit_common::cipher::{decrypt, encrypt};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Arbitrary input is rejected or decrypts, never panics
        let _ = decrypt(text);

        let encrypted = encrypt(text).unwrap();
        assert_eq!(decrypt(&encrypted).unwrap(), text);
    }
});
