//! Fuzz target for stored bcrypt hash parsing.
//!
//! Parsing must never panic, and an accepted hash must keep its text intact.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pd_password::{PasswordHash, PasswordHasher};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(hash) = PasswordHash::parse(text) {
        assert_eq!(hash.as_str(), text);
        assert_eq!(hash.salt().len(), 22);
        // Cheap costs only; verification must not panic on garbage salts.
        if hash.cost() <= 6 {
            let _ = PasswordHasher::new().verify(&hash, text);
        }
    }
});
