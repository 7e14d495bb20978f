//! Fuzz target for field-list deserialization.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pd_redact::FieldSpec;

fuzz_target!(|data: &[u8]| {
    if let Ok(spec) = serde_json::from_slice::<FieldSpec>(data) {
        // Accepted lists serialize back to an equal list.
        let json = serde_json::to_string(&spec).unwrap();
        let again: FieldSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, again);
    }
});
