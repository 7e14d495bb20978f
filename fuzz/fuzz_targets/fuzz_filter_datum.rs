//! Fuzz target for field redaction.
//!
//! Checks that redaction never panics, keeps the segment count, and leaves
//! an unterminated tail untouched.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pd_redact::filter_datum;

#[derive(Arbitrary, Debug)]
struct Input {
    fields: Vec<String>,
    redaction: String,
    message: String,
    separator: char,
}

fuzz_target!(|input: Input| {
    let out = filter_datum(&input.fields, &input.redaction, &input.message, input.separator);

    if input.redaction.contains(input.separator) {
        return;
    }

    assert_eq!(
        out.matches(input.separator).count(),
        input.message.matches(input.separator).count()
    );

    let tail_in = input.message.rsplit(input.separator).next().unwrap_or("");
    let tail_out = out.rsplit(input.separator).next().unwrap_or("");
    assert_eq!(tail_in, tail_out);
});
