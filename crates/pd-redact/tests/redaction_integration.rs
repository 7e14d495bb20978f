//! Integration tests for pd-redact.
//!
//! These tests verify:
//! - Canary PII values never leak through the redacting formatter
//! - The tokenizer rules hold for generated messages
//! - Field specs and redactors compose the same way `filter_datum` does

use pd_redact::{
    filter_datum, FieldSpec, FormatRecord, Level, LogRecord, RedactingFormatter, Redactor,
    PII_FIELDS,
};
use proptest::prelude::*;

/// Canary values that must NEVER appear in formatted output.
const CANARY_ROWS: &[(&str, &str)] = &[
    ("name", "Marlene Wood"),
    ("email", "hwestiii@att.net"),
    ("phone", "(473) 401-4253"),
    ("ssn", "261-72-6780"),
    ("password", "K5?BMNv"),
];

fn canary_message() -> String {
    let mut msg = String::new();
    for (field, value) in CANARY_ROWS {
        msg.push_str(&format!("{}={};", field, value));
    }
    msg.push_str("ip=60ed:c396:2ff:244:bbd0:9208:26f2:93ea;");
    msg.push_str("last_login=2019-11-14 06:14:24;");
    msg.push_str("user_agent=Mozilla/5.0 (Windows NT 10.0; WOW64; Trident/7.0; rv:11.0) like Gecko;");
    msg
}

// ============================================================================
// Canary Leak Tests
// ============================================================================

#[test]
fn test_canary_pii_never_leaks_through_formatter() {
    let formatter = RedactingFormatter::new(FieldSpec::pii());
    let record = LogRecord::new("user_data", Level::Info, canary_message());
    let out = formatter.format(&record);

    for (field, value) in CANARY_ROWS {
        assert!(
            !out.contains(value),
            "Canary '{}' for field '{}' leaked: {}",
            value,
            field,
            out
        );
        assert!(out.contains(&format!("{}=***;", field)));
    }
    assert!(out.contains("ip=60ed:c396:2ff:244:bbd0:9208:26f2:93ea;"));
    assert!(out.contains("last_login=2019-11-14 06:14:24;"));
}

#[test]
fn test_formatter_matches_manual_pipeline() {
    let formatter = RedactingFormatter::new(FieldSpec::pii());
    let record = LogRecord::new("user_data", Level::Info, canary_message());

    let rendered = pd_redact::render_record(&record);
    let manual = filter_datum(&PII_FIELDS, "***", &rendered, ';');
    assert_eq!(formatter.format(&record), manual);
}

#[test]
fn test_password_hunter2() {
    let formatter = RedactingFormatter::new(FieldSpec::pii());
    let record = LogRecord::new("user_data", Level::Info, "name=al;password=hunter2;");
    let out = formatter.format(&record);
    assert!(out.contains("password=***;"));
    assert!(!out.contains("hunter2"));
}

#[test]
fn test_second_pair_in_segment_never_leaks() {
    let formatter = RedactingFormatter::new(FieldSpec::pii());
    let record = LogRecord::new("user_data", Level::Info, "user=42 password=hunter2;");
    let out = formatter.format(&record);
    assert!(out.ends_with(": user=42 password=***;"), "{}", out);
    assert!(!out.contains("hunter2"));
}

#[test]
fn test_canary_row_joined_without_separator() {
    // Columns concatenated as `c=v` with values ending in the separator.
    let formatter = RedactingFormatter::new(FieldSpec::pii());
    let mut msg = String::from("id=1");
    for (field, value) in CANARY_ROWS {
        msg.push_str(&format!("{}={};", field, value));
    }
    let out = formatter.format(&LogRecord::new("user_data", Level::Info, msg));

    for (field, value) in CANARY_ROWS {
        assert!(!out.contains(value), "'{}' leaked: {}", field, out);
    }
    assert!(out.contains("id=1name=***;"));
}

#[test]
fn test_redactor_and_filter_datum_agree() {
    let spec = FieldSpec::new(["email", "ssn"]).unwrap();
    let redactor = Redactor::new(spec.clone()).with_redaction("xxx");
    let msg = "email=a@b.com;ssn=123;other=ok;";

    assert_eq!(
        redactor.redact(msg),
        filter_datum(spec.fields(), "xxx", msg, ';')
    );
    assert_eq!(redactor.redact(msg), "email=xxx;ssn=xxx;other=ok;");
}

#[test]
fn test_field_order_does_not_change_result_for_plain_tokens() {
    let msg = "name=a;email=b;phone=c;ssn=d;password=e;";
    let forward = filter_datum(&PII_FIELDS, "***", msg, ';');
    let mut reversed = PII_FIELDS;
    reversed.reverse();
    let backward = filter_datum(&reversed, "***", msg, ';');
    assert_eq!(forward, backward);
    assert_eq!(forward, "name=***;email=***;phone=***;ssn=***;password=***;");
}

// ============================================================================
// Property Tests
// ============================================================================

fn key() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9@.:_-]{0,12}"
}

proptest! {
    #[test]
    fn prop_empty_field_list_is_identity(msg in ".*") {
        let fields: [&str; 0] = [];
        prop_assert_eq!(filter_datum(&fields, "***", &msg, ';'), msg);
    }

    #[test]
    fn prop_absent_field_is_noop(pairs in prop::collection::vec((key(), value()), 0..6)) {
        let msg: String = pairs.iter().map(|(k, v)| format!("{}={};", k, v)).collect();
        // Keys are lowercase letters only, so this field can never match.
        prop_assert_eq!(filter_datum(&["Absent_1"], "***", &msg, ';'), msg);
    }

    #[test]
    fn prop_target_values_are_all_redacted(
        pairs in prop::collection::vec((key(), value()), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = pairs[pick.index(pairs.len())].0.clone();
        let msg: String = pairs.iter().map(|(k, v)| format!("{}={};", k, v)).collect();
        let out = filter_datum(&[target.as_str()], "***", &msg, ';');

        let segments: Vec<&str> = out.split(';').collect();
        prop_assert_eq!(segments.len(), pairs.len() + 1);
        for ((k, v), seg) in pairs.iter().zip(&segments) {
            if *k == target {
                prop_assert_eq!(*seg, format!("{}=***", k));
            } else {
                prop_assert_eq!(*seg, format!("{}={}", k, v));
            }
        }
    }

    #[test]
    fn prop_segment_count_preserved(msg in "[a-z=;]{0,40}") {
        let out = filter_datum(&PII_FIELDS, "***", &msg, ';');
        prop_assert_eq!(out.matches(';').count(), msg.matches(';').count());
    }
}
