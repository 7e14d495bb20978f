//! The `key=value` redaction rule.
//!
//! A message is read as a run of segments, each terminated by the separator.
//! Inside a segment, the leftmost `field=` that starts a key is the match and
//! everything after its `=` is the value. A key starts at the segment start or
//! after any character that cannot continue a name (whitespace, punctuation,
//! digits). That covers a rendered log prefix such as
//! `"[HOLBERTON] user_data INFO 2019-11-19 18:24:25,105: name=bob;"`, a second
//! pair like `"user=42 password=hunter2;"`, and rows joined without a
//! separator like `"id=1name=Bob;"`.
//!
//! Rules:
//! - A trailing remainder with no terminating separator is never rewritten.
//! - Keys are case-sensitive and must not be the tail of a longer word.
//!   `username=bob;` is not touched by the field `name`.
//! - Fields are applied one after another, each pass on the previous output.
//!   A redaction token that contains the separator or `=` therefore changes
//!   how later passes segment the message. Callers should not do that.

use crate::field::FieldSpec;
use std::borrow::Cow;

/// Default replacement for redacted values.
pub const DEFAULT_REDACTION: &str = "***";

/// Default separator between `key=value` segments.
pub const DEFAULT_SEPARATOR: char = ';';

/// Replace the value of every `field=value<separator>` segment with `redaction`.
///
/// Never fails. An empty field list returns the message unchanged.
pub fn filter_datum<S: AsRef<str>>(
    fields: &[S],
    redaction: &str,
    message: &str,
    separator: char,
) -> String {
    let mut out = message.to_string();
    for field in fields {
        out = redact_field(&out, field.as_ref(), redaction, separator);
    }
    out
}

fn redact_field(message: &str, field: &str, redaction: &str, separator: char) -> String {
    if field.is_empty() {
        return message.to_string();
    }
    let pattern = format!("{}=", field);
    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(end) = rest.find(separator) {
        out.push_str(&rewrite_segment(&rest[..end], &pattern, redaction));
        out.push(separator);
        rest = &rest[end + separator.len_utf8()..];
    }

    // Unterminated tail
    out.push_str(rest);
    out
}

/// Redact the value after the leftmost `pattern` (`"<field>="`) that starts a key.
fn rewrite_segment<'a>(segment: &'a str, pattern: &str, redaction: &str) -> Cow<'a, str> {
    let found = segment
        .match_indices(pattern)
        .map(|(start, _)| start)
        .find(|&start| starts_key(segment, start));
    match found {
        Some(start) => {
            let value_start = start + pattern.len();
            Cow::Owned(format!("{}{}", &segment[..value_start], redaction))
        }
        None => Cow::Borrowed(segment),
    }
}

/// Whether a key may begin at byte `start` of `segment`.
fn starts_key(segment: &str, start: usize) -> bool {
    segment[..start]
        .chars()
        .next_back()
        .map_or(true, |prev| !continues_word(prev))
}

fn continues_word(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Redaction transform bound to a field list, token, and separator.
///
/// This is the plain `&str -> String` step that formatters compose with
/// record rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redactor {
    fields: FieldSpec,
    redaction: String,
    separator: char,
}

impl Redactor {
    /// Create a redactor with the default token (`***`) and separator (`;`).
    pub fn new(fields: FieldSpec) -> Self {
        Self {
            fields,
            redaction: DEFAULT_REDACTION.to_string(),
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Redactor for the PII field list.
    pub fn pii() -> Self {
        Self::new(FieldSpec::pii())
    }

    /// Set the replacement token.
    pub fn with_redaction(mut self, redaction: impl Into<String>) -> Self {
        self.redaction = redaction.into();
        self
    }

    /// Set the segment separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn fields(&self) -> &FieldSpec {
        &self.fields
    }

    pub fn redaction(&self) -> &str {
        &self.redaction
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Apply the redaction rule to `message`.
    pub fn redact(&self, message: &str) -> String {
        filter_datum(
            self.fields.fields(),
            &self.redaction,
            message,
            self.separator,
        )
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::pii()
    }
}
