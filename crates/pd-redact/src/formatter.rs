//! Record rendering and the redacting formatter.
//!
//! Formatting is composition: a record is first rendered through the fixed
//! line template, then the whole rendered line goes through a [`Redactor`].
//! Redacting after rendering means a field value can never reach the output
//! through the template.

use crate::field::FieldSpec;
use crate::filter::{Redactor, DEFAULT_REDACTION, DEFAULT_SEPARATOR};
use crate::record::LogRecord;

/// Prefix of every rendered log line.
pub const LOG_PREFIX: &str = "[HOLBERTON]";

/// Timestamp layout, e.g. `2019-11-19 18:24:25,105`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Formatting hook used by sinks.
pub trait FormatRecord: Send + Sync {
    fn format(&self, record: &LogRecord) -> String;
}

impl<F> FormatRecord for F
where
    F: Fn(&LogRecord) -> String + Send + Sync,
{
    fn format(&self, record: &LogRecord) -> String {
        self(record)
    }
}

/// Render `record` as `[HOLBERTON] <logger> <LEVEL> <timestamp>: <message>`.
pub fn render_record(record: &LogRecord) -> String {
    format!(
        "{} {} {} {}: {}",
        LOG_PREFIX,
        record.name,
        record.level,
        record.created.format(TIMESTAMP_FORMAT),
        record.message
    )
}

/// Renders records without redaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl FormatRecord for PlainFormatter {
    fn format(&self, record: &LogRecord) -> String {
        render_record(record)
    }
}

/// Renders records and redacts the configured fields from the rendered line.
#[derive(Debug, Clone)]
pub struct RedactingFormatter {
    redactor: Redactor,
}

impl RedactingFormatter {
    /// Replacement token for redacted values.
    pub const REDACTION: &'static str = DEFAULT_REDACTION;

    /// Segment separator in log messages.
    pub const SEPARATOR: char = DEFAULT_SEPARATOR;

    /// Create a formatter redacting `fields` with `***` and `;`.
    pub fn new(fields: FieldSpec) -> Self {
        Self {
            redactor: Redactor::new(fields)
                .with_redaction(Self::REDACTION)
                .with_separator(Self::SEPARATOR),
        }
    }

    pub fn fields(&self) -> &FieldSpec {
        self.redactor.fields()
    }
}

impl FormatRecord for RedactingFormatter {
    fn format(&self, record: &LogRecord) -> String {
        self.redactor.redact(&render_record(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;
    use chrono::{Local, TimeZone};

    fn record(message: &str) -> LogRecord {
        let created = Local
            .with_ymd_and_hms(2019, 11, 19, 18, 24, 25)
            .single()
            .unwrap();
        LogRecord::new("my_logger", Level::Info, message).with_created(created)
    }

    #[test]
    fn test_render_template() {
        let line = render_record(&record("hello"));
        assert_eq!(line, "[HOLBERTON] my_logger INFO 2019-11-19 18:24:25,000: hello");
    }

    #[test]
    fn test_redacting_formatter_output() {
        let formatter = RedactingFormatter::new(FieldSpec::new(["email", "ssn", "password"]).unwrap());
        let msg = "name=Bob;email=bob@dylan.com;ssn=000-123-0000;password=bobbycool;";
        assert_eq!(
            formatter.format(&record(msg)),
            "[HOLBERTON] my_logger INFO 2019-11-19 18:24:25,000: \
             name=Bob;email=***;ssn=***;password=***;"
        );
    }

    #[test]
    fn test_redacting_formatter_never_leaks() {
        let formatter = RedactingFormatter::new(FieldSpec::pii());
        let out = formatter.format(&record("user=x;password=hunter2;"));
        assert!(out.contains("password=***;"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn test_first_segment_key_follows_prefix() {
        let formatter = RedactingFormatter::new(FieldSpec::pii());
        let out = formatter.format(&record("name=Bob;ip=1.2.3.4;"));
        assert!(out.ends_with(": name=***;ip=1.2.3.4;"), "got {out}");
    }

    #[test]
    fn test_closure_formatter() {
        let f = |r: &LogRecord| format!("{}|{}", r.level, r.message);
        assert_eq!(FormatRecord::format(&f, &record("m")), "INFO|m");
    }

    #[test]
    fn test_plain_formatter_keeps_values() {
        let out = PlainFormatter.format(&record("password=hunter2;"));
        assert!(out.contains("hunter2"));
    }
}
