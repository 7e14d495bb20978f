//! PII redaction for user-data log lines.
//!
//! This crate rewrites `field=value;` segments of a log message so that
//! personally-identifiable values never reach a log sink, and provides the
//! small logging surface (records, formatters, sinks, named loggers) that the
//! user-data export writes through.
//!
//! # Key Features
//!
//! - **Explicit tokenizer**: `filter_datum` splits messages on the separator
//!   and matches keys exactly instead of relying on pattern-engine semantics.
//! - **Redact after render**: `RedactingFormatter` renders the full log line
//!   first and redacts the rendered text.
//! - **Explicit registry**: `LoggerRegistry::get_or_create` configures a
//!   logger once; `get_logger` never stacks duplicate sinks.
//!
//! # Example
//!
//! ```
//! use pd_redact::{filter_datum, get_logger_with_writer, LoggerRegistry};
//!
//! let out = filter_datum(&["password"], "***", "name=bob;password=secret;", ';');
//! assert_eq!(out, "name=bob;password=***;");
//!
//! let mut registry = LoggerRegistry::new();
//! let logger = get_logger_with_writer(&mut registry, std::io::sink());
//! logger.info("email=bob@example.com;");
//! ```

pub mod error;
pub mod field;
pub mod filter;
pub mod formatter;
pub mod logger;
pub mod record;
pub mod sink;

pub use error::{RedactionError, Result};
pub use field::{FieldSpec, PII_FIELDS};
pub use filter::{filter_datum, Redactor, DEFAULT_REDACTION, DEFAULT_SEPARATOR};
pub use formatter::{
    render_record, FormatRecord, PlainFormatter, RedactingFormatter, LOG_PREFIX,
    TIMESTAMP_FORMAT,
};
pub use logger::{
    get_logger, get_logger_with_writer, plain_root, Logger, LoggerBuilder, LoggerRegistry,
    ROOT_LOGGER, USER_DATA_LOGGER,
};
pub use record::{Level, LogRecord};
pub use sink::{Sink, StreamSink};
