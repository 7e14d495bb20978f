//! Named loggers and the explicit logger registry.
//!
//! There is no process-wide registry: callers own a [`LoggerRegistry`] and
//! pass it where loggers are needed. `get_or_create` configures a logger
//! exactly once, so asking for the same name twice never attaches a second
//! sink.

use crate::field::FieldSpec;
use crate::formatter::{PlainFormatter, RedactingFormatter};
use crate::record::{Level, LogRecord};
use crate::sink::{Sink, StreamSink};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

/// Name of the logger that emits exported user rows.
pub const USER_DATA_LOGGER: &str = "user_data";

/// Name of the registry's root logger.
pub const ROOT_LOGGER: &str = "root";

/// A named logger with a severity threshold and a set of sinks.
pub struct Logger {
    name: String,
    level: Level,
    propagate: bool,
    parent: Option<Arc<Logger>>,
    sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether records are forwarded to the parent's sinks.
    pub fn propagates(&self) -> bool {
        self.propagate
    }

    pub fn parent(&self) -> Option<&Arc<Logger>> {
        self.parent.as_ref()
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Log `message` at `level`. Records below the threshold are dropped.
    pub fn log(&self, level: Level, message: impl Into<String>) {
        if !self.is_enabled_for(level) {
            return;
        }
        let record = LogRecord::new(self.name.as_str(), level, message);
        self.handle(&record);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: impl Into<String>) {
        self.log(Level::Critical, message);
    }

    /// Emit an already-built record to this logger's sinks and, when
    /// propagating, to its ancestors'. Ancestor thresholds do not apply.
    pub fn handle(&self, record: &LogRecord) {
        for sink in &self.sinks {
            if let Err(e) = sink.emit(record) {
                tracing::warn!(logger = %self.name, error = %e, "failed to write log record");
            }
        }
        if self.propagate {
            if let Some(parent) = &self.parent {
                parent.handle(record);
            }
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("propagate", &self.propagate)
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// Builder for [`Logger`].
pub struct LoggerBuilder {
    name: String,
    level: Level,
    propagate: bool,
    parent: Option<Arc<Logger>>,
    sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    fn new(name: impl Into<String>) -> Self {
        LoggerBuilder {
            name: name.into(),
            level: Level::default(),
            propagate: true,
            parent: None,
            sinks: Vec::new(),
        }
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }

    pub fn parent(mut self, parent: Arc<Logger>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            level: self.level,
            propagate: self.propagate,
            parent: self.parent,
            sinks: self.sinks,
        }
    }
}

/// Owner of named loggers.
#[derive(Debug)]
pub struct LoggerRegistry {
    root: Arc<Logger>,
    loggers: HashMap<String, Arc<Logger>>,
}

impl LoggerRegistry {
    /// Registry whose root logger has no sinks.
    pub fn new() -> Self {
        Self::with_root(Logger::builder(ROOT_LOGGER).build())
    }

    /// Registry with a caller-built root logger.
    pub fn with_root(root: Logger) -> Self {
        LoggerRegistry {
            root: Arc::new(root),
            loggers: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Arc<Logger> {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        if name == ROOT_LOGGER {
            return Some(Arc::clone(&self.root));
        }
        self.loggers.get(name).cloned()
    }

    /// Return the logger called `name`, building it with `configure` if it
    /// does not exist yet. `configure` runs at most once per name.
    ///
    /// New loggers get the root logger as their parent.
    pub fn get_or_create<F>(&mut self, name: &str, configure: F) -> Arc<Logger>
    where
        F: FnOnce(LoggerBuilder) -> LoggerBuilder,
    {
        if let Some(existing) = self.get(name) {
            return existing;
        }

        let builder = Logger::builder(name).parent(Arc::clone(&self.root));
        let logger = Arc::new(configure(builder).build());
        self.loggers.insert(name.to_string(), Arc::clone(&logger));
        tracing::debug!(
            logger = name,
            sinks = logger.sink_count(),
            "registered logger"
        );
        logger
    }

    /// Number of named loggers, not counting the root.
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The `user_data` logger: `Info` threshold, no propagation, and one stderr
/// sink that redacts the PII fields.
pub fn get_logger(registry: &mut LoggerRegistry) -> Arc<Logger> {
    registry.get_or_create(USER_DATA_LOGGER, |builder| {
        configure_user_data(builder, StreamSink::stderr(pii_formatter()))
    })
}

/// Same as [`get_logger`] but writing to `writer` instead of stderr.
pub fn get_logger_with_writer<W>(registry: &mut LoggerRegistry, writer: W) -> Arc<Logger>
where
    W: Write + Send + 'static,
{
    registry.get_or_create(USER_DATA_LOGGER, |builder| {
        configure_user_data(builder, StreamSink::new(writer, pii_formatter()))
    })
}

fn configure_user_data(builder: LoggerBuilder, sink: impl Sink + 'static) -> LoggerBuilder {
    builder.level(Level::Info).propagate(false).sink(sink)
}

fn pii_formatter() -> RedactingFormatter {
    RedactingFormatter::new(FieldSpec::pii())
}

/// A root logger writing unredacted lines to `writer`.
pub fn plain_root<W>(writer: W) -> Logger
where
    W: Write + Send + 'static,
{
    Logger::builder(ROOT_LOGGER)
        .sink(StreamSink::new(writer, PlainFormatter))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_get_logger_configuration() {
        let mut registry = LoggerRegistry::new();
        let logger = get_logger(&mut registry);

        assert_eq!(logger.name(), "user_data");
        assert_eq!(logger.level(), Level::Info);
        assert!(!logger.propagates());
        assert_eq!(logger.sink_count(), 1);
        assert_eq!(logger.parent().map(|p| p.name()), Some("root"));
    }

    #[test]
    fn test_get_logger_is_idempotent() {
        let mut registry = LoggerRegistry::new();
        let first = get_logger(&mut registry);
        let second = get_logger(&mut registry);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.sink_count(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_configure_runs_once() {
        let mut registry = LoggerRegistry::new();
        let mut calls = 0;
        for _ in 0..3 {
            registry.get_or_create("audit", |b| {
                calls += 1;
                b
            });
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_threshold_drops_debug() {
        let buf = SharedBuf::default();
        let mut registry = LoggerRegistry::new();
        let logger = get_logger_with_writer(&mut registry, buf.clone());

        logger.debug("name=hidden;");
        assert_eq!(buf.contents(), "");

        logger.info("name=bob;ip=1.1.1.1;");
        let out = buf.contents();
        assert!(out.contains("user_data INFO"));
        assert!(out.ends_with("name=***;ip=1.1.1.1;\n"));
    }

    #[test]
    fn test_non_propagating_logger_skips_root() {
        let root_buf = SharedBuf::default();
        let mut registry = LoggerRegistry::with_root(plain_root(root_buf.clone()));
        let logger = get_logger_with_writer(&mut registry, io::sink());

        logger.info("password=hunter2;");
        assert_eq!(root_buf.contents(), "");
    }

    #[test]
    fn test_propagating_logger_reaches_root() {
        let root_buf = SharedBuf::default();
        let mut registry = LoggerRegistry::with_root(plain_root(root_buf.clone()));
        let logger = registry.get_or_create("app", |b| b.level(Level::Debug));

        logger.debug("hello");
        assert!(root_buf.contents().contains("[HOLBERTON] app DEBUG "));
        assert!(root_buf.contents().ends_with(": hello\n"));
    }

    #[test]
    fn test_root_lookup() {
        let mut registry = LoggerRegistry::new();
        let root = registry.get_or_create(ROOT_LOGGER, |b| b.level(Level::Debug));
        assert!(Arc::ptr_eq(&root, registry.root()));
        assert_eq!(root.level(), Level::Warning);
        assert!(registry.is_empty());
    }
}
