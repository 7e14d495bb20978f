//! Output sinks for log records.

use crate::error::Result;
use crate::formatter::FormatRecord;
use crate::record::LogRecord;
use std::io::{self, Write};
use std::sync::Mutex;

/// Destination for formatted log records.
pub trait Sink: Send + Sync {
    fn emit(&self, record: &LogRecord) -> Result<()>;
}

/// Writes one formatted line per record to a stream.
pub struct StreamSink<W = io::Stderr> {
    writer: Mutex<W>,
    formatter: Box<dyn FormatRecord>,
}

impl StreamSink<io::Stderr> {
    /// Create a sink writing to stderr.
    pub fn stderr(formatter: impl FormatRecord + 'static) -> Self {
        Self::new(io::stderr(), formatter)
    }
}

impl<W: Write + Send> StreamSink<W> {
    /// Create a sink with a custom writer.
    pub fn new(writer: W, formatter: impl FormatRecord + 'static) -> Self {
        StreamSink {
            writer: Mutex::new(writer),
            formatter: Box::new(formatter),
        }
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn emit(&self, record: &LogRecord) -> Result<()> {
        let line = self.formatter.format(record);
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "sink writer lock poisoned"))?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

impl<W> std::fmt::Debug for StreamSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSink").finish_non_exhaustive()
    }
}
