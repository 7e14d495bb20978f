//! User-row export: every row of `users` becomes one `user_data` log line.

use crate::config::DbConfig;
use crate::error::Result;
use crate::mysql::MySqlSource;
use crate::source::{CloseGuard, RowCursor, RowSource};
use pd_redact::{get_logger, Logger, LoggerRegistry};

/// Query run by the export.
pub const USERS_QUERY: &str = "SELECT * FROM users;";

/// Outcome of a completed export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    /// Rows logged.
    pub rows: usize,
}

/// Join a row into `col=value` tokens.
///
/// Tokens are concatenated with nothing between them, so a value that ends
/// where the next column name begins reads ambiguously. Consumers that need
/// per-field redaction of exported rows must account for that.
pub fn join_row<C, V>(columns: &[C], values: &[V]) -> String
where
    C: AsRef<str>,
    V: AsRef<str>,
{
    columns
        .iter()
        .zip(values)
        .map(|(column, value)| format!("{}={}", column.as_ref(), value.as_ref()))
        .collect()
}

/// Run [`USERS_QUERY`] on `source` and log each row at `Info` through `logger`.
///
/// The cursor and then the connection are closed exactly once on every
/// path, including when execution or a row fetch fails part way.
pub fn export_rows<S: RowSource>(source: S, logger: &Logger) -> Result<ExportSummary> {
    let conn = CloseGuard::new(source, "connection");
    let summary = log_users(conn, logger)?;
    tracing::info!(rows = summary.rows, "user rows exported");
    Ok(summary)
}

fn log_users<S: RowSource>(mut conn: CloseGuard<S>, logger: &Logger) -> Result<ExportSummary> {
    let mut cursor = CloseGuard::new(conn.execute(USERS_QUERY)?, "cursor");
    tracing::debug!(columns = cursor.column_names().len(), "query executed");

    let mut rows = 0;
    while let Some(values) = cursor.next_row()? {
        let message = join_row(cursor.column_names(), &values);
        logger.info(message.trim());
        rows += 1;
    }

    cursor.close()?;
    conn.close()?;
    Ok(ExportSummary { rows })
}

/// Connect with `config`, then export through the registry's `user_data` logger.
pub fn run_export(config: &DbConfig, registry: &mut LoggerRegistry) -> Result<ExportSummary> {
    let source = MySqlSource::connect(config)?;
    let logger = get_logger(registry);
    export_rows(source, &logger)
}
