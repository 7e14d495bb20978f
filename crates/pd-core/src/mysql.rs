//! MySQL row source backed by sqlx.
//!
//! sqlx is async; the source owns a current-thread tokio runtime and blocks
//! on it, so the export stays single-threaded and synchronous. Query results
//! are fetched in full when the query executes.

use crate::config::DbConfig;
use crate::error::{ExportError, Result};
use crate::source::{Close, RowCursor, RowSource};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{Column, Connection, Row, TypeInfo, ValueRef};
use tokio::runtime::{Builder, Runtime};

/// Text written for SQL `NULL`.
pub const NULL_TEXT: &str = "None";

/// Build driver options from `config`.
pub fn connect_options(config: &DbConfig) -> MySqlConnectOptions {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .username(&config.user)
        .password(&config.password);
    match &config.database {
        Some(database) => options.database(database),
        None => options,
    }
}

/// An open MySQL connection.
pub struct MySqlSource {
    runtime: Runtime,
    conn: Option<MySqlConnection>,
}

impl MySqlSource {
    /// Connect using `config`. Driver errors come back as `ExportError::Connection`.
    pub fn connect(config: &DbConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let options = connect_options(config);

        tracing::debug!(host = %config.host, database = ?config.database, "connecting to mysql");
        let conn = runtime
            .block_on(MySqlConnection::connect_with(&options))
            .map_err(ExportError::connection)?;

        Ok(MySqlSource {
            runtime,
            conn: Some(conn),
        })
    }
}

impl RowSource for MySqlSource {
    type Cursor = MySqlCursor;

    fn execute(&mut self, query: &str) -> Result<MySqlCursor> {
        let conn = self
            .conn
            .as_mut()
            .ok_or_else(|| ExportError::query("connection already closed"))?;

        let rows = self
            .runtime
            .block_on(sqlx::query(query).fetch_all(&mut *conn))
            .map_err(ExportError::query)?;

        let columns = rows
            .first()
            .map(|row| {
                row.columns()
                    .iter()
                    .map(|column| column.name().to_string())
                    .collect()
            })
            .unwrap_or_default();

        Ok(MySqlCursor {
            columns,
            rows: rows.into_iter(),
        })
    }
}

impl Close for MySqlSource {
    fn close(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            self.runtime
                .block_on(conn.close())
                .map_err(|e| ExportError::close("connection", e))?;
        }
        Ok(())
    }
}

/// Buffered result rows of one query.
pub struct MySqlCursor {
    columns: Vec<String>,
    rows: std::vec::IntoIter<MySqlRow>,
}

impl RowCursor for MySqlCursor {
    fn column_names(&self) -> &[String] {
        &self.columns
    }

    fn next_row(&mut self) -> Result<Option<Vec<String>>> {
        let Some(row) = self.rows.next() else {
            return Ok(None);
        };
        let values = (0..row.len())
            .map(|idx| render_value(&row, idx))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(ExportError::row)?;
        Ok(Some(values))
    }
}

impl Close for MySqlCursor {
    fn close(&mut self) -> Result<()> {
        // Drop whatever was not consumed.
        self.rows = Vec::new().into_iter();
        Ok(())
    }
}

/// Render column `idx` of `row` as text.
fn render_value(row: &MySqlRow, idx: usize) -> std::result::Result<String, sqlx::Error> {
    let type_name = {
        let raw = row.try_get_raw(idx)?;
        if raw.is_null() {
            return Ok(NULL_TEXT.to_string());
        }
        raw.type_info().name().to_string()
    };

    let text = match type_name.as_str() {
        "BOOLEAN" => row.try_get::<bool, _>(idx)?.to_string(),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            row.try_get::<i64, _>(idx)?.to_string()
        }
        t if t.ends_with("UNSIGNED") => row.try_get::<u64, _>(idx)?.to_string(),
        "FLOAT" => row.try_get::<f32, _>(idx)?.to_string(),
        "DOUBLE" => row.try_get::<f64, _>(idx)?.to_string(),
        "DATETIME" | "TIMESTAMP" => row.try_get::<chrono::NaiveDateTime, _>(idx)?.to_string(),
        "DATE" => row.try_get::<chrono::NaiveDate, _>(idx)?.to_string(),
        "TIME" => row.try_get::<chrono::NaiveTime, _>(idx)?.to_string(),
        "YEAR" => row.try_get_unchecked::<u16, _>(idx)?.to_string(),
        "BIT" => bit_value(&row.try_get_unchecked::<Vec<u8>, _>(idx)?).to_string(),
        // Text, DECIMAL, JSON, ENUM and binary columns arrive as bytes.
        _ => match row.try_get_unchecked::<String, _>(idx) {
            Ok(text) => text,
            Err(_) => {
                let bytes = row.try_get_unchecked::<Vec<u8>, _>(idx)?;
                String::from_utf8_lossy(&bytes).into_owned()
            }
        },
    };
    Ok(text)
}

/// `BIT(n)` arrives as big-endian bytes.
fn bit_value(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
}
