//! User-data export pipeline.
//!
//! Reads every row of the `users` table and writes one line per row to the
//! `user_data` logger from `pd-redact`, which redacts PII before anything
//! reaches its sink. Connection settings come from the environment
//! (`DB_USERNAME`, `DB_PASSWORD`, `DB_HOST`, `DB_NAME`).
//!
//! The pipeline is written against the [`RowSource`] and [`RowCursor`]
//! traits; [`MySqlSource`] is the production implementation. The cursor and
//! the connection are closed exactly once on every path.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod export;
pub mod logging;
pub mod mysql;
pub mod source;

pub use config::DbConfig;
pub use error::{ExportError, Result};
pub use exit_codes::ExitCode;
pub use export::{export_rows, join_row, run_export, ExportSummary, USERS_QUERY};
pub use mysql::{MySqlCursor, MySqlSource};
pub use source::{Close, CloseGuard, RowCursor, RowSource};
