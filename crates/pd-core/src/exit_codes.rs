//! Exit codes for the `pd-export` binary.
//!
//! Exit code ranges:
//! - 0: Success
//! - 10-19: Environment errors (recoverable by fixing the database or its settings)
//! - 20-29: Local failures (I/O, resource release)

use crate::error::ExportError;

/// Exit codes for pd-export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every row exported
    Clean = 0,

    /// Bad command-line arguments
    ArgsError = 10,

    /// Could not connect to the database
    ConnectionError = 11,

    /// Query or row fetch failed
    QueryError = 12,

    /// Local I/O or resource release failure
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Codes 10-19.
    pub fn is_user_error(self) -> bool {
        (10..20).contains(&(self as i32))
    }

    /// Codes 20-29.
    pub fn is_internal_error(self) -> bool {
        (self as i32) >= 20
    }

    /// Get the error code name as a string constant.
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ConnectionError => "ERR_CONNECTION",
            ExitCode::QueryError => "ERR_QUERY",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<&ExportError> for ExitCode {
    fn from(err: &ExportError) -> Self {
        match err {
            ExportError::Connection(_) => ExitCode::ConnectionError,
            ExportError::Query(_) | ExportError::Row(_) => ExitCode::QueryError,
            ExportError::Close { .. } | ExportError::Io(_) => ExitCode::IoError,
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
