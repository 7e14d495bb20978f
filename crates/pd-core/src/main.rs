//! pd-export: log every row of the `users` table with PII redacted.
//!
//! Database settings are read from `DB_USERNAME`, `DB_PASSWORD`, `DB_HOST`
//! and `DB_NAME`. Exported rows go to stderr through the `user_data` logger.

use clap::error::ErrorKind;
use clap::Parser;
use pd_core::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use pd_core::{run_export, DbConfig, ExitCode};
use pd_redact::LoggerRegistry;

/// Export user rows to the redacting user_data log
#[derive(Parser, Debug)]
#[command(name = "pd-export")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase diagnostic verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report diagnostic errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Diagnostic log format (human or jsonl)
    #[arg(long, env = "PD_LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn log_level(&self) -> Option<LogLevel> {
        if self.quiet {
            return Some(LogLevel::Error);
        }
        match self.verbose {
            0 => None,
            1 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(ExitCode::ArgsError.as_i32());
        }
    };

    let log_config = LogConfig::from_env(cli.log_level(), cli.log_format);
    init_logging(&log_config);

    let db_config = DbConfig::from_env();
    tracing::debug!(config = ?db_config, "database settings loaded");

    let mut registry = LoggerRegistry::new();
    let exit_code = match run_export(&db_config, &mut registry) {
        Ok(summary) => {
            tracing::debug!(rows = summary.rows, "export finished");
            ExitCode::Clean
        }
        Err(e) => {
            let code = ExitCode::from(&e);
            tracing::error!(error = %e, code = %code, "export failed");
            code
        }
    };

    std::process::exit(exit_code.as_i32());
}
