//! Logging initialization
//!
//! The TUI owns stdout and stderr, so logs only ever go to a file. The
//! subscriber is returned as a `Dispatch` for the caller to install as a
//! scoped default rather than being registered globally.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Logging flags shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct LoggingArgs {
    /// Write debug logs to a temporary file
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Default log filter (RUST_LOG takes precedence)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Build the log dispatcher
///
/// Returns the dispatcher together with the log file path, or a no-op
/// dispatcher and `None` when logging is disabled.
pub fn init_logging(args: &LoggingArgs) -> Result<(Dispatch, Option<PathBuf>)> {
    let path = match (&args.log, args.debug) {
        (Some(path), _) => path.clone(),
        (None, true) => debug_log_path(),
        (None, false) => return Ok((Dispatch::none(), None)),
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let default_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| if args.debug { "debug" } else { "info" }.to_string());
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&default_level)
            .with_context(|| format!("Invalid log level: {default_level}"))?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    Ok((Dispatch::new(subscriber), Some(path)))
}

/// A named temp file that outlives the process
fn debug_log_path() -> PathBuf {
    tempfile::Builder::new()
        .prefix("xpnav-")
        .suffix(".log")
        .tempfile()
        .and_then(|f| f.keep().map_err(|e| e.error))
        .map(|(_, path)| path)
        .unwrap_or_else(|_| std::env::temp_dir().join(format!("xpnav-{}.log", std::process::id())))
}
