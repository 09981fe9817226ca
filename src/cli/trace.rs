//! The `trace` command: resolve settings, build the source, run the TUI

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use xpnav::actions::{Kubectl, SystemShell};
use xpnav::config::Config;
use xpnav::trace::{CommandTraceSource, ReaderTraceSource, TraceSource, TraceTarget};
use xpnav::tui::{AppOptions, TerminalOptions, run_tui};

#[derive(Args, Debug, Clone, Default)]
pub struct TraceArgs {
    /// Resource to trace, as `<kind>/<name>` or `<kind> <name>`
    #[arg(value_name = "TARGET", num_args = 0..=2)]
    pub target: Vec<String>,

    /// Trace-producing command; namespace, context and target are appended
    #[arg(long = "cmd", value_name = "COMMAND")]
    pub command: Option<String>,

    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Kubeconfig context for the trace command and kubectl actions
    #[arg(long)]
    pub context: Option<String>,

    /// Read a single JSON trace from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Hide the last-transition columns
    #[arg(long)]
    pub short: bool,

    /// Re-run the trace periodically
    #[arg(long, short = 'w')]
    pub watch: bool,

    /// Seconds between watch refreshes
    #[arg(long, value_name = "SECS")]
    pub watch_interval: Option<u64>,

    /// Append every UI event to this file
    #[arg(long, value_name = "PATH")]
    pub dump: Option<PathBuf>,
}

/// Settings after CLI flags are layered over the loaded config
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSettings {
    pub command: String,
    pub short: bool,
    pub watch: bool,
    pub watch_interval: Duration,
}

pub fn resolve(args: &TraceArgs, config: &Config) -> Result<TraceSettings> {
    let interval = args.watch_interval.unwrap_or(config.watch_interval);
    if interval == 0 {
        anyhow::bail!("--watch-interval must be at least 1 second");
    }
    Ok(TraceSettings {
        command: args
            .command
            .clone()
            .unwrap_or_else(|| config.trace_command.clone()),
        short: args.short || config.short_columns,
        watch: args.watch,
        watch_interval: Duration::from_secs(interval),
    })
}

/// Pick the trace source; target errors surface here, before any fetch
pub fn build_source(args: &TraceArgs, settings: &TraceSettings) -> Result<Arc<dyn TraceSource>> {
    if args.stdin {
        if !args.target.is_empty() {
            tracing::warn!(targets = ?args.target, "Ignoring target when reading from stdin");
        }
        let source = ReaderTraceSource::from_reader("stdin", std::io::stdin().lock())
            .context("Failed to read trace from stdin")?;
        return Ok(Arc::new(source));
    }

    let target = TraceTarget::from_args(&args.target)?;
    let source = CommandTraceSource::new(
        &settings.command,
        args.namespace.as_deref(),
        args.context.as_deref(),
        &target,
    )?;
    Ok(Arc::new(source))
}

pub async fn run_trace(args: TraceArgs, config: Config) -> Result<()> {
    let settings = resolve(&args, &config)?;
    let source = build_source(&args, &settings)?;
    tracing::info!(source = %source.describe(), watch = settings.watch, "Starting trace navigator");

    let shell = Arc::new(SystemShell::new(config.kubectl.pager.clone()));
    let kubectl = Kubectl::new(config.kubectl.binary.clone(), args.context.clone(), shell);

    let options = AppOptions {
        short: settings.short,
        watch: settings.watch,
        watch_interval: settings.watch_interval,
        show_help: config.ui.show_help,
    };
    let terminal_options = TerminalOptions {
        enable_mouse: config.ui.enable_mouse,
        dump: args.dump.clone(),
    };

    run_tui(source, kubectl, options, terminal_options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpnav::TraceError;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            watch_interval: 10,
            ..Config::default()
        };
        let args = TraceArgs {
            command: Some("kubectl crossplane trace -o json".to_string()),
            watch_interval: Some(2),
            watch: true,
            ..TraceArgs::default()
        };
        let settings = resolve(&args, &config).unwrap();
        assert_eq!(settings.command, "kubectl crossplane trace -o json");
        assert_eq!(settings.watch_interval, Duration::from_secs(2));
        assert!(settings.watch);
    }

    #[test]
    fn test_config_supplies_defaults() {
        let config = Config {
            short_columns: true,
            ..Config::default()
        };
        let settings = resolve(&TraceArgs::default(), &config).unwrap();
        assert_eq!(settings.command, config.trace_command);
        assert!(settings.short);
        assert_eq!(settings.watch_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let args = TraceArgs {
            watch_interval: Some(0),
            ..TraceArgs::default()
        };
        assert!(resolve(&args, &Config::default()).is_err());
    }

    #[test]
    fn test_malformed_target_fails_before_fetch() {
        let args = TraceArgs {
            target: strings(&["claim"]),
            ..TraceArgs::default()
        };
        let settings = resolve(&args, &Config::default()).unwrap();
        let err = match build_source(&args, &settings) {
            Ok(_) => panic!("expected invalid target"),
            Err(err) => err,
        };
        assert!(matches!(
            err.downcast_ref::<TraceError>(),
            Some(TraceError::InvalidTarget(_))
        ));
    }
}
