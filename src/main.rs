//! xpnav - a terminal navigator for Crossplane resource traces
//!
//! Runs a trace-producing command (or reads a trace from stdin) and shows
//! the resource tree as a navigable table.

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use xpnav::config::ConfigLoader;

/// xpnav - a terminal navigator for Crossplane resource traces
#[derive(Parser, Debug)]
#[command(name = "xpnav")]
#[command(about = "A terminal navigator for Crossplane resource traces", long_about = None)]
struct Args {
    #[command(flatten)]
    logging: cli::LoggingArgs,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Trace a resource and browse the result
    Trace(cli::TraceArgs),
    /// Display version information
    Version,
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: cli::ConfigSubcommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (dispatch, log_file) = cli::init_logging(&args.logging)?;
    let _guard = tracing::dispatcher::set_default(&dispatch);

    // Print log file location before the TUI takes over the terminal
    if let Some(ref log_path) = log_file {
        eprintln!("Logging enabled. Logs written to: {}", log_path.display());
    }

    match args.command {
        Command::Version => {
            cli::display_version();
            Ok(())
        }
        Command::Config { subcommand } => cli::handle_config_command(subcommand),
        Command::Trace(trace_args) => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            tracing::debug!(?config, "Configuration loaded");
            cli::run_trace(trace_args, config).await
        }
    }
}
