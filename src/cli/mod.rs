//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod logging;
mod trace;
mod version;

pub use commands::{ConfigSubcommand, handle_config_command};
pub use logging::{LoggingArgs, init_logging};
pub use trace::{TraceArgs, run_trace};
pub use version::display_version;
