//! Default configuration values

use super::schema::Config;

/// Command that prints a trace as JSON for `<kind>/<name>`
pub const DEFAULT_TRACE_COMMAND: &str = "crossplane beta trace -o json";

/// Seconds between fetches in watch mode
pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 5;

pub const DEFAULT_KUBECTL_BINARY: &str = "kubectl";

/// Get the default configuration
pub fn default_config() -> Config {
    Config::default()
}
