//! Errors raised while obtaining a trace snapshot

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace command ran but exited unsuccessfully
    #[error("trace command `{command}` failed ({status}): {output}")]
    Fetch {
        command: String,
        status: String,
        output: String,
    },

    /// The trace command could not be started
    #[error("failed to run trace command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("trace command is empty")]
    EmptyCommand,

    #[error("failed to read trace input: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed trace: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid target {0:?}: argument must be on the format '<kind>/<name>' or '<kind> <name>'")]
    InvalidTarget(String),
}

impl TraceError {
    /// True for errors that happen before any fetch is attempted
    pub fn is_usage_error(&self) -> bool {
        matches!(self, TraceError::InvalidTarget(_) | TraceError::EmptyCommand)
    }
}
