//! Cluster actions and clipboard access
//!
//! Everything here is delegated to external programs or the system clipboard.
//! Failures are reported back to the coordinator and never touch navigator
//! state.

#[cfg(feature = "tui")]
pub mod clipboard;
pub mod kubectl;
pub mod shell;

use thiserror::Error;

pub use kubectl::Kubectl;
pub use shell::{ShellExecutor, SystemShell};

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: String },

    #[error("row {0:?} is not a valid resource identifier")]
    InvalidId(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}
