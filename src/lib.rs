//! Crossplane trace navigator library
//!
//! The headless core (trace model, status derivation, flattening, the
//! navigator state machine and cluster actions) is always available. The
//! terminal UI is behind the default `tui` feature.

pub mod actions;
pub mod config;
pub mod navigator;
pub mod trace;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use navigator::{DisplayRow, Flattened, Navigator, flatten};
pub use trace::{Resource, TraceError, TraceSource, TraceTarget};
