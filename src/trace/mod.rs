//! Crossplane trace snapshots
//!
//! A trace is a point-in-time tree of a resource and everything it
//! transitively composes. This module models the tree, obtains it from a
//! trace command or a captured stream, and derives per-node status.

pub mod error;
pub mod manifest;
pub mod models;
pub mod parser;
pub mod source;
pub mod status;

pub use error::TraceError;
pub use manifest::{Manifest, Scalar};
pub use models::{Condition, PAUSED_ANNOTATION, Resource};
pub use source::{CommandTraceSource, ReaderTraceSource, TraceSource, TraceTarget};
pub use status::{KindClass, ResourceStatus, classify, derive_status};
