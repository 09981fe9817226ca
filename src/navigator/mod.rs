//! Trace navigator core
//!
//! Flattens a trace tree into display rows, picks the column layout and
//! drives cursor movement and search over the rows.

pub mod flatten;
pub mod layout;
pub mod signals;
pub mod state;
pub mod watch;

pub use flatten::{DisplayRow, Flattened, RowColor, count_nodes, flatten, format_timestamp};
pub use layout::{Column, ColumnKey, ColumnLayout};
pub use signals::{ClusterAction, KeyAction, NavigatorSignal};
pub use state::{Navigator, SearchMode};
pub use watch::FetchScheduler;
