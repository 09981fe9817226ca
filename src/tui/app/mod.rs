//! Application state and event handling
//!
//! `App` owns the navigator, the watch scheduler and all pane state. Input
//! and background results arrive as events; rendering reads the state back.

mod async_ops;
mod core;
mod events;
mod rendering;
pub mod state;

pub use async_ops::FetchSender;
pub use core::{App, AppOptions};
pub use events::{ActionKind, AppCommand, AppEvent, EventDumper};
pub use state::{Pane, PendingAction, ViewerState};
