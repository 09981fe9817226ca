//! Constants used throughout the TUI module

/// Status message timeout in seconds
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 4;

/// Rows kept visible above/below the cursor before the table scrolls
pub const SCROLL_BUFFER: usize = 2;

/// Input poll timeout in milliseconds; also the tick granularity
pub const EVENT_POLL_MS: u64 = 100;

/// Breadcrumb separator in the status bar
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// Confirmation dialog size (percent of the screen)
pub const CONFIRMATION_WIDTH_PERCENT: u16 = 60;
pub const CONFIRMATION_HEIGHT: u16 = 9;
