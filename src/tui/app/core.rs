//! Application state and main TUI logic

use std::time::{Duration, Instant};

use super::state::{AsyncOperationState, Pane, PendingAction, UIState, ViewState, ViewerState};
use crate::navigator::{FetchScheduler, Navigator, SearchMode};
use crate::tui::Theme;
use crate::tui::constants::STATUS_MESSAGE_TIMEOUT_SECS;
use crate::tui::keybindings::InputContext;

/// Startup options for the application
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Hide the last-transition columns
    pub short: bool,
    pub watch: bool,
    pub watch_interval: Duration,
    pub show_help: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            short: false,
            watch: false,
            watch_interval: Duration::from_secs(crate::config::DEFAULT_WATCH_INTERVAL_SECS),
            show_help: true,
        }
    }
}

/// Main application state
pub struct App {
    pub(crate) pane: Pane,
    pub(crate) navigator: Navigator,
    pub(crate) scheduler: FetchScheduler,
    pub(crate) short: bool,
    pub(crate) theme: Theme,
    /// What the trace comes from, shown while loading
    pub(crate) source_description: String,
    pub(crate) error: Option<String>,

    pub(crate) viewer: Option<ViewerState>,
    pub(crate) view_state: ViewState,
    pub(crate) ui_state: UIState,
    pub(crate) async_state: AsyncOperationState,
}

impl App {
    pub fn new(source_description: impl Into<String>, options: AppOptions, now: Instant) -> Self {
        Self {
            pane: Pane::Loading,
            navigator: Navigator::new(options.show_help),
            scheduler: FetchScheduler::new(options.watch, options.watch_interval, now),
            short: options.short,
            theme: Theme::default(),
            source_description: source_description.into(),
            error: None,
            viewer: None,
            view_state: ViewState::default(),
            ui_state: UIState::default(),
            async_state: AsyncOperationState::default(),
        }
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn viewer(&self) -> Option<&ViewerState> {
        self.viewer.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn breadcrumb(&self) -> &[String] {
        &self.ui_state.breadcrumb
    }

    pub fn confirmation_pending(&self) -> Option<&PendingAction> {
        self.ui_state.confirmation_pending.as_ref()
    }

    pub fn status_message(&self) -> Option<&(String, bool)> {
        self.ui_state.status_message.as_ref()
    }

    pub fn is_watching(&self) -> bool {
        self.scheduler.is_watching()
    }

    pub fn fetch_in_flight(&self) -> bool {
        self.scheduler.in_flight()
    }

    /// Which key mapping applies right now
    pub fn input_context(&self) -> InputContext {
        if self.ui_state.confirmation_pending.is_some() {
            InputContext::Confirmation
        } else if self.pane == Pane::Navigator && self.navigator.mode() == SearchMode::Editing {
            InputContext::TextEntry
        } else {
            InputContext::Normal
        }
    }

    pub(crate) fn set_status_message(&mut self, message: String, is_error: bool, now: Instant) {
        if is_error {
            tracing::warn!("{}", message);
        }
        self.ui_state.status_message = Some((message, is_error));
        self.ui_state.status_message_time = Some(now);
    }

    pub(crate) fn expire_status_message(&mut self, now: Instant) {
        let expired = self.ui_state.status_message_time.is_some_and(|set_at| {
            now.duration_since(set_at) >= Duration::from_secs(STATUS_MESSAGE_TIMEOUT_SECS)
        });
        if expired {
            self.ui_state.status_message = None;
            self.ui_state.status_message_time = None;
        }
    }

    pub(crate) fn refresh_breadcrumb(&mut self) {
        self.ui_state.breadcrumb = self
            .navigator
            .current()
            .map(|row| row.path.clone())
            .unwrap_or_default();
    }
}
