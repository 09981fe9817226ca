//! Application state structures
//!
//! State sub-structures that group the App's fields by concern.

use std::sync::Arc;
use std::time::Instant;

use crate::navigator::ClusterAction;
use crate::trace::{Resource, TraceError};
use crate::tui::views::manifest_yaml;

/// Which pane owns the screen
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pane {
    /// Before the first successful fetch
    Loading,
    Navigator,
    /// Manifest of one node
    Viewer,
    /// Fatal error; only quit is accepted
    Error,
}

/// View-related state (scrolling)
#[derive(Debug, Default)]
pub struct ViewState {
    /// First visible row of the navigator table
    pub table_scroll_offset: usize,
}

/// Manifest viewer contents
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub id: String,
    pub resource: Arc<Resource>,
    /// `{Kind}/{Name}`
    pub title: String,
    /// `apiVersion`
    pub side_title: String,
    /// Rendered manifest, rebuilt only when the resource changes
    pub yaml: String,
    pub scroll_offset: usize,
}

impl ViewerState {
    pub fn new(id: String, resource: Arc<Resource>) -> Self {
        Self {
            title: format!("{}/{}", resource.kind(), resource.name()),
            side_title: resource.api_version().to_string(),
            yaml: manifest_yaml(&resource),
            id,
            resource,
            scroll_offset: 0,
        }
    }

    /// Point the viewer at a refreshed copy of its node
    pub fn set_resource(&mut self, resource: Arc<Resource>) {
        if Arc::ptr_eq(&self.resource, &resource) {
            return;
        }
        self.side_title = resource.api_version().to_string();
        self.yaml = manifest_yaml(&resource);
        self.resource = resource;
    }
}

/// A cluster action waiting for a yes/no answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAction {
    pub action: ClusterAction,
    pub id: String,
    pub namespace: Option<String>,
}

impl PendingAction {
    pub fn confirmation_message(&self) -> String {
        format!("Are you sure you want to {} {}?", self.action.verb(), self.id)
    }
}

/// UI-related state (status messages, breadcrumb, confirmation)
#[derive(Debug, Default)]
pub struct UIState {
    /// Status message to display (message, is_error)
    pub status_message: Option<(String, bool)>,
    /// When status message was set (for auto-clearing)
    pub status_message_time: Option<Instant>,
    /// Breadcrumb of the focused row
    pub breadcrumb: Vec<String>,
    pub confirmation_pending: Option<PendingAction>,
}

/// Async operation state (pending fetch and its result channel)
#[derive(Debug, Default)]
pub struct AsyncOperationState {
    pub fetch_rx: Option<tokio::sync::oneshot::Receiver<Result<Resource, TraceError>>>,
}
