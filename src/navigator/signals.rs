//! Inbound actions and outbound signals of the navigator

use std::sync::Arc;

use crate::trace::models::Resource;

/// Cluster operations delegated to kubectl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterAction {
    GetManifest,
    Describe,
    Edit,
    Delete,
}

impl ClusterAction {
    pub fn verb(self) -> &'static str {
        match self {
            ClusterAction::GetManifest => "get",
            ClusterAction::Describe => "describe",
            ClusterAction::Edit => "edit",
            ClusterAction::Delete => "delete",
        }
    }

    /// Destructive actions need an explicit confirmation first
    pub fn needs_confirmation(self) -> bool {
        self == ClusterAction::Delete
    }
}

/// Logical key surface, decoupled from concrete key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    StartSearch,
    TextInput(char),
    TextBackspace,
    ConfirmSearch,
    Cancel,
    NextMatch,
    PrevMatch,
    Copy,
    Show,
    Cluster(ClusterAction),
    ToggleHelp,
    /// Leave the current pane, or the program from the navigator
    Quit,
    /// Exit the program from any pane
    ForceQuit,
    /// Answer "yes" to a pending confirmation
    Accept,
    /// Answer "no" to a pending confirmation
    Reject,
}

/// Signals emitted by the navigator for its coordinator
#[derive(Debug, Clone, PartialEq)]
pub enum NavigatorSignal {
    FocusChanged { id: String, resource: Arc<Resource> },
    Selected { id: String, resource: Arc<Resource> },
    Copied { id: String },
    Action {
        action: ClusterAction,
        id: String,
        resource: Arc<Resource>,
    },
    Quit,
}
