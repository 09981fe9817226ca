//! Event handling
//!
//! Every input (keystroke, resize, tick, fetch completion, action outcome)
//! arrives as an [`AppEvent`] and is dispatched on the active pane. Handlers
//! return [`AppCommand`]s for the run loop to execute; they never block.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use super::core::App;
use super::state::{Pane, PendingAction, ViewerState};
use crate::actions::ActionError;
use crate::navigator::{ClusterAction, KeyAction, NavigatorSignal, flatten};
use crate::trace::{Resource, TraceError};

/// What an action outcome refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Cluster(ClusterAction),
    Copy,
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyAction),
    Resize { width: u16, height: u16 },
    Tick(Instant),
    TraceFetched {
        result: Result<Resource, TraceError>,
        at: Instant,
    },
    ActionFinished {
        kind: ActionKind,
        id: String,
        result: Result<(), ActionError>,
        at: Instant,
    },
}

/// Side effects requested by the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    FetchTrace,
    RunAction {
        action: ClusterAction,
        namespace: Option<String>,
        id: String,
    },
    Copy(String),
}

impl App {
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<AppCommand> {
        match event {
            AppEvent::Tick(now) => self.on_tick(now),
            // Layout is recomputed from the frame on the next draw
            AppEvent::Resize { .. } => Vec::new(),
            AppEvent::TraceFetched { result, at } => {
                self.on_trace_fetched(result, at);
                Vec::new()
            }
            AppEvent::ActionFinished {
                kind,
                id,
                result,
                at,
            } => {
                self.on_action_finished(kind, &id, result, at);
                Vec::new()
            }
            AppEvent::Key(KeyAction::ForceQuit) => vec![AppCommand::Quit],
            AppEvent::Key(action) => match self.pane {
                Pane::Loading | Pane::Error => self.on_key_quit_only(action),
                Pane::Navigator => self.on_navigator_key(action),
                Pane::Viewer => self.on_viewer_key(action),
            },
        }
    }

    fn on_tick(&mut self, now: Instant) -> Vec<AppCommand> {
        self.expire_status_message(now);
        if self.scheduler.should_fetch(now) {
            tracing::debug!(source = %self.source_description, "Fetching trace");
            vec![AppCommand::FetchTrace]
        } else {
            Vec::new()
        }
    }

    fn on_trace_fetched(&mut self, result: Result<Resource, TraceError>, at: Instant) {
        self.scheduler.complete(at);
        match result {
            Ok(root) => {
                let flattened = flatten(&Arc::new(root), self.short);
                tracing::debug!(rows = flattened.rows.len(), "Trace refreshed");
                self.navigator.set_rows(flattened);
                self.refresh_viewer();
                self.refresh_breadcrumb();
                if matches!(self.pane, Pane::Loading | Pane::Error) {
                    self.pane = Pane::Navigator;
                    self.error = None;
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Trace fetch failed");
                self.error = Some(err.to_string());
                self.ui_state.confirmation_pending = None;
                self.pane = Pane::Error;
            }
        }
    }

    // Keep an open viewer pointed at the refreshed node with the same ID
    fn refresh_viewer(&mut self) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };
        if let Some(row) = self.navigator.rows().iter().find(|row| row.id == viewer.id) {
            viewer.set_resource(row.resource.clone());
        }
    }

    fn on_action_finished(
        &mut self,
        kind: ActionKind,
        id: &str,
        result: Result<(), ActionError>,
        at: Instant,
    ) {
        match (kind, result) {
            (ActionKind::Copy, Ok(())) => {
                self.set_status_message(format!("Copied {id}"), false, at)
            }
            (ActionKind::Cluster(ClusterAction::Delete), Ok(())) => {
                self.set_status_message(format!("Deleted {id}"), false, at)
            }
            (ActionKind::Cluster(_), Ok(())) => {}
            (ActionKind::Copy, Err(e)) => {
                self.set_status_message(format!("Copy failed: {e}"), true, at)
            }
            (ActionKind::Cluster(action), Err(e)) => self.set_status_message(
                format!("{} {id} failed: {e}", action.verb()),
                true,
                at,
            ),
        }
    }

    fn on_key_quit_only(&mut self, action: KeyAction) -> Vec<AppCommand> {
        match action {
            KeyAction::Quit => vec![AppCommand::Quit],
            _ => Vec::new(),
        }
    }

    fn on_navigator_key(&mut self, action: KeyAction) -> Vec<AppCommand> {
        if self.ui_state.confirmation_pending.is_some() {
            return self.on_confirmation_key(action);
        }

        let Some(signal) = self.navigator.handle(action) else {
            return Vec::new();
        };
        match signal {
            NavigatorSignal::FocusChanged { .. } => {
                self.refresh_breadcrumb();
                Vec::new()
            }
            NavigatorSignal::Selected { id, resource } => {
                self.viewer = Some(ViewerState::new(id, resource));
                self.pane = Pane::Viewer;
                Vec::new()
            }
            NavigatorSignal::Copied { id } => vec![AppCommand::Copy(id)],
            NavigatorSignal::Action {
                action,
                id,
                resource,
            } => {
                let pending = PendingAction {
                    action,
                    id,
                    namespace: resource.namespace().map(str::to_string),
                };
                if action.needs_confirmation() {
                    self.ui_state.confirmation_pending = Some(pending);
                    Vec::new()
                } else {
                    vec![run_action(pending)]
                }
            }
            NavigatorSignal::Quit => vec![AppCommand::Quit],
        }
    }

    fn on_confirmation_key(&mut self, action: KeyAction) -> Vec<AppCommand> {
        match action {
            KeyAction::Accept => self
                .ui_state
                .confirmation_pending
                .take()
                .map(run_action)
                .into_iter()
                .collect(),
            KeyAction::Reject | KeyAction::Cancel => {
                self.ui_state.confirmation_pending = None;
                Vec::new()
            }
            KeyAction::Quit => vec![AppCommand::Quit],
            _ => Vec::new(),
        }
    }

    fn on_viewer_key(&mut self, action: KeyAction) -> Vec<AppCommand> {
        let Some(viewer) = self.viewer.as_mut() else {
            self.pane = Pane::Navigator;
            return Vec::new();
        };
        match action {
            KeyAction::MoveUp => viewer.scroll_offset = viewer.scroll_offset.saturating_sub(1),
            // Clamped against the content length while rendering
            KeyAction::MoveDown => viewer.scroll_offset = viewer.scroll_offset.saturating_add(1),
            KeyAction::Copy => return vec![AppCommand::Copy(viewer.id.clone())],
            KeyAction::Cancel | KeyAction::Quit => {
                self.viewer = None;
                self.pane = Pane::Navigator;
            }
            _ => {}
        }
        Vec::new()
    }
}

fn run_action(pending: PendingAction) -> AppCommand {
    AppCommand::RunAction {
        action: pending.action,
        namespace: pending.namespace,
        id: pending.id,
    }
}

/// Appends every delivered event to a file, for debugging
#[derive(Default)]
pub struct EventDumper {
    file: Option<File>,
}

impl EventDumper {
    pub fn open(path: Option<&Path>) -> anyhow::Result<Self> {
        use anyhow::Context;
        let file = match path {
            Some(path) => Some(
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open dump file: {}", path.display()))?,
            ),
            None => None,
        };
        Ok(Self { file })
    }

    pub fn dump(&mut self, event: &AppEvent) {
        // Ticks arrive every poll interval and would drown everything else
        if matches!(event, AppEvent::Tick(_)) {
            return;
        }
        if let Some(file) = self.file.as_mut() {
            if let Err(e) = writeln!(file, "{event:#?}") {
                tracing::warn!("Failed to write event dump: {}", e);
                self.file = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dumper_skips_ticks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.log");
        let mut dumper = EventDumper::open(Some(&path)).unwrap();

        dumper.dump(&AppEvent::Tick(Instant::now()));
        dumper.dump(&AppEvent::Key(KeyAction::MoveDown));
        dumper.dump(&AppEvent::Resize {
            width: 120,
            height: 40,
        });

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("Tick"));
        assert!(written.contains("MoveDown"));
        assert!(written.contains("Resize"));
    }

    #[test]
    fn test_dumper_without_path_is_noop() {
        let mut dumper = EventDumper::open(None).unwrap();
        dumper.dump(&AppEvent::Key(KeyAction::Quit));
    }
}
