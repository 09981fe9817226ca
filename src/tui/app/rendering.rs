//! Rendering logic for the application
//!
//! Splits the frame per pane and hands each area to a view component.

use super::core::App;
use super::state::Pane;
use crate::navigator::SearchMode;
use crate::tui::keybindings::{
    NavigationCommand, calculate_footer_height, get_navigation_commands, get_viewer_commands,
};
use crate::tui::views::{self, StatusBarContent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

impl App {
    /// Main render entry point
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();

        match self.pane {
            Pane::Loading => {
                let message = format!("Tracing {}", self.source_description);
                views::helpers::render_loading_state(f, area, "xpnav", &message, &self.theme);
            }
            Pane::Error => {
                let message = self.error.as_deref().unwrap_or("unknown error");
                views::render_error(f, area, message, &self.theme);
            }
            Pane::Navigator => self.render_navigator_pane(f, area),
            Pane::Viewer => self.render_viewer_pane(f, area),
        }
    }

    fn render_navigator_pane(&mut self, f: &mut Frame, area: Rect) {
        let commands = get_navigation_commands();
        let search_height = if self.navigator.mode() == SearchMode::Off {
            0
        } else {
            1
        };
        let chunks = split_body(
            area,
            search_height,
            self.navigator.show_help().then_some(commands.as_slice()),
        );

        let title = format!(" Trace ({}) ", self.navigator.rows().len());
        views::render_navigator(
            f,
            chunks[0],
            &self.navigator,
            &mut self.view_state.table_scroll_offset,
            &title,
            &self.theme,
        );

        if search_height > 0 {
            views::render_search_bar(f, chunks[1], &self.navigator, &self.theme);
        }

        let content = StatusBarContent {
            breadcrumb: &self.ui_state.breadcrumb,
            status_message: self.ui_state.status_message.as_ref(),
            watching: self.scheduler.is_watching(),
            fetching: self.scheduler.in_flight(),
        };
        views::render_status_bar(f, chunks[2], &content, &self.theme);

        if self.navigator.show_help() {
            views::render_help(f, chunks[3], &commands, &self.theme);
        }

        if let Some(pending) = &self.ui_state.confirmation_pending {
            views::render_confirmation(f, area, pending, &self.theme);
        }
    }

    fn render_viewer_pane(&mut self, f: &mut Frame, area: Rect) {
        let commands = get_viewer_commands();
        let chunks = split_body(
            area,
            0,
            self.navigator.show_help().then_some(commands.as_slice()),
        );

        if let Some(viewer) = self.viewer.as_mut() {
            views::render_viewer(f, chunks[0], viewer, &self.theme);
        }

        let content = StatusBarContent {
            breadcrumb: &self.ui_state.breadcrumb,
            status_message: self.ui_state.status_message.as_ref(),
            watching: self.scheduler.is_watching(),
            fetching: self.scheduler.in_flight(),
        };
        views::render_status_bar(f, chunks[2], &content, &self.theme);

        if self.navigator.show_help() {
            views::render_help(f, chunks[3], &commands, &self.theme);
        }
    }
}

/// Body, search line, status bar and optional help footer, top to bottom
fn split_body(area: Rect, search_height: u16, help: Option<&[NavigationCommand]>) -> Vec<Rect> {
    let footer_height = help.map_or(0, |commands| calculate_footer_height(area.width, commands));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(search_height),
            Constraint::Length(1),
            Constraint::Length(footer_height),
        ])
        .split(area)
        .to_vec()
}
