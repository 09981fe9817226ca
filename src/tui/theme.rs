//! Theme and styling definitions
//!
//! This module provides a centralized place for all color and style definitions.

use ratatui::style::{Color, Modifier, Style};

use crate::navigator::RowColor;

/// Theme configuration for the TUI
pub struct Theme {
    // Table colors
    pub table_header: Color,
    pub table_selected: Color,
    pub table_selected_bg: Color,
    pub table_normal: Color,
    pub row_warning: Color,
    pub row_error: Color,
    pub match_fg: Color,
    pub match_bg: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_label: Color,

    // Status bar colors
    pub status_bar_fg: Color,
    pub status_bar_bg: Color,
    pub status_info: Color,
    pub status_error: Color,

    // Input colors
    pub search_prompt: Color,

    // Operation colors
    pub operation_warning: Color,
    pub operation_confirm: Color,
    pub operation_cancel: Color,

    // Footer colors
    pub footer_key: Color,
    pub footer_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            table_header: Color::Cyan,
            table_selected: Color::Blue,
            table_selected_bg: Color::DarkGray,
            table_normal: Color::White,
            row_warning: Color::Yellow,
            row_error: Color::Red,
            match_fg: Color::White,
            match_bg: Color::Red,

            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_label: Color::Cyan,

            status_bar_fg: Color::Black,
            status_bar_bg: Color::Cyan,
            status_info: Color::Green,
            status_error: Color::Red,

            search_prompt: Color::Yellow,

            operation_warning: Color::Yellow,
            operation_confirm: Color::Green,
            operation_cancel: Color::Red,

            footer_key: Color::Yellow,
            footer_text: Color::Gray,
        }
    }
}

impl Theme {
    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.table_header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_selected_style(&self) -> Style {
        Style::default()
            .fg(self.table_selected)
            .bg(self.table_selected_bg)
    }

    /// Style for a row by its health color
    pub fn row_style(&self, color: RowColor) -> Style {
        match color {
            RowColor::Neutral => Style::default().fg(self.table_normal),
            RowColor::Warning => Style::default().fg(self.row_warning),
            RowColor::Error => Style::default().fg(self.row_error),
        }
    }

    /// Style for a row matching the active search
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_fg)
            .bg(self.match_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().fg(self.status_bar_fg).bg(self.status_bar_bg)
    }

    pub fn status_message_style(&self, is_error: bool) -> Style {
        Style::default()
            .fg(if is_error {
                self.status_error
            } else {
                self.status_info
            })
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }

    pub fn operation_warning_style(&self) -> Style {
        Style::default()
            .fg(self.operation_warning)
            .add_modifier(Modifier::BOLD)
    }
}
