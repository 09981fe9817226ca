//! Common helper functions for view rendering
//!
//! This module provides reusable functions to reduce duplication across views.

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Update scroll offset based on selected index and visible area
///
/// This handles the common pattern of scrolling to keep the selected item visible
/// with a buffer zone.
pub fn update_scroll_offset(
    selected_index: usize,
    visible_height: usize,
    scroll_offset: &mut usize,
    scroll_buffer: usize,
) {
    if selected_index >= *scroll_offset + visible_height.saturating_sub(scroll_buffer) {
        *scroll_offset =
            selected_index.saturating_sub(visible_height.saturating_sub(scroll_buffer + 1));
    }
    if selected_index < *scroll_offset + scroll_buffer {
        *scroll_offset = selected_index.saturating_sub(scroll_buffer);
    }
}

/// Render a loading state message
pub fn render_loading_state(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let text = vec![
        Line::from(message),
        Line::from(""),
        Line::from("Please wait..."),
    ];
    let paragraph = Paragraph::new(text)
        .block(create_themed_block(title, theme))
        .style(Style::default().fg(theme.text_secondary));
    f.render_widget(paragraph, area);
}

/// Truncate a message to a maximum number of characters
///
/// If the message exceeds max_len, truncates and adds "...".
pub fn truncate_message(message: &str, max_len: usize) -> String {
    if message.chars().count() > max_len {
        let kept: String = message.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        message.to_string()
    }
}

/// A rectangle of `percent_x` width and `height` rows centered in `area`
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x.min(100)) / 2),
            Constraint::Percentage(percent_x.min(100)),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}

/// Create a block with title and borders using theme
pub fn create_themed_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_follows_cursor_down() {
        let mut offset = 0;
        update_scroll_offset(9, 10, &mut offset, 2);
        assert_eq!(offset, 2);
        update_scroll_offset(0, 10, &mut offset, 2);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("short", 10), "short");
        assert_eq!(truncate_message("a longer message", 10), "a longe...");
    }

    #[test]
    fn test_centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 9, area);
        assert_eq!(rect.height, 9);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.x, 20);
    }
}
