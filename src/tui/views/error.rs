//! Fatal error pane

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
};

pub fn render_error(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let text = vec![
        Line::from(format!("There was a fatal error: {message}"))
            .style(Style::default().fg(theme.status_error)),
        Line::from(""),
        Line::from("Press q to exit").style(Style::default().fg(theme.text_secondary)),
    ];
    let paragraph = Paragraph::new(text)
        .block(crate::tui::views::helpers::create_themed_block("Error", theme))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
