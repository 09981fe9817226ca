//! Help footer rendering

use crate::tui::keybindings::{NavigationCommand, footer_lines};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the key help footer, wrapping commands across lines
pub fn render_help(f: &mut Frame, area: Rect, commands: &[NavigationCommand], theme: &Theme) {
    let lines: Vec<Line> = footer_lines(area.width, commands)
        .into_iter()
        .map(|line| {
            let mut spans = Vec::new();
            for (i, cmd) in line.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" | ", Style::default().fg(theme.footer_text)));
                }
                spans.push(Span::styled(cmd.key, theme.footer_key_style()));
                spans.push(Span::styled(
                    format!(" {}", cmd.label),
                    Style::default().fg(theme.footer_text),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let footer = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
