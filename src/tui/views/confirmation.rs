//! Confirmation dialog rendering

use crate::tui::app::PendingAction;
use crate::tui::constants::{CONFIRMATION_HEIGHT, CONFIRMATION_WIDTH_PERCENT};
use crate::tui::theme::Theme;
use crate::tui::views::helpers::centered_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the confirmation dialog centered over `area`
pub fn render_confirmation(f: &mut Frame, area: Rect, pending: &PendingAction, theme: &Theme) {
    let confirm = Style::default()
        .fg(theme.operation_confirm)
        .add_modifier(Modifier::BOLD);
    let cancel = Style::default()
        .fg(theme.operation_cancel)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CONFIRMATION REQUIRED",
            theme.operation_warning_style(),
        )),
        Line::from(""),
        Line::from(pending.confirmation_message()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("y", confirm),
            Span::raw(" to confirm, "),
            Span::styled("n", cancel),
            Span::raw(" or "),
            Span::styled("Esc", cancel),
            Span::raw(" to cancel"),
        ]),
    ];

    let dialog = centered_rect(CONFIRMATION_WIDTH_PERCENT, CONFIRMATION_HEIGHT, area);
    let block = Block::default()
        .title("Confirm Operation")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.operation_warning));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, dialog);
    f.render_widget(paragraph, dialog);
}
