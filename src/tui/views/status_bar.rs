//! Status bar and search input rendering

use crate::navigator::{Navigator, SearchMode};
use crate::tui::constants::BREADCRUMB_SEPARATOR;
use crate::tui::theme::Theme;
use crate::tui::views::helpers::truncate_message;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// What the status bar shows besides the breadcrumb
pub struct StatusBarContent<'a> {
    pub breadcrumb: &'a [String],
    pub status_message: Option<&'a (String, bool)>,
    pub watching: bool,
    pub fetching: bool,
}

/// Render the one-line status bar
///
/// A pending status message replaces the breadcrumb until it expires.
pub fn render_status_bar(f: &mut Frame, area: Rect, content: &StatusBarContent, theme: &Theme) {
    let indicator = match (content.watching, content.fetching) {
        (false, _) => "",
        (true, false) => "[watch] ",
        (true, true) => "[watch*] ",
    };
    let mut spans = vec![Span::raw(indicator)];

    let width = usize::from(area.width).saturating_sub(indicator.len());
    match content.status_message {
        Some((message, is_error)) => {
            spans.push(Span::styled(
                truncate_message(message, width),
                theme.status_message_style(*is_error),
            ));
        }
        None => spans.push(Span::raw(content.breadcrumb.join(BREADCRUMB_SEPARATOR))),
    }

    let bar = Paragraph::new(Line::from(spans)).style(theme.status_bar_style());
    f.render_widget(bar, area);
}

/// Render the search line
///
/// While editing, shows the live input with a cursor marker; while
/// filtering, shows the confirmed query and the match count.
pub fn render_search_bar(f: &mut Frame, area: Rect, navigator: &Navigator, theme: &Theme) {
    let prompt = Span::styled("/", Style::default().fg(theme.search_prompt));
    let line = match navigator.mode() {
        SearchMode::Off => Line::from(""),
        SearchMode::Editing => Line::from(vec![
            prompt,
            Span::raw(navigator.input().to_string()),
            Span::styled("_", Style::default().fg(theme.search_prompt)),
        ]),
        SearchMode::Filtering => Line::from(vec![
            prompt,
            Span::raw(navigator.query().to_string()),
            Span::styled(
                format!("  [{} matches]", navigator.matches().len()),
                Style::default().fg(theme.text_secondary),
            ),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}
