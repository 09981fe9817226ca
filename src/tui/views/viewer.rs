//! Manifest viewer rendering

use crate::trace::Resource;
use crate::tui::app::ViewerState;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// The node's manifest as YAML, without `managedFields`
pub fn manifest_yaml(resource: &Resource) -> String {
    let cleaned = resource.object.without_key("managedFields");
    match serde_yaml::to_string(&cleaned) {
        Ok(yaml) => yaml,
        Err(e) => format!(
            "Error converting to YAML: {}\n\nJSON:\n{}",
            e,
            serde_json::to_string_pretty(&cleaned)
                .unwrap_or_else(|_| "Failed to serialize".to_string())
        ),
    }
}

/// Render the viewer pane
pub fn render_viewer(f: &mut Frame, area: Rect, viewer: &mut ViewerState, theme: &Theme) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let line_count = viewer.yaml.lines().count();
    viewer.scroll_offset = viewer
        .scroll_offset
        .min(line_count.saturating_sub(visible_height));

    // Leading spaces carry the YAML indentation, so lines are not wrapped
    let visible_lines: Vec<Line> = viewer
        .yaml
        .lines()
        .skip(viewer.scroll_offset)
        .take(visible_height)
        .map(Line::from)
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_label))
        .title_top(Line::from(format!(" {} ", viewer.title)).left_aligned())
        .title_top(Line::from(format!(" {} ", viewer.side_title)).right_aligned());
    let paragraph = Paragraph::new(visible_lines)
        .block(block)
        .style(Style::default().fg(theme.text_primary));
    f.render_widget(paragraph, area);
}
