//! Trace table rendering

use crate::navigator::Navigator;
use crate::tui::constants::SCROLL_BUFFER;
use crate::tui::theme::Theme;
use crate::tui::views::helpers;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table},
};

/// Render the flattened trace as a table, keeping the cursor in view
pub fn render_navigator(
    f: &mut Frame,
    area: Rect,
    navigator: &Navigator,
    scroll_offset: &mut usize,
    title: &str,
    theme: &Theme,
) {
    // Borders and header row
    let visible_height = (area.height as usize).saturating_sub(3);
    helpers::update_scroll_offset(
        navigator.cursor(),
        visible_height,
        scroll_offset,
        SCROLL_BUFFER,
    );

    let layout = navigator.layout();
    let header = Row::new(layout.titles()).style(theme.table_header_style());
    let widths: Vec<Constraint> = layout
        .widths(area.width)
        .into_iter()
        .map(Constraint::Length)
        .collect();

    let rows: Vec<Row> = navigator
        .rows()
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, row)| {
            let style = if index == navigator.cursor() {
                theme.table_selected_style()
            } else if navigator.is_match(index) {
                theme.match_style()
            } else {
                theme.row_style(row.color)
            };
            Row::new(
                row.columns
                    .iter()
                    .map(|value| Cell::from(Span::raw(value.clone()))),
            )
            .style(style)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(crate::navigator::layout::COLUMN_SPACING)
        .block(helpers::create_themed_block(title, theme));
    f.render_widget(table, area);
}
