use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Style, Stylize},
    widgets::{Row, Table, Widget},
};

use crate::panel::LiveRenderer;
use crate::ui::components::UiComponent;
use crate::ui::style::card_block;
use crate::util::string::StringUtils;
use crate::util::theme::Palette;

/// Telemetry rows, newest first.
pub fn render_telemetry_table(renderer: &LiveRenderer, palette: &Palette, area: Rect, buf: &mut Buffer) {
    if renderer.row_count() == 0 {
        UiComponent::empty_message("No readings yet", Some(palette.border), palette).render(area, buf);
        return;
    }

    let columns = renderer.columns();
    let header = Row::new(columns.iter().map(|c| c.to_string()))
        .style(Style::default().fg(palette.accent).bold());

    let rows = renderer
        .rows()
        .into_iter()
        .map(|row| Row::new(row.cells.clone()).style(Style::default().fg(palette.foreground)));

    let widths = vec![Constraint::Ratio(1, columns.len().max(1) as u32); columns.len()];

    Table::new(rows, widths)
        .header(header)
        .block(card_block(
            format!(" {} ", StringUtils::maybe_pluralize_count(renderer.row_count(), ("reading", "readings"))),
            palette,
        ))
        .render(area, buf);
}
