use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::panel::{DashboardState, PanelView};
use crate::ui::components::UiComponent;
use crate::util::theme::Palette;

pub mod kpi_cards;
pub mod live_chart;
pub mod telemetry_table;

pub fn render_panel_view(view: &PanelView, palette: &Palette, area: Rect, buf: &mut Buffer) {
    match view {
        PanelView::Mounted(state) => render_panel(state, palette, area, buf),
        PanelView::Failed { banner, .. } => UiComponent::failure_banner(banner, palette).render(area, buf),
        PanelView::LoadFailed { message, .. } => {
            UiComponent::empty_message(message, Some(palette.error), palette).render(area, buf)
        }
    }
}

/// KPI row on top, chart in the middle, table at the bottom. Missing
/// surfaces give their space to the others.
fn render_panel(state: &DashboardState, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let renderer = state.renderer();
    let has_kpis = renderer.kpis().iter().any(|k| k.present);
    let has_chart = renderer.chart_frame().is_some();
    let has_table = renderer.has_table();

    let mut constraints = Vec::new();
    if has_kpis {
        constraints.push(Constraint::Length(4));
    }
    if has_chart {
        constraints.push(Constraint::Percentage(55));
    }
    if has_table {
        constraints.push(Constraint::Min(5));
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut cells = layout.iter();
    if has_kpis {
        if let Some(cell) = cells.next() {
            kpi_cards::render_kpi_cards(renderer.kpis(), palette, *cell, buf);
        }
    }
    if let Some(frame) = renderer.chart_frame() {
        if let Some(cell) = cells.next() {
            live_chart::render_live_chart(&state.title, frame, palette, *cell, buf);
        }
    }
    if has_table {
        if let Some(cell) = cells.next() {
            telemetry_table::render_telemetry_table(renderer, palette, *cell, buf);
        }
    }
}
