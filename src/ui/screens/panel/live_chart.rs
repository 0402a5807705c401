use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Widget};

use crate::config::AxisSide;
use crate::panel::ChartFrame;
use crate::ui::components::UiComponent;
use crate::ui::style::card_block;
use crate::util::theme::Palette;

/// Line chart of the rolling series. A right-axis series is drawn as a
/// second plot below the first, each with its own y scale.
pub fn render_live_chart(title: &str, frame: &ChartFrame, palette: &Palette, area: Rect, buf: &mut Buffer) {
    if frame.labels.is_empty() {
        UiComponent::empty_message("No data", Some(palette.border), palette).render(area, buf);
        return;
    }

    if frame.has_side(AxisSide::Right) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        render_side(title, frame, AxisSide::Left, palette, layout[0], buf);
        render_side(title, frame, AxisSide::Right, palette, layout[1], buf);
    } else {
        render_side(title, frame, AxisSide::Left, palette, area, buf);
    }
}

fn render_side(title: &str, frame: &ChartFrame, side: AxisSide, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let Some([y_min, y_max]) = frame.y_bounds(side) else {
        UiComponent::empty_message("No data", Some(palette.border), palette).render(area, buf);
        return;
    };

    let datasets: Vec<Dataset> = frame
        .datasets(side)
        .map(|(descriptor, points)| {
            Dataset::default()
                .name(descriptor.label.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(descriptor.color))
                .data(points)
        })
        .collect();

    let [x_min, x_max] = frame.x_bounds();
    let first = frame.labels.first().cloned().unwrap_or_default();
    let last = frame.labels.last().cloned().unwrap_or_default();

    let x_axis = Axis::default()
        .title("Time")
        .style(Style::default().fg(palette.muted))
        .labels(vec![first, last])
        .bounds([x_min, x_max]);

    let y_labels = vec![
        format!("{:.1}", y_min),
        format!("{:.1}", (y_min + y_max) / 2.0),
        format!("{:.1}", y_max),
    ];

    let y_axis = Axis::default()
        .title(frame.axes.title(side).unwrap_or("Value").to_string())
        .style(Style::default().fg(palette.muted))
        .labels(y_labels)
        .bounds([y_min, y_max]);

    let chart = Chart::new(datasets)
        .block(card_block(format!(" {} ", title), palette))
        .x_axis(x_axis)
        .y_axis(y_axis);

    Widget::render(chart, area, buf);
}
