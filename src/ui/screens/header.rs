use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Paragraph, Tabs, Widget},
};

use crate::app::App;
use crate::ui::components::UiComponent;
use crate::ui::style::{card_block, dim_unless_focused};

/// Tab bar, theme indicator and the active panel's timer status.
pub fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let palette = app.theme.palette();

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),
            Constraint::Length(30),
            Constraint::Length(6),
        ])
        .split(area);

    let titles: Vec<Line> = app
        .config
        .panels
        .iter()
        .enumerate()
        .map(|(i, panel)| {
            let style = dim_unless_focused(i == app.active, Style::default().fg(palette.foreground));
            Line::styled(format!("{} {}", i + 1, panel.title), style)
        })
        .collect();

    Tabs::new(titles)
        .select(app.active)
        .highlight_style(Style::default().fg(palette.accent).bold())
        .block(card_block(" Plant Monitor ".to_string(), &palette))
        .render(layout[0], buf);

    match app.panel.state() {
        Some(state) => {
            let timer = state.timer();
            UiComponent::status(timer.state(), timer.interval().as_millis(), &palette)
                .render(layout[1], buf);
        }
        None => UiComponent::empty_message("Not running", None, &palette).render(layout[1], buf),
    }

    Paragraph::new(app.theme.icon())
        .block(card_block(String::new(), &palette))
        .render(layout[2], buf);
}
