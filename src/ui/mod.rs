pub mod components;
pub mod screens;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};
use crate::app::App;
use crate::ui::screens::header::render_header;
use crate::ui::screens::panel::render_panel_view;
use crate::ui::components::UiComponent;
use crate::ui::components::KEY_HELP;

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.theme.palette();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        render_header(self, layout[0], buf);
        render_panel_view(&self.panel, &palette, layout[1], buf);
        UiComponent::help(KEY_HELP, &palette).render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TickMode;
    use crate::config::DashboardConfig;
    use crate::panel::{ManualScheduler, PanelView};
    use crate::util::database::Database;
    use crate::util::io::event::EventHandler;

    fn app() -> App {
        App::with_parts(
            DashboardConfig::default(),
            Database::open_in_memory().unwrap(),
            EventHandler::detached(),
            TickMode::Manual(ManualScheduler::new()),
        )
        .unwrap()
    }

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_tabs_and_readings() {
        let mut app = app();
        let area = Rect::new(0, 0, 140, 40);
        let mut buf = Buffer::empty(area);

        (&mut app).render(area, &mut buf);

        let screen = text(&buf);
        assert!(screen.contains("Overview"));
        assert!(screen.contains("Hydraulic"));
        assert!(screen.contains("1 reading"));
        assert!(screen.contains("Running"));
    }

    #[test]
    fn test_renders_failure_banner() {
        let mut app = app();
        app.panel = PanelView::Failed {
            panel_id: "hydraulic".to_string(),
            banner: "Surface #liveChart NOT FOUND in view.".to_string(),
        };
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);

        (&mut app).render(area, &mut buf);

        assert!(text(&buf).contains("NOT FOUND"));
    }
}
