use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::UiComponent;
use crate::panel::TimerState;
use crate::util::theme::Palette;

impl UiComponent {
    /// Running/Paused indicator with the current tick interval.
    pub fn status(state: TimerState, interval_ms: u128, palette: &Palette) -> Paragraph<'static> {
        let (label, color) = match state {
            TimerState::Running => ("● Running", Color::Green),
            TimerState::Stopped => ("‖ Paused", Color::Yellow),
        };

        Paragraph::new(Line::from(vec![
            Span::styled(label, Style::default().fg(color)),
            Span::styled(format!("  every {} ms", interval_ms), Style::default().fg(palette.muted)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Status ")
        )
        .alignment(Alignment::Center)
    }
}
