use ratatui::{
    layout::Alignment,
    prelude::{Style, Stylize},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;
use crate::util::theme::Palette;

impl UiComponent {
    /// Red banner shown in place of a panel that failed to initialize.
    pub fn failure_banner<'a>(text: &'a str, palette: &Palette) -> Paragraph<'a> {
        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.error))
                    .title(" Error ")
                    .padding(Padding::symmetric(1, 1)),
            )
            .style(Style::default().fg(palette.error).bold())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
