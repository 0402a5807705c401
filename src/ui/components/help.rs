use ratatui::{
    layout::Alignment,
    prelude::Style,
    widgets::{Block, Borders, Paragraph},
};

use super::UiComponent;
use crate::util::theme::Palette;

pub const KEY_HELP: &str =
    "Tab/←/→ panels · 1-3 jump · p pause · +/- interval · c clear · t theme · q quit";

impl UiComponent {
    pub fn help<'a>(text: &'a str, palette: &Palette) -> Paragraph<'a> {
        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
            )
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center)
    }
}
