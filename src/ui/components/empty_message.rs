use ratatui::{
    layout::Alignment,
    prelude::{Color, Style, Stylize},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::UiComponent;
use crate::util::theme::Palette;

impl UiComponent {
    /// Muted placeholder for an area with nothing to draw yet. A `border`
    /// color frames it; `None` leaves it bare.
    pub fn empty_message<'a>(text: &'a str, border: Option<Color>, palette: &Palette) -> Paragraph<'a> {
        let mut block = Block::default().padding(Padding::symmetric(1, 1));
        if let Some(color) = border {
            block = block.borders(Borders::ALL).border_style(Style::default().fg(color));
        }

        Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(palette.muted).bg(palette.background).italic())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::theme::Theme;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    #[test]
    fn test_empty_message_uses_theme_colors() {
        for theme in [Theme::Dark, Theme::Light] {
            let palette = theme.palette();
            let area = Rect::new(0, 0, 30, 5);
            let mut buf = Buffer::empty(area);

            UiComponent::empty_message("No data", Some(palette.border), &palette).render(area, &mut buf);

            let cell = buf
                .content()
                .iter()
                .find(|c| c.symbol() == "N")
                .unwrap();
            assert_eq!(cell.fg, palette.muted);
            assert_eq!(buf[(0, 0)].fg, palette.border);
        }
    }
}
