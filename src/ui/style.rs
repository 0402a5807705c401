#[allow(unused_imports)] /// Needed for Stylize in this scope
use ratatui::style::{Style, Stylize};
use ratatui::widgets::{Block, BorderType, Borders};

use crate::util::theme::Palette;

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}

/// Rounded, titled block in the palette's border color.
pub fn card_block<'a>(title: String, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().fg(palette.foreground).bg(palette.background))
}
