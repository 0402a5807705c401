use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Paragraph, Widget},
};

use crate::panel::KpiCard;
use crate::ui::style::card_block;
use crate::util::theme::Palette;

pub fn render_kpi_cards(cards: &[KpiCard], palette: &Palette, area: Rect, buf: &mut Buffer) {
    let present: Vec<&KpiCard> = cards.iter().filter(|c| c.present).collect();
    if present.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, present.len() as u32); present.len()];
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, cell) in present.iter().zip(layout.iter()) {
        let text = card.text.as_deref().unwrap_or("--");
        let title = card_title(card, text);

        Paragraph::new(text)
            .block(card_block(title, palette))
            .style(Style::default().fg(palette.accent).bold())
            .alignment(Alignment::Center)
            .render(*cell, buf);
    }
}

/// Card title with the unit in parentheses, unless the value text already
/// carries it.
fn card_title(card: &KpiCard, text: &str) -> String {
    if card.unit.is_empty() || text.ends_with(card.unit.as_str()) {
        format!(" {} ", card.title)
    } else {
        format!(" {} ({}) ", card.title, card.unit)
    }
}
