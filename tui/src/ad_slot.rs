//! Decorative advertisement placeholder.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme::Palette;

pub const DEFAULT_SLOT: &str = "General Slot";

/// Rows the placeholder occupies, borders included.
pub const AD_SLOT_HEIGHT: u16 = 3;

#[must_use]
pub fn ad_label(slot: Option<&str>) -> String {
    format!("Advertisement - {}", slot.unwrap_or(DEFAULT_SLOT))
}

pub(crate) fn draw_ad_slot(frame: &mut Frame, area: Rect, slot: Option<&str>, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(palette.text_muted));
    let label = Paragraph::new(ad_label(slot))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )
        .block(block);
    frame.render_widget(label, area);
}
