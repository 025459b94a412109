use entrecamadas_core::{Message, NarrationState};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::{centered, CARD_MAX_WIDTH};
use crate::ui::theme;

/// Borders, padding, title row, blank rows, meta row and controls row
const CARD_CHROME_ROWS: u16 = 8;

/// Render the visible message card centered over the cosmos
pub fn render_visible_card(f: &mut Frame, message: &Message, narration: NarrationState, area: Rect) {
    let width = CARD_MAX_WIDTH.min(area.width.saturating_sub(4));
    let text_width = width.saturating_sub(6) as usize;
    let height = wrapped_rows(&message.text, text_width) + CARD_CHROME_ROWS;
    let card = centered(area, width, height);

    let tone = message.visible_tone().to_string();
    let mut lines = vec![
        Line::from(Span::styled(message.visible_title().to_string(), theme::text_bold())),
        Line::from(""),
    ];
    lines.extend(
        message
            .text
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), theme::text_primary()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Tone ", theme::text_dim()),
        Span::styled(tone.clone(), Style::default().fg(theme::tone_color(&tone))),
        Span::styled("   Key ", theme::text_dim()),
        Span::styled(message.visible_key().to_string(), theme::text_muted()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("[n] ", theme::text_muted()),
        Span::styled(narration.button_label(), narration_style(narration)),
        Span::styled("   [Esc] ", theme::text_muted()),
        Span::styled("Close", theme::text_dim()),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_WARNING))
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(theme::BG_CARD));

    f.render_widget(Clear, card);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false }),
        card,
    );
}

fn narration_style(state: NarrationState) -> Style {
    match state {
        NarrationState::Idle => theme::text_primary(),
        NarrationState::Speaking => Style::default().fg(theme::ACCENT_SUCCESS),
        NarrationState::Paused => Style::default().fg(theme::ACCENT_WARNING),
    }
}

/// Rows `text` takes when wrapped at `width` columns
fn wrapped_rows(text: &str, width: usize) -> u16 {
    if width == 0 {
        return 1;
    }
    text.split('\n')
        .map(|line| line.width().div_ceil(width).max(1))
        .sum::<usize>()
        .min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("0123456789", 10), 1);
        assert_eq!(wrapped_rows("0123456789a", 10), 2);
        assert_eq!(wrapped_rows("a\n\nb", 10), 3);
        assert_eq!(wrapped_rows("abc", 0), 1);
    }
}
