use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::{centered, CARD_MAX_WIDTH};
use crate::ui::theme;

const KEYS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "move between fields and the list"),
    ("Ctrl+S", "save the message"),
    ("Ctrl+U", "update the message loaded for editing"),
    ("Ctrl+P", "manifest the draft without saving"),
    ("Ctrl+T", "save as \"today, not tomorrow\" and show it"),
    ("Ctrl+N", "narrate / pause / resume"),
    ("j / k", "move through the list"),
    ("Enter / v", "make the selected message visible"),
    ("e", "load the selected message for editing"),
    ("d", "delete the selected message"),
    ("Esc", "close this panel, the card or a notice"),
    ("Ctrl+C twice", "quit"),
];

/// Render the help panel centered over the cosmos
pub fn render_help(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("Between layers", theme::text_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Write invisible messages. Keep them, or let one become visible \
             against the cosmos and hear it read aloud.",
            theme::text_muted(),
        )),
        Line::from(""),
    ];
    lines.extend(KEYS.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!("{:<16}", key), Style::default().fg(theme::ACCENT_PRIMARY)),
            Span::styled(*action, theme::text_primary()),
        ])
    }));

    let height = lines.len() as u16 + 4;
    let card = centered(area, CARD_MAX_WIDTH.min(area.width.saturating_sub(4)), height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_focused())
        .title(Span::styled(" Help ", theme::text_bold()))
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(theme::BG_CARD));

    f.render_widget(Clear, card);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        card,
    );
}
