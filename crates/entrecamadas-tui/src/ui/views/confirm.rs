use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::components::{render_modal_background, render_modal_overlay};
use crate::ui::format::truncate_with_ellipsis;
use crate::ui::layout::{centered, CONFIRM_HEIGHT, CONFIRM_WIDTH};
use crate::ui::theme;

/// Render the delete confirmation dialog over the whole screen
pub fn render_confirm_delete(f: &mut Frame, title: &str, area: Rect) {
    render_modal_overlay(f, area);

    let dialog = centered(area, CONFIRM_WIDTH, CONFIRM_HEIGHT);
    render_modal_background(f, dialog);

    let lines = vec![
        Line::from(Span::styled("Delete this message?", theme::text_bold())),
        Line::from(Span::styled(
            truncate_with_ellipsis(title, CONFIRM_WIDTH.saturating_sub(4) as usize),
            theme::text_muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] ", Style::default().fg(theme::ACCENT_ERROR)),
            Span::styled("Delete   ", theme::text_primary()),
            Span::styled("[n] ", theme::text_muted()),
            Span::styled("Cancel", theme::text_primary()),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_ERROR));
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        dialog,
    );
}
