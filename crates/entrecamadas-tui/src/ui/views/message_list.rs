use entrecamadas_core::Message;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::app::{App, Focus};
use crate::ui::format::{short_date, truncate_with_ellipsis};
use crate::ui::theme;

/// Render the saved messages, freshest first
pub fn render_message_list(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::List;
    let messages = app.messages();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme::border_focused()
        } else {
            theme::border_inactive()
        })
        .title(Span::styled(
            format!(" Messages ({}) ", messages.len()),
            theme::text_bold(),
        ))
        .style(Style::default().bg(theme::BG_SIDEBAR));

    if messages.is_empty() {
        render_empty_state(f, block, area);
        return;
    }

    let width = block.inner(area).width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = messages
        .iter()
        .map(|message| ListItem::new(message_lines(message, width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("▌ ")
        .highlight_style(if focused {
            Style::default().bg(theme::BG_SELECTED)
        } else {
            Style::default()
        });

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(list, area, &mut state);
}

fn message_lines(message: &Message, width: usize) -> Vec<Line<'static>> {
    let tone = message.tone.as_str().to_string();
    let status = if message.carpe {
        Span::styled("⭐ Today, not tomorrow", Style::default().fg(theme::ACCENT_WARNING))
    } else {
        Span::styled("📝 Invisible", theme::text_muted())
    };

    vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(message.list_title(), width),
            theme::text_bold(),
        )),
        Line::from(vec![
            Span::styled(short_date(&message.created), theme::text_dim()),
            Span::styled(" • ", theme::text_dim()),
            Span::styled(tone.clone(), Style::default().fg(theme::tone_color(&tone))),
        ]),
        Line::from(vec![
            status,
            Span::styled(" • ", theme::text_dim()),
            Span::styled(message.list_key().to_string(), theme::text_muted()),
        ]),
        Line::from(""),
    ]
}

fn render_empty_state(f: &mut Frame, block: Block, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("🌌 Creative silence", theme::text_bold())),
        Line::from(Span::styled(
            "This space awaits your invisible messages.",
            theme::text_muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Tab to the composer and start writing", theme::text_dim())),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(block),
        area,
    );
}
