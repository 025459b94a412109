use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::app::{App, Focus};
use crate::ui::format::truncate_with_ellipsis;
use crate::ui::text_editor::TextEditor;
use crate::ui::theme;

/// Visible rows of the message text field
const TEXT_ROWS: u16 = 4;

/// Render the composer form: title, text, key, tone and its key hints
pub fn render_composer(f: &mut Frame, app: &App, area: Rect) {
    let heading = if app.editing_id.is_some() {
        " Editing message "
    } else {
        " New message "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if app.focus == Focus::List {
            theme::border_inactive()
        } else {
            theme::border_focused()
        })
        .title(Span::styled(heading, theme::text_bold()))
        .style(Style::default().bg(theme::BG_SIDEBAR));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [title_area, text_area, key_area, tone_area, hint_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(TEXT_ROWS + 1),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_line_field(
        f,
        title_area,
        "Title",
        &app.title_input,
        "optional",
        app.focus == Focus::Title,
    );
    render_text_field(f, text_area, &app.text_input, app.focus == Focus::Text);
    render_line_field(
        f,
        key_area,
        "Symbolic key",
        &app.key_input,
        "optional",
        app.focus == Focus::Key,
    );
    render_tone_field(f, tone_area, app);

    let hints = Line::from(vec![
        Span::styled("^S", theme::text_muted()),
        Span::styled(" save  ", theme::text_dim()),
        Span::styled("^P", theme::text_muted()),
        Span::styled(" manifest  ", theme::text_dim()),
        Span::styled("^T", theme::text_muted()),
        Span::styled(" today", theme::text_dim()),
    ]);
    if hint_area.height > 0 {
        f.render_widget(Paragraph::new(hints), hint_area);
    }
}

fn label_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(theme::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        theme::text_muted()
    }
}

fn gutter(is_focused: bool) -> Span<'static> {
    let color = if is_focused {
        theme::ACCENT_PRIMARY
    } else {
        theme::BORDER_INACTIVE
    };
    Span::styled("│ ", Style::default().fg(color))
}

/// Label row plus one input row, scrolled horizontally to keep the cursor visible
fn render_line_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    editor: &TextEditor,
    placeholder: &str,
    is_focused: bool,
) {
    if area.height < 2 {
        return;
    }
    f.render_widget(
        Paragraph::new(label).style(label_style(is_focused)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let width = area.width.saturating_sub(2) as usize;
    let (_, col) = editor.cursor_position();
    let skip = (col + 1).saturating_sub(width);

    let value: String = editor.text.chars().skip(skip).take(width).collect();
    let content = if editor.text.is_empty() {
        Span::styled(placeholder.to_string(), theme::text_dim())
    } else {
        Span::styled(value, theme::text_primary())
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![gutter(is_focused), content])),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );

    if is_focused {
        let before: String = editor.text[..editor.cursor].chars().skip(skip).collect();
        f.set_cursor_position((area.x + 2 + before.width() as u16, area.y + 1));
    }
}

/// Multi-line message text; scrolls vertically to the cursor row
fn render_text_field(f: &mut Frame, area: Rect, editor: &TextEditor, is_focused: bool) {
    if area.height < 2 {
        return;
    }
    f.render_widget(
        Paragraph::new("Invisible message").style(label_style(is_focused)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let rows = area.height - 1;
    let width = area.width.saturating_sub(2) as usize;
    let (cursor_row, cursor_col) = editor.cursor_position();
    let top = (cursor_row + 1).saturating_sub(rows as usize);

    let lines: Vec<Line> = if editor.text.is_empty() {
        vec![Line::from(vec![
            gutter(is_focused),
            Span::styled("what stays unsaid...", theme::text_dim()),
        ])]
    } else {
        editor
            .text
            .split('\n')
            .skip(top)
            .take(rows as usize)
            .map(|line| {
                Line::from(vec![
                    gutter(is_focused),
                    Span::styled(truncate_with_ellipsis(line, width), theme::text_primary()),
                ])
            })
            .collect()
    };
    f.render_widget(
        Paragraph::new(lines),
        Rect::new(area.x, area.y + 1, area.width, rows),
    );

    if is_focused {
        let col = cursor_col.min(width.saturating_sub(1));
        let line_start = editor.text[..editor.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let before: String = editor.text[line_start..editor.cursor].chars().take(col).collect();
        f.set_cursor_position((
            area.x + 2 + before.width() as u16,
            area.y + 1 + (cursor_row - top) as u16,
        ));
    }
}

fn render_tone_field(f: &mut Frame, area: Rect, app: &App) {
    if area.height < 2 {
        return;
    }
    let is_focused = app.focus == Focus::Tone;
    f.render_widget(
        Paragraph::new("Tone").style(label_style(is_focused)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let tone = app.tone.as_str();
    let mut spans = vec![
        gutter(is_focused),
        Span::styled(tone.to_string(), Style::default().fg(theme::tone_color(tone))),
    ];
    if is_focused {
        spans.push(Span::styled("  ←/→ change", theme::text_dim()));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}
