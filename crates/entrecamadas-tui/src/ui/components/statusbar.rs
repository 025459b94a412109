// Status bar at the very bottom of the app.
// Shows the current notification, or key hints for the focused area.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::app::{App, Focus};
use crate::ui::format::truncate_with_ellipsis;
use crate::ui::notifications::NotificationLevel;
use crate::ui::theme;

fn hints_for(app: &App) -> &'static str {
    if app.pending_quit {
        return "Press Ctrl+C again to quit";
    }
    if app.visible.current().is_some() {
        return "n narrate · Esc close · F1 help";
    }
    match app.focus {
        Focus::List => "j/k move · Enter show · e edit · d delete · ? help · q quit",
        Focus::Tone => "←/→ tone · Tab next · ^S save · F1 help",
        _ => "Tab next · ^S save · ^U update · ^P manifest · ^T today · F1 help",
    }
}

/// Render the status bar: notification (or hints) left, message count right
pub fn render_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let count_label = format!("{} saved ", app.store.len());
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(count_label.width() as u16 + 1),
    ])
    .areas(area);

    let line = if let Some(notification) = app.notifications.current() {
        let color = match notification.level {
            NotificationLevel::Info => theme::ACCENT_PRIMARY,
            NotificationLevel::Success => theme::ACCENT_SUCCESS,
            NotificationLevel::Error => theme::ACCENT_ERROR,
        };
        let icon = notification.level.icon();
        let available = (left.width as usize).saturating_sub(icon.width() + 2);
        Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(
                truncate_with_ellipsis(&notification.message, available),
                Style::default().fg(color),
            ),
        ])
    } else {
        let hints = hints_for(app);
        let style = if app.pending_quit {
            Style::default().fg(theme::ACCENT_WARNING)
        } else {
            theme::text_dim()
        };
        Line::from(Span::styled(
            format!(" {}", truncate_with_ellipsis(hints, left.width.saturating_sub(1) as usize)),
            style,
        ))
    };

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::BG_SIDEBAR)),
        left,
    );
    f.render_widget(
        Paragraph::new(count_label)
            .alignment(ratatui::layout::Alignment::Right)
            .style(theme::text_muted().bg(theme::BG_SIDEBAR)),
        right,
    );
}
