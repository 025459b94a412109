// Centralized layout constants and utilities for consistent UI across all views

use ratatui::layout::{Constraint, Layout, Rect};

/// Horizontal padding for content inside panels (left + right)
pub const CONTENT_PADDING_H: u16 = 1;

/// Sidebar width (composer + message list)
pub const SIDEBAR_WIDTH: u16 = 42;

/// Composer height: title, text (4 lines), key, tone, hints, borders
pub const COMPOSER_HEIGHT: u16 = 14;

/// Status bar height (single line at very bottom of app)
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Visible card maximum width
pub const CARD_MAX_WIDTH: u16 = 64;

/// Confirmation dialog size
pub const CONFIRM_WIDTH: u16 = 44;
pub const CONFIRM_HEIGHT: u16 = 7;

/// Apply horizontal padding to a rect
pub fn with_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

/// Center a `width x height` rect inside `area`, shrinking to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, cell, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(row);
    cell
}
