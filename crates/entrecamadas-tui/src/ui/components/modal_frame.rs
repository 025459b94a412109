use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Clear, Widget},
    Frame,
};

use crate::ui::theme;

/// Dims whatever is already drawn in the area
struct DimOverlay;

impl Widget for DimOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(
                        Style::default()
                            .add_modifier(Modifier::DIM)
                            .bg(theme::BG_MODAL_OVERLAY),
                    );
                }
            }
        }
    }
}

/// Fade the screen behind a modal
pub fn render_modal_overlay(f: &mut Frame, area: Rect) {
    f.render_widget(DimOverlay, area);
}

/// Clear the modal area and fill it with the modal background
pub fn render_modal_background(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_MODAL)),
        area,
    );
}
