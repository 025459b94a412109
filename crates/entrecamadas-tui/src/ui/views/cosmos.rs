use entrecamadas_core::Cosmos;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::ui::theme;

/// Paints one frame of the cosmos into the buffer, cell by cell.
/// The area is read on every render, so resizes need no bookkeeping.
pub struct CosmosWidget<'a> {
    cosmos: &'a Cosmos,
    pulse: f64,
}

impl<'a> CosmosWidget<'a> {
    pub fn new(cosmos: &'a Cosmos, pulse: f64) -> Self {
        Self { cosmos, pulse }
    }
}

impl Widget for CosmosWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = self.cosmos.paint(area.width, area.height, self.pulse);
        if cells.is_empty() {
            return;
        }
        let cols = area.width as usize;
        for (i, paint) in cells.iter().enumerate() {
            let x = area.x + (i % cols) as u16;
            let y = area.y + (i / cols) as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(paint.glyph)
                    .set_fg(theme::rgb(paint.fg))
                    .set_bg(theme::rgb(paint.bg));
            }
        }
    }
}
