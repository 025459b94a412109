/// Single-field text editor used by the composer.
/// `cursor` is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct TextEditor {
    pub text: String,
    pub cursor: usize,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Backspace
    pub fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev_boundary = self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.text.remove(prev_boundary);
        self.cursor = prev_boundary;
    }

    /// Delete key
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor = self.text[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Replace the content, cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Cursor as (row, col) in chars, for placing the terminal cursor
    pub fn cursor_position(&self) -> (usize, usize) {
        let before_cursor = &self.text[..self.cursor];
        let row = before_cursor.matches('\n').count();
        let line_start = before_cursor.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = before_cursor[line_start..].chars().count();
        (row, col)
    }
}
