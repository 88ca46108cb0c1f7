//! Single-line editable text used by search, login, chat and composer fields.

/// Default cap on characters accepted by a field.
const DEFAULT_MAX_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputState {
    text: String,
    /// Character index, not byte.
    cursor_position: usize,
    max_length: usize,
}

impl Default for TextInputState {
    fn default() -> Self {
        Self::with_max_length(DEFAULT_MAX_LENGTH)
    }
}

impl TextInputState {
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            text: String::new(),
            cursor_position: 0,
            max_length,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the content and puts the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(self.max_length).collect();
        self.cursor_position = self.text.chars().count();
    }

    /// Returns the content and leaves the field empty.
    pub fn take_text(&mut self) -> String {
        self.cursor_position = 0;
        std::mem::take(&mut self.text)
    }

    /// Returns false when the field is already full.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= self.max_length {
            return false;
        }
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text.insert(byte_idx, ch);
        self.cursor_position += 1;
        true
    }

    pub fn delete_char_before(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        self.remove_at_cursor();
    }

    pub fn delete_char_at(&mut self) {
        if self.cursor_position < self.text.chars().count() {
            self.remove_at_cursor();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.text.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    fn remove_at_cursor(&mut self) {
        let start = self.char_to_byte_index(self.cursor_position);
        let end = self.char_to_byte_index(self.cursor_position + 1);
        self.text.drain(start..end);
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}
