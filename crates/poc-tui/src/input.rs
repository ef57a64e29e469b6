//! Single-line text editing for form fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a field accepts while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    /// ASCII digits only.
    Number,
    /// Like `Text`, rendered masked.
    Secret,
}

/// Outcome of feeding one key to an [`InputField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Editing,
    Submit,
    Cancel,
    Ignored,
}

/// A text input field with cursor support.
#[derive(Debug, Clone)]
pub struct InputField {
    value: String,
    /// Byte index into `value`, always on a char boundary.
    cursor: usize,
    pub label: String,
    pub kind: InputKind,
}

impl InputField {
    pub fn new(initial: impl Into<String>, label: &str, kind: InputKind) -> Self {
        let value = initial.into();
        Self {
            cursor: value.len(),
            value,
            label: label.to_string(),
            kind,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Value as it should be shown on screen, with a `|` at the cursor.
    pub fn display(&self) -> String {
        let shown = match self.kind {
            InputKind::Secret => "*".repeat(self.value.chars().count()),
            _ => self.value.clone(),
        };
        let at = match self.kind {
            InputKind::Secret => self.value[..self.cursor].chars().count(),
            _ => self.cursor,
        };
        format!("{}|{}", &shown[..at], &shown[at..])
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => EditOutcome::Submit,
            KeyCode::Esc => EditOutcome::Cancel,
            KeyCode::Char('a') if ctrl => {
                self.cursor = 0;
                EditOutcome::Editing
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.value.len();
                EditOutcome::Editing
            }
            KeyCode::Char('u') if ctrl => {
                self.value.clear();
                self.cursor = 0;
                EditOutcome::Editing
            }
            KeyCode::Char('k') if ctrl => {
                self.value.truncate(self.cursor);
                EditOutcome::Editing
            }
            KeyCode::Char('w') if ctrl => {
                self.delete_word_backward();
                EditOutcome::Editing
            }
            KeyCode::Char(_) if ctrl => EditOutcome::Ignored,
            KeyCode::Char(c) => {
                if self.kind == InputKind::Number && !c.is_ascii_digit() {
                    return EditOutcome::Ignored;
                }
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                EditOutcome::Editing
            }
            KeyCode::Backspace => {
                if let Some(prev) = self.prev_boundary() {
                    self.value.remove(prev);
                    self.cursor = prev;
                }
                EditOutcome::Editing
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
                EditOutcome::Editing
            }
            KeyCode::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                EditOutcome::Editing
            }
            KeyCode::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                EditOutcome::Editing
            }
            KeyCode::Home => {
                self.cursor = 0;
                EditOutcome::Editing
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                EditOutcome::Editing
            }
            _ => EditOutcome::Ignored,
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor].char_indices().last().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn delete_word_backward(&mut self) {
        let head = &self.value[..self.cursor];
        let trimmed = head.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        self.value.drain(start..self.cursor);
        self.cursor = start;
    }
}
