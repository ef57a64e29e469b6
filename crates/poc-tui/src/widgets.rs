//! Small, reusable UI helpers used by multiple screens.

use poc_core::validation::is_warning;
use ratatui::style::{Color, Style};

/// Checkbox state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckboxState {
    #[default]
    Unchecked,
    Checked,
}

impl CheckboxState {
    pub fn toggle(&mut self) {
        *self = match self {
            CheckboxState::Unchecked => CheckboxState::Checked,
            CheckboxState::Checked => CheckboxState::Unchecked,
        };
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, CheckboxState::Checked)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CheckboxState::Unchecked => "[ ]",
            CheckboxState::Checked => "[x]",
        }
    }
}

impl From<bool> for CheckboxState {
    fn from(b: bool) -> Self {
        if b {
            CheckboxState::Checked
        } else {
            CheckboxState::Unchecked
        }
    }
}

/// A list of checkboxes that reports when every box is ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<CheckboxState>,
}

impl Checklist {
    pub fn new(len: usize) -> Self {
        Self {
            items: vec![CheckboxState::Unchecked; len],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> CheckboxState {
        self.items.get(index).copied().unwrap_or_default()
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.toggle();
        }
    }

    pub fn checked(&self) -> usize {
        self.items.iter().filter(|c| c.is_checked()).count()
    }

    /// An empty list is never complete.
    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.checked() == self.items.len()
    }
}

/// Dashboard/sidebar marker for a completion flag.
pub fn status_marker(done: bool) -> &'static str {
    if done {
        "✓"
    } else {
        "○"
    }
}

/// Prefix a validation message with a severity glyph.
pub fn message_line(message: &str) -> String {
    if is_warning(message) {
        format!("⚠ {}", message)
    } else {
        format!("✖ {}", message)
    }
}

pub fn validity_style(valid: bool) -> Style {
    if valid {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}
