//! Validation rules for the planning records.
//!
//! Rules never fail: every problem becomes a message on the returned
//! [`ValidationStatus`] so the wizard stays usable with half-entered data.
//! Errors clear `is_valid`, warnings do not.

mod details;
mod hardware;
mod network;

pub use details::validate_details;
pub use hardware::{validate_hardware, HardwareRequirements, MAX_NODES, REQUIREMENTS};
pub use network::validate_network;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStatus {
    pub is_valid: bool,
    pub messages: Vec<String>,
}

impl Default for ValidationStatus {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidationStatus {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            messages: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.is_valid && self.messages.is_empty()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .map(String::as_str)
            .filter(|m| is_warning(m))
    }
}

/// Messages prefixed "Warning:" are advisory; everything else is rendered as an error.
pub fn is_warning(message: &str) -> bool {
    message.starts_with("Warning")
}

/// Accumulates ordered messages and tracks whether any of them was an error.
#[derive(Debug, Default)]
pub(crate) struct StatusBuilder {
    failed: bool,
    messages: Vec<String>,
}

impl StatusBuilder {
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.failed = true;
        self.messages.push(message.into());
    }

    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub(crate) fn finish(self) -> ValidationStatus {
        ValidationStatus {
            is_valid: !self.failed,
            messages: self.messages,
        }
    }
}
