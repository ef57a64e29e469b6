//! Shared prompt helpers for CLI flows.

use std::io::IsTerminal;

pub mod confirm;

/// Prompts are only possible with a terminal on both ends.
pub fn can_prompt() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}
