//! Single-screen rendering for the wizard.

mod content;
mod dump;
mod render;
mod sidebar;

pub use dump::dump_step;
pub use render::draw;

pub const TITLE: &str = concat!("SUSE Virtualization POC Assistant (v", env!("CARGO_PKG_VERSION"), ")");
