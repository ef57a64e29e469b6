//! POC Assistant TUI.
//!
//! A ratatui front end over the `poc-core` wizard controller. Views only read
//! the controller's state; every change goes through its update methods.

pub mod input;
pub mod widgets;
pub mod wizard;
