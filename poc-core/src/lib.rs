//! POC Assistant core library.
//!
//! `poc-core` owns the planning state of a virtualization proof-of-concept:
//! the domain records, their validation rules, the node-list synchronization,
//! the wizard controller and the exporters (JSON plan, printable report,
//! cloud-init documents). Higher-level crates (TUI, binary) only render it.

pub mod catalogue;
pub mod cli;
pub mod cloud_config;
pub mod config;
pub mod errors;
pub mod export;
pub mod logging;
pub mod model;
pub mod report;
pub mod sync;
pub mod topology;
pub mod validation;
pub mod wizard;

pub use model::{
    CloudInitConfig, DiskType, HardwareSpec, NetworkSpec, Node, NodeRole, ProjectInfo,
};
pub use validation::ValidationStatus;
pub use wizard::{Step, Wizard, WizardState};
