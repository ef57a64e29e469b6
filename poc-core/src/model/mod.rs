//! Domain records for a POC plan.
//!
//! Field names serialize in camelCase; the export document keeps the exact key
//! names the planning tool has always produced.

mod cloud_init;
mod hardware;
mod network;
mod project;

pub use cloud_init::{
    CloudInitConfig, CloudInitPatch, InterfaceOverride, MountEntry, WriteFile, NAME_TOKEN,
    POSITION_TOKEN,
};
pub use hardware::{DiskType, HardwarePatch, HardwareSpec};
pub use network::{NetworkPatch, NetworkSpec, Node, NodeRole};
pub use project::{Goals, ProjectInfo, ProjectPatch};
