//! JSON plan export and the filenames derived from the project name.

use crate::errors::{PocError, Result};
use crate::model::{CloudInitConfig, HardwareSpec, NetworkSpec, ProjectInfo};
use crate::sync::sync_nodes;
use crate::validation::{validate_details, validate_hardware, validate_network, MAX_NODES};
use crate::wizard::{Completion, Step, WizardState};
use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const FALLBACK_SLUG: &str = "suse-poc";

/// The exported plan document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PocExport {
    pub project_info: ProjectInfo,
    pub hardware_spec: HardwareSpec,
    pub network_spec: NetworkSpec,
    pub cloud_init_config: CloudInitConfig,
    pub export_date: String,
}

impl PocExport {
    pub fn from_state(state: &WizardState, now: DateTime<Utc>) -> Self {
        Self {
            project_info: state.project.clone(),
            hardware_spec: state.hardware.clone(),
            network_spec: state.network.clone(),
            cloud_init_config: state.cloud_init.clone(),
            export_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Rebuild a state snapshot from an imported plan.
    ///
    /// Completion flags for the checklist steps are not part of the document
    /// and start cleared. A `nodeCount` above [`MAX_NODES`] is rejected.
    pub fn into_state(self) -> Result<WizardState> {
        if self.hardware_spec.node_count > MAX_NODES {
            return Err(PocError::InvalidPlan(format!(
                "nodeCount {} exceeds the supported maximum of {}",
                self.hardware_spec.node_count, MAX_NODES
            ))
            .into());
        }
        let mut network = self.network_spec;
        if sync_nodes(&mut network.nodes, self.hardware_spec.node_count) {
            log::warn!(
                "plan lists a different number of nodes than nodeCount {}; resynchronized",
                self.hardware_spec.node_count
            );
        }
        let completion = Completion {
            details: validate_details(&self.project_info).is_valid,
            hardware: validate_hardware(&self.hardware_spec).is_valid,
            network: validate_network(&network).is_valid,
            install: false,
            config: false,
        };
        Ok(WizardState {
            project: self.project_info,
            hardware: self.hardware_spec,
            network,
            cloud_init: self.cloud_init_config,
            current_step: Step::Dashboard,
            completion,
        })
    }
}

/// Lowercase `name`, collapse each run of non-`[a-z0-9]` into one `-` and trim
/// hyphens from both ends. May return an empty string.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out
}

fn file_stem(project_name: &str) -> String {
    let stem = slug(project_name);
    if stem.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        stem
    }
}

/// `"Edge Migration POC!"` -> `edge-migration-poc-config.json`.
pub fn export_filename(project_name: &str) -> String {
    format!("{}-config.json", file_stem(project_name))
}

pub fn report_filename(project_name: &str) -> String {
    format!("{}-report.txt", file_stem(project_name))
}

pub fn to_json(export: &PocExport) -> Result<String> {
    serde_json::to_string_pretty(export).context("failed to serialize plan export")
}

/// Serialize `state` into `dir` under its derived filename.
pub fn export_to_dir(state: &WizardState, dir: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    let path = dir.join(export_filename(&state.project.project_name));
    let export = PocExport::from_state(state, now);
    write_json_atomic(&path, &export)?;
    log::info!("exported plan to {}", path.display());
    Ok(path)
}

pub fn load_plan(path: &Path) -> Result<PocExport> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read plan file: {}", path.display()))?;
    let plan = serde_json::from_str(&raw)
        .map_err(|err| PocError::InvalidPlan(format!("{}: {}", path.display(), err)))?;
    log::debug!("loaded plan from {}", path.display());
    Ok(plan)
}

pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("failed to serialize document")?;
    write_atomic(path, &payload)
}

/// Write through a sibling temp file and rename over `path`.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    fs::write(&tmp, contents).with_context(|| format!("failed to write {}", tmp.display()))?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("failed to atomically replace {}", path.display()));
    }
    Ok(())
}
