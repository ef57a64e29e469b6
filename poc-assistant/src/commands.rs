//! Scripted subcommands working on an exported plan.

use crate::ui::{self, confirm};
use anyhow::{Context, Result};
use chrono::Local;
use poc_core::cloud_config::{render_all, OutputFormat};
use poc_core::errors::PocError;
use poc_core::export::{load_plan, report_filename, write_atomic};
use poc_core::report::render_summary;
use poc_core::validation::{validate_details, validate_hardware, validate_network, REQUIREMENTS};
use poc_core::{ValidationStatus, WizardState};
use std::fmt::Write as _;
use std::path::Path;

/// Path argument meaning "standard output".
pub const STDOUT_PATH: &str = "-";

fn load_state(plan: &Path) -> Result<WizardState> {
    let state = load_plan(plan)?.into_state()?;
    log::info!("loaded plan {}", plan.display());
    Ok(state)
}

// ============================================================================
// validate
// ============================================================================

/// Section statuses of a plan, in display order.
pub fn section_statuses(state: &WizardState) -> [(&'static str, ValidationStatus); 3] {
    [
        ("Client Information", validate_details(&state.project)),
        ("Hardware Specs", validate_hardware(&state.hardware)),
        ("Network Plan", validate_network(&state.network)),
    ]
}

pub fn format_statuses(statuses: &[(&'static str, ValidationStatus)]) -> String {
    let mut out = String::new();
    for (label, status) in statuses {
        let verdict = if status.is_valid { "valid" } else { "INVALID" };
        let _ = writeln!(out, "{:<20} {}", format!("{}:", label), verdict);
        for message in &status.messages {
            let _ = writeln!(out, "  - {}", message);
        }
    }
    out
}

pub fn validate(plan: &Path) -> Result<()> {
    let state = load_state(plan)?;
    let statuses = section_statuses(&state);
    print!("{}", format_statuses(&statuses));

    let failed: Vec<&str> = statuses
        .iter()
        .filter(|(_, status)| !status.is_valid)
        .map(|(label, _)| *label)
        .collect();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(PocError::ValidationFailed(failed.join(", ")).into())
    }
}

// ============================================================================
// cloud-init
// ============================================================================

pub fn cloud_init(plan: &Path, format: OutputFormat, out: Option<&Path>, yes: bool) -> Result<()> {
    let state = load_state(plan)?;
    let docs = render_all(&state.cloud_init, &state.network.nodes, format)?;
    if docs.is_empty() {
        log::warn!("plan has no nodes; nothing to render");
        return Ok(());
    }

    match out {
        None => {
            for (idx, doc) in docs.iter().enumerate() {
                if idx > 0 {
                    println!();
                }
                println!("==> {} <==", doc.filename(format));
                print!("{}", doc.body);
            }
        }
        Some(dir) => {
            for doc in &docs {
                write_output(&dir.join(doc.filename(format)), &doc.body, yes)?;
            }
        }
    }
    Ok(())
}

// ============================================================================
// report
// ============================================================================

pub fn report(plan: &Path, out: Option<&Path>, output_dir: &Path, yes: bool) -> Result<()> {
    let state = load_state(plan)?;
    let text = render_summary(&state, Local::now().date_naive());

    match out {
        Some(path) if path.as_os_str() == STDOUT_PATH => {
            print!("{}", text);
            Ok(())
        }
        Some(path) => write_output(path, &text, yes),
        None => write_output(
            &output_dir.join(report_filename(&state.project.project_name)),
            &text,
            yes,
        ),
    }
}

// ============================================================================
// requirements
// ============================================================================

pub fn requirements_table() -> String {
    let req = REQUIREMENTS;
    let rows = [
        ("CPU cores", req.cpu_cores.to_string()),
        ("RAM (GB)", req.ram_gb.to_string()),
        ("Disk (GB)", format!("{} (SSD or NVMe recommended)", req.disk_gb)),
        ("Network (Gbps)", req.network_gb.to_string()),
        (
            "Nodes",
            format!("{} ({} for high availability)", req.min_nodes, req.ha_nodes),
        ),
    ];
    let mut out = String::from("Minimum hardware per node\n");
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<16} {}", label, value);
    }
    out
}

// ============================================================================
// Output
// ============================================================================

/// Write `contents` to `path`, asking before replacing an existing file.
///
/// A declined prompt skips the file. Without `--yes` and without a terminal
/// to ask on, replacing a file is refused.
fn write_output(path: &Path, contents: &str, yes: bool) -> Result<()> {
    if yes || !path.exists() {
        return write_and_report(path, contents);
    }
    if !ui::can_prompt() {
        return Err(PocError::WouldOverwrite(path.to_path_buf()).into());
    }
    let prompt = format!("{} already exists. Overwrite?", path.display());
    if !confirm::confirm_and_run(&prompt, || write_and_report(path, contents))? {
        println!("Skipped {}", path.display());
    }
    Ok(())
}

fn write_and_report(path: &Path, contents: &str) -> Result<()> {
    write_atomic(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
