use super::super::app::{App, Row, QUIT_PROMPT};
use crate::widgets::{message_line, status_marker, CheckboxState};
use poc_core::catalogue::{DASHBOARD, GOALS, INSTALL_CHECKLIST, INSTALL_GUIDE};
use poc_core::cloud_config::render_all;
use poc_core::report::render_summary;
use poc_core::topology::render_topology;
use poc_core::validation::REQUIREMENTS;
use poc_core::wizard::{Section, RESET_PROMPT};
use poc_core::Step;

const FOCUS: &str = "> ";
const NO_FOCUS: &str = "  ";

pub(super) fn expected_actions(step: Step) -> &'static str {
    match step {
        Step::Dashboard => "↑/↓ select | Enter open | Tab next step | n new POC | q quit",
        Step::PocDetails | Step::HardwareValidation | Step::NetworkConfig => {
            "↑/↓ field | Enter edit/toggle | Tab/Shift-Tab step | Esc dashboard | q quit"
        }
        Step::InstallationProcess | Step::InitialConfig => {
            "↑/↓ item | Space/Enter tick | Tab/Shift-Tab step | Esc dashboard | q quit"
        }
        Step::CloudInit => {
            "↑/↓ field | Enter edit | ←/→ node | f YAML/JSON | w write files | Esc dashboard"
        }
        Step::ArchitecturePreview | Step::InstallGuide => {
            "↑/↓ scroll | Tab/Shift-Tab step | Esc dashboard | q quit"
        }
        Step::Completed => "e export JSON | p write report | ↑/↓ scroll | Esc dashboard | q quit",
    }
}

pub(super) fn status_message(app: &App) -> String {
    if app.reset_pending {
        format!("{} (y/n)", RESET_PROMPT)
    } else if app.quit_pending {
        format!("{} (y/n)", QUIT_PROMPT)
    } else if let Some(err) = &app.error_message {
        format!("✖ {}", err)
    } else if let Some((field, _)) = &app.editor {
        format!("Editing {}: Enter to save, Esc to cancel", field.label())
    } else {
        app.status_message.clone()
    }
}

/// Body lines for the current step. Rows from [`App::rows`] come first in
/// order, one line each, so `app.focus` indexes straight into the result.
pub(super) fn build_step_lines(app: &App) -> Vec<String> {
    let mut lines: Vec<String> = app
        .rows()
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let prefix = if idx == app.focus { FOCUS } else { NO_FOCUS };
            format!("{}{}", prefix, row_text(app, row))
        })
        .collect();

    let wizard = &app.wizard;
    match app.current_step() {
        Step::Dashboard => {
            lines.push(String::new());
            if let Some(module) = DASHBOARD.get(app.focus) {
                lines.push(module.description.to_string());
            }
        }
        Step::PocDetails => {}
        Step::HardwareValidation => {
            lines.push(String::new());
            lines.push(format!(
                "Minimum per node: {} cores, {} GB RAM, {} GB disk, {} Gbps NIC",
                REQUIREMENTS.cpu_cores,
                REQUIREMENTS.ram_gb,
                REQUIREMENTS.disk_gb,
                REQUIREMENTS.network_gb
            ));
            lines.push(format!(
                "High availability needs {} or more nodes.",
                REQUIREMENTS.ha_nodes
            ));
        }
        Step::NetworkConfig => {
            lines.push(String::new());
            lines.push("Leave a node IP empty to use DHCP.".to_string());
        }
        Step::ArchitecturePreview => {
            let state = wizard.state();
            lines.extend(render_topology(
                &state.project.project_name,
                &state.hardware,
                &state.network,
            ));
        }
        Step::InstallationProcess => {
            lines.push(String::new());
            lines.push(format!(
                "{}/{} tasks complete",
                app.install_checklist.checked(),
                app.install_checklist.len()
            ));
        }
        Step::InstallGuide => {
            for (heading, items) in INSTALL_GUIDE {
                lines.push(heading.to_string());
                lines.extend(items.iter().map(|item| format!("  - {}", item)));
                lines.push(String::new());
            }
        }
        Step::InitialConfig => {
            lines.push(String::new());
            if wizard.project().goals.is_empty() {
                lines.push("No goals selected; showing the full catalogue.".to_string());
            }
        }
        Step::CloudInit => lines.extend(cloud_init_preview(app)),
        Step::Completed => {
            lines.extend(render_summary(wizard.state(), wizard.session_date()).lines().map(str::to_string));
        }
    }
    lines
}

fn row_text(app: &App, row: Row) -> String {
    let wizard = &app.wizard;
    match row {
        Row::Module(i) => match DASHBOARD.get(i) {
            Some(module) => format!(
                "{} {}",
                status_marker(module.indicator.is_set(&wizard.status())),
                module.title
            ),
            None => String::new(),
        },
        Row::Field(field) => {
            let shown = match &app.editor {
                Some((editing, input)) if *editing == field => input.display(),
                _ => field.display(wizard),
            };
            format!("{}: {}", field.label(), shown)
        }
        Row::Goal(i) => {
            let goal = GOALS.get(i).copied().unwrap_or_default();
            let state = CheckboxState::from(wizard.project().goals.contains(goal));
            format!("{} {}", state.symbol(), goal)
        }
        Row::InstallTask(i) => format!(
            "{} {}",
            app.install_checklist.get(i).symbol(),
            INSTALL_CHECKLIST.get(i).copied().unwrap_or_default()
        ),
        Row::GoalCheck(i) => {
            let goal = app.goal_targets().get(i).cloned().unwrap_or_default();
            let state = CheckboxState::from(app.verified_goals.contains(&goal));
            format!("{} {}", state.symbol(), goal)
        }
    }
}

fn cloud_init_preview(app: &App) -> Vec<String> {
    let wizard = &app.wizard;
    let nodes = &wizard.network().nodes;
    let mut lines = vec![String::new()];
    if app.preview_node >= nodes.len() {
        lines.push("No nodes to preview.".to_string());
        return lines;
    }
    // Render the whole set so the preview shows the deduplicated hostname.
    match render_all(wizard.cloud_init(), nodes, app.cloud_format) {
        Ok(mut docs) => {
            let doc = docs.swap_remove(app.preview_node);
            lines.push(format!(
                "Preview: node {}/{} ({}) [{}]",
                app.preview_node + 1,
                nodes.len(),
                doc.hostname,
                app.cloud_format
            ));
            lines.extend(doc.body.lines().map(str::to_string));
        }
        Err(err) => lines.push(format!("✖ {:#}", err)),
    }
    lines
}

pub(super) fn build_info_panel(app: &App) -> String {
    let wizard = &app.wizard;
    let mut lines = Vec::new();

    for (section, label) in [
        (Section::Details, "Details"),
        (Section::Hardware, "Hardware"),
        (Section::Network, "Network"),
    ] {
        let status = wizard.validation(section);
        let verdict = if status.is_valid { "valid" } else { "invalid" };
        lines.push(format!("{} {}: {}", status_marker(status.is_valid), label, verdict));
        lines.extend(status.messages.iter().map(|m| format!("  {}", message_line(m))));
    }

    let completion = wizard.status();
    lines.push(String::new());
    lines.push(format!("{} Installation", status_marker(completion.install)));
    lines.push(format!("{} Goals validated", status_marker(completion.config)));
    lines.push(String::new());
    lines.push(format!("Nodes: {}", wizard.network().nodes.len()));
    lines.push(format!("Output: {}", app.output_dir.display()));

    lines.join("\n")
}
