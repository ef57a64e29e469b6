use super::super::app::App;
use crate::widgets::status_marker;
use poc_core::catalogue::Indicator;
use poc_core::Step;

/// Completion flag shown next to a step, if the step has one.
fn step_indicator(step: Step) -> Option<Indicator> {
    match step {
        Step::PocDetails => Some(Indicator::Details),
        Step::HardwareValidation => Some(Indicator::Hardware),
        Step::NetworkConfig => Some(Indicator::Network),
        Step::InstallationProcess => Some(Indicator::Install),
        Step::InitialConfig => Some(Indicator::Config),
        _ => None,
    }
}

pub(super) fn build_step_sidebar(app: &App) -> String {
    let completion = app.wizard.status();
    let mut lines = Vec::new();
    for step in Step::all() {
        let cursor = if *step == app.current_step() { "▶" } else { " " };
        let marker = step_indicator(*step)
            .map(|ind| status_marker(ind.is_set(&completion)))
            .unwrap_or(" ");
        lines.push(format!("{} {} {}", cursor, marker, step.title()));
    }
    lines.join("\n")
}
