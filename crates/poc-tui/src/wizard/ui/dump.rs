use super::super::app::App;
use super::content::{build_info_panel, build_step_lines, expected_actions, status_message};
use super::TITLE;

pub fn dump_step(app: &App) -> String {
    let lines = build_step_lines(app);
    let body = if lines.is_empty() {
        "(no body content)".to_string()
    } else {
        lines.join("\n")
    };

    format!(
        "STEP: {}\n\n- Header: {}\n- Body contents:\n{}\n- Info panel:\n{}\n- Status: {}\n- Expected user actions (keys): {}\n",
        app.current_step().title(),
        TITLE,
        body,
        build_info_panel(app),
        status_message(app),
        expected_actions(app.current_step())
    )
}
