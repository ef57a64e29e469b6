//! Application state for the wizard screen.
//!
//! `App` wraps the core [`Wizard`] controller with the purely visual state the
//! terminal needs: focus, the open editor, checklists and the reset and quit gates.

use super::fields::{
    network_fields, Field, FieldKind, CLOUD_INIT_FIELDS, DETAIL_FIELDS, HARDWARE_FIELDS,
};
use crate::input::{EditOutcome, InputField};
use crate::widgets::Checklist;
use chrono::{Local, NaiveDate, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use poc_core::catalogue::{DASHBOARD, GOALS, INSTALL_CHECKLIST};
use poc_core::cloud_config::{render_all, OutputFormat};
use poc_core::export::{export_to_dir, report_filename, write_atomic};
use poc_core::model::CloudInitPatch;
use poc_core::report::render_summary;
use poc_core::wizard::Section;
use poc_core::{Step, Wizard, WizardState};
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

// ============================================================================
// Input Result
// ============================================================================

/// Result of handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListAction {
    None,
    Activate,
    Back,
    Quit,
}

// ============================================================================
// Rows
// ============================================================================

/// A focusable line in the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Module(usize),
    Field(Field),
    /// Selection toggle for `GOALS[i]` on the details step.
    Goal(usize),
    InstallTask(usize),
    /// Verification tick for the i-th goal of [`App::goal_targets`].
    GoalCheck(usize),
}

// ============================================================================
// Launch Options
// ============================================================================

#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub session_date: NaiveDate,
    pub output_dir: PathBuf,
    /// Site defaults applied on start and after every reset.
    pub cloud_init_defaults: CloudInitPatch,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            session_date: Local::now().date_naive(),
            output_dir: PathBuf::from("."),
            cloud_init_defaults: CloudInitPatch::default(),
        }
    }
}

/// Shown when quitting would drop an edited plan.
pub const QUIT_PROMPT: &str = "Quit and discard the current plan?";

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub wizard: Wizard,
    pub focus: usize,
    /// Offset for read-only steps without rows.
    pub scroll: u16,
    pub editor: Option<(Field, InputField)>,
    pub reset_pending: bool,
    pub quit_pending: bool,
    pub install_checklist: Checklist,
    pub verified_goals: BTreeSet<String>,
    pub cloud_format: OutputFormat,
    pub preview_node: usize,
    pub output_dir: PathBuf,
    pub status_message: String,
    pub error_message: Option<String>,
    site_defaults: CloudInitPatch,
    /// Plan as started; quitting from anything else asks first.
    pristine: WizardState,
}

impl Default for App {
    fn default() -> Self {
        Self::new(LaunchOptions::default())
    }
}

impl App {
    pub fn new(options: LaunchOptions) -> Self {
        let mut wizard = Wizard::new(options.session_date);

        let mut last_valid: HashMap<Section, bool> = HashMap::new();
        wizard.subscribe(move |section, status| {
            let previous = last_valid.insert(section, status.is_valid);
            if previous.is_some() && previous != Some(status.is_valid) {
                log::info!(
                    "{:?} section is now {}",
                    section,
                    if status.is_valid { "valid" } else { "invalid" }
                );
            }
        });

        let pristine = wizard.state().clone();
        let mut app = Self {
            wizard,
            focus: 0,
            scroll: 0,
            editor: None,
            reset_pending: false,
            quit_pending: false,
            install_checklist: Checklist::new(INSTALL_CHECKLIST.len()),
            verified_goals: BTreeSet::new(),
            cloud_format: OutputFormat::Yaml,
            preview_node: 0,
            output_dir: options.output_dir,
            status_message: "Ready.".to_string(),
            error_message: None,
            site_defaults: options.cloud_init_defaults,
            pristine,
        };
        app.apply_site_defaults();
        app
    }

    pub fn current_step(&self) -> Step {
        self.wizard.current_step()
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> InputResult {
        if self.reset_pending {
            return self.handle_reset_gate_input(key);
        }
        if self.quit_pending {
            return self.handle_quit_gate_input(key);
        }
        if self.editor.is_some() {
            return self.handle_editor_input(key);
        }
        if is_ctrl_c(&key) {
            return self.request_quit();
        }

        match key.code {
            KeyCode::Tab => {
                self.go_next();
                return InputResult::Continue;
            }
            KeyCode::BackTab => {
                self.go_prev();
                return InputResult::Continue;
            }
            KeyCode::Char('n') => {
                self.reset_pending = true;
                return InputResult::Continue;
            }
            _ => {}
        }

        match self.current_step() {
            Step::CloudInit => self.handle_cloud_init_input(key),
            Step::Completed => self.handle_report_input(key),
            Step::ArchitecturePreview | Step::InstallGuide => self.handle_scroll_input(key),
            _ => self.handle_form_input(key),
        }
    }

    // ------------------------------------------------------------------------
    // Per-step handlers
    // ------------------------------------------------------------------------

    fn handle_form_input(&mut self, key: KeyEvent) -> InputResult {
        let len = self.rows().len();
        let action = Self::list_action(key, len, &mut self.focus);
        self.apply_list_action(action)
    }

    fn handle_scroll_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                InputResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                InputResult::Continue
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                InputResult::Continue
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                InputResult::Continue
            }
            KeyCode::Esc => self.apply_list_action(ListAction::Back),
            KeyCode::Char('q') => self.apply_list_action(ListAction::Quit),
            _ => InputResult::Continue,
        }
    }

    fn handle_cloud_init_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Left => {
                let len = self.wizard.network().nodes.len();
                Self::adjust_index(len, &mut self.preview_node, -1);
                InputResult::Continue
            }
            KeyCode::Right => {
                let len = self.wizard.network().nodes.len();
                Self::adjust_index(len, &mut self.preview_node, 1);
                InputResult::Continue
            }
            KeyCode::Char('f') => {
                self.cloud_format = self.cloud_format.toggle();
                self.status_message = format!("Preview format: {}", self.cloud_format);
                InputResult::Continue
            }
            KeyCode::Char('w') => {
                self.write_cloud_init();
                InputResult::Continue
            }
            _ => self.handle_form_input(key),
        }
    }

    fn handle_report_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Char('e') => {
                self.export_plan();
                InputResult::Continue
            }
            KeyCode::Char('p') => {
                self.write_report();
                InputResult::Continue
            }
            _ => self.handle_scroll_input(key),
        }
    }

    fn handle_editor_input(&mut self, key: KeyEvent) -> InputResult {
        let Some((field, editor)) = self.editor.as_mut() else {
            return InputResult::Continue;
        };
        match editor.handle_key(key) {
            EditOutcome::Submit => {
                let field = *field;
                let raw = editor.value().to_string();
                match field.commit(&mut self.wizard, &raw) {
                    Ok(()) => {
                        self.editor = None;
                        self.error_message = None;
                        self.status_message = format!("Updated {}.", field.label());
                        self.clamp_focus();
                    }
                    Err(msg) => self.error_message = Some(msg),
                }
            }
            EditOutcome::Cancel => {
                self.editor = None;
                self.error_message = None;
            }
            EditOutcome::Editing | EditOutcome::Ignored => {}
        }
        InputResult::Continue
    }

    fn handle_reset_gate_input(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.answer_reset(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.answer_reset(false),
            _ => {}
        }
        InputResult::Continue
    }

    fn handle_quit_gate_input(&mut self, key: KeyEvent) -> InputResult {
        if is_ctrl_c(&key) {
            return InputResult::Quit;
        }
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => InputResult::Quit,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.quit_pending = false;
                self.status_message = "Quit cancelled.".to_string();
                InputResult::Continue
            }
            _ => InputResult::Continue,
        }
    }

    /// Quit straight away from an untouched plan, otherwise open the quit gate.
    fn request_quit(&mut self) -> InputResult {
        if self.has_changes() {
            self.quit_pending = true;
            InputResult::Continue
        } else {
            InputResult::Quit
        }
    }

    /// True once the plan differs from how it started. Navigation alone does not count.
    pub fn has_changes(&self) -> bool {
        let state = self.wizard.state();
        let mut current = state.clone();
        current.current_step = self.pristine.current_step;
        current != self.pristine
    }

    fn answer_reset(&mut self, confirmed: bool) {
        self.reset_pending = false;
        match self.wizard.reset_with(|_prompt| Ok(confirmed)) {
            Ok(true) => {
                self.focus = 0;
                self.scroll = 0;
                self.preview_node = 0;
                self.install_checklist = Checklist::new(INSTALL_CHECKLIST.len());
                self.verified_goals.clear();
                self.error_message = None;
                self.apply_site_defaults();
                self.status_message = "Started a new POC.".to_string();
            }
            Ok(false) => {
                self.status_message = "Reset cancelled; plan kept.".to_string();
            }
            Err(err) => {
                log::error!("reset failed: {:#}", err);
                self.error_message = Some(format!("Reset failed: {:#}", err));
            }
        }
    }

    // ------------------------------------------------------------------------
    // Rows and activation
    // ------------------------------------------------------------------------

    pub fn rows(&self) -> Vec<Row> {
        match self.current_step() {
            Step::Dashboard => (0..DASHBOARD.len()).map(Row::Module).collect(),
            Step::PocDetails => DETAIL_FIELDS
                .iter()
                .copied()
                .map(Row::Field)
                .chain((0..GOALS.len()).map(Row::Goal))
                .collect(),
            Step::HardwareValidation => HARDWARE_FIELDS.iter().copied().map(Row::Field).collect(),
            Step::NetworkConfig => network_fields(self.wizard.network().nodes.len())
                .into_iter()
                .map(Row::Field)
                .collect(),
            Step::InstallationProcess => (0..INSTALL_CHECKLIST.len()).map(Row::InstallTask).collect(),
            Step::InitialConfig => (0..self.goal_targets().len()).map(Row::GoalCheck).collect(),
            Step::CloudInit => CLOUD_INIT_FIELDS.iter().copied().map(Row::Field).collect(),
            Step::ArchitecturePreview | Step::InstallGuide | Step::Completed => Vec::new(),
        }
    }

    pub fn focused_row(&self) -> Option<Row> {
        self.rows().get(self.focus).copied()
    }

    /// Goals to verify on the goal-validation step: the selected ones, or the
    /// whole catalogue when nothing was selected.
    pub fn goal_targets(&self) -> Vec<String> {
        let selected = &self.wizard.project().goals;
        if selected.is_empty() {
            GOALS.iter().map(|g| g.to_string()).collect()
        } else {
            selected.iter().map(str::to_string).collect()
        }
    }

    fn activate(&mut self, row: Row) {
        match row {
            Row::Module(i) => {
                if let Some(module) = DASHBOARD.get(i) {
                    self.navigate(module.step);
                }
            }
            Row::Field(field) => match field.kind() {
                FieldKind::Choice => field.cycle(&mut self.wizard),
                FieldKind::Input(kind) => {
                    let editor = InputField::new(field.value(&self.wizard), &field.label(), kind);
                    self.editor = Some((field, editor));
                }
            },
            Row::Goal(i) => {
                if let Some(goal) = GOALS.get(i) {
                    self.wizard.toggle_goal(goal);
                    self.refresh_config_flag();
                }
            }
            Row::InstallTask(i) => {
                self.install_checklist.toggle(i);
                self.wizard
                    .set_install_complete(self.install_checklist.is_complete());
            }
            Row::GoalCheck(i) => {
                if let Some(goal) = self.goal_targets().get(i) {
                    if !self.verified_goals.remove(goal) {
                        self.verified_goals.insert(goal.clone());
                    }
                    self.refresh_config_flag();
                }
            }
        }
    }

    fn refresh_config_flag(&mut self) {
        let complete = self
            .goal_targets()
            .iter()
            .all(|goal| self.verified_goals.contains(goal));
        self.wizard.set_config_complete(complete);
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    pub fn navigate(&mut self, step: Step) {
        self.wizard.go_to(step);
        self.focus = 0;
        self.scroll = 0;
        self.editor = None;
        self.error_message = None;
        self.status_message = format!("{}.", step.title());
    }

    fn go_next(&mut self) {
        let steps = Step::all();
        if let Some(pos) = steps.iter().position(|s| *s == self.current_step()) {
            if let Some(next) = steps.get(pos + 1) {
                self.navigate(*next);
            }
        }
    }

    fn go_prev(&mut self) {
        let steps = Step::all();
        if let Some(pos) = steps.iter().position(|s| *s == self.current_step()) {
            if pos > 0 {
                self.navigate(steps[pos - 1]);
            }
        }
    }

    fn apply_list_action(&mut self, action: ListAction) -> InputResult {
        match action {
            ListAction::Activate => {
                self.error_message = None;
                if let Some(row) = self.focused_row() {
                    self.activate(row);
                }
                InputResult::Continue
            }
            ListAction::Back => {
                if self.current_step() != Step::Dashboard {
                    self.navigate(Step::Dashboard);
                }
                InputResult::Continue
            }
            ListAction::Quit => self.request_quit(),
            ListAction::None => InputResult::Continue,
        }
    }

    fn list_action(key: KeyEvent, len: usize, index: &mut usize) -> ListAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                Self::adjust_index(len, index, -1);
                ListAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                Self::adjust_index(len, index, 1);
                ListAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => ListAction::Activate,
            KeyCode::Esc => ListAction::Back,
            KeyCode::Char('q') => ListAction::Quit,
            _ => ListAction::None,
        }
    }

    fn adjust_index(len: usize, index: &mut usize, delta: isize) {
        if len == 0 {
            *index = 0;
            return;
        }
        let len_i = len as isize;
        let mut next = *index as isize + delta;
        if next < 0 {
            next = len_i - 1;
        } else if next >= len_i {
            next = 0;
        }
        *index = next as usize;
    }

    fn clamp_focus(&mut self) {
        let len = self.rows().len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
        let nodes = self.wizard.network().nodes.len();
        if self.preview_node >= nodes {
            self.preview_node = nodes.saturating_sub(1);
        }
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    fn apply_site_defaults(&mut self) {
        if self.site_defaults != CloudInitPatch::default() {
            self.wizard.update_cloud_init(self.site_defaults.clone());
        }
        self.pristine = self.wizard.state().clone();
    }

    pub fn export_plan(&mut self) {
        match export_to_dir(self.wizard.state(), &self.output_dir, Utc::now()) {
            Ok(path) => {
                self.error_message = None;
                self.status_message = format!("Exported plan to {}", path.display());
            }
            Err(err) => {
                log::error!("export failed: {:#}", err);
                self.error_message = Some(format!("Export failed: {:#}", err));
            }
        }
    }

    pub fn write_report(&mut self) {
        let state = self.wizard.state();
        let path = self
            .output_dir
            .join(report_filename(&state.project.project_name));
        let text = render_summary(state, Local::now().date_naive());
        match write_atomic(&path, &text) {
            Ok(()) => {
                log::info!("wrote report to {}", path.display());
                self.error_message = None;
                self.status_message = format!("Report written to {}", path.display());
            }
            Err(err) => {
                log::error!("report failed: {:#}", err);
                self.error_message = Some(format!("Report failed: {:#}", err));
            }
        }
    }

    pub fn write_cloud_init(&mut self) {
        let format = self.cloud_format;
        let result = render_all(
            self.wizard.cloud_init(),
            &self.wizard.network().nodes,
            format,
        )
        .and_then(|docs| {
            for doc in &docs {
                write_atomic(&self.output_dir.join(doc.filename(format)), &doc.body)?;
            }
            Ok(docs.len())
        });
        match result {
            Ok(count) => {
                log::info!("wrote {} cloud-init documents to {}", count, self.output_dir.display());
                self.error_message = None;
                self.status_message = format!(
                    "Wrote {} {} file(s) to {}",
                    count,
                    format,
                    self.output_dir.display()
                );
            }
            Err(err) => {
                log::error!("cloud-init output failed: {:#}", err);
                self.error_message = Some(format!("Cloud-init output failed: {:#}", err));
            }
        }
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        App::new(LaunchOptions {
            session_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            ..LaunchOptions::default()
        })
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_input(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn dashboard_enter_opens_module() {
        let mut app = app();
        app.handle_input(key(KeyCode::Down));
        app.handle_input(key(KeyCode::Enter));
        assert_eq!(app.current_step(), Step::HardwareValidation);
        app.handle_input(key(KeyCode::Esc));
        assert_eq!(app.current_step(), Step::Dashboard);
    }

    #[test]
    fn focus_wraps() {
        let mut app = app();
        app.handle_input(key(KeyCode::Up));
        assert_eq!(app.focus, DASHBOARD.len() - 1);
        app.handle_input(key(KeyCode::Down));
        assert_eq!(app.focus, 0);
    }

    #[test]
    fn editing_a_field_updates_the_controller() {
        let mut app = app();
        app.navigate(Step::PocDetails);
        app.handle_input(key(KeyCode::Enter));
        assert!(app.editor.is_some());
        type_text(&mut app, "Edge");
        app.handle_input(key(KeyCode::Enter));
        assert!(app.editor.is_none());
        assert_eq!(app.wizard.project().project_name, "Edge");
    }

    #[test]
    fn q_while_editing_is_text() {
        let mut app = app();
        app.navigate(Step::PocDetails);
        app.handle_input(key(KeyCode::Enter));
        assert_eq!(app.handle_input(key(KeyCode::Char('q'))), InputResult::Continue);
        app.handle_input(key(KeyCode::Esc));
        assert!(app.editor.is_none());
        assert_eq!(app.wizard.project().project_name, "");
    }

    #[test]
    fn invalid_number_keeps_editor_open() {
        let mut app = app();
        app.navigate(Step::HardwareValidation);
        app.handle_input(key(KeyCode::Enter));
        let ctrl_u = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('u'))
        };
        app.handle_input(ctrl_u);
        app.handle_input(key(KeyCode::Enter));
        assert!(app.editor.is_some());
        assert_eq!(app.error_message.as_deref(), Some("CPU cores cannot be empty"));
    }

    #[test]
    fn shrinking_nodes_clamps_focus() {
        let mut app = app();
        app.navigate(Step::NetworkConfig);
        let last = app.rows().len() - 1;
        app.focus = last;
        app.wizard.update_hardware(poc_core::model::HardwarePatch {
            node_count: Some(1),
            ..Default::default()
        });
        app.clamp_focus();
        assert_eq!(app.focus, app.rows().len() - 1);
    }

    #[test]
    fn install_checklist_sets_flag_when_complete() {
        let mut app = app();
        app.navigate(Step::InstallationProcess);
        for _ in 0..INSTALL_CHECKLIST.len() {
            app.handle_input(key(KeyCode::Char(' ')));
            app.handle_input(key(KeyCode::Down));
        }
        assert!(app.wizard.status().install);
        app.handle_input(key(KeyCode::Enter));
        assert!(!app.wizard.status().install);
    }

    #[test]
    fn goal_validation_tracks_selected_goals() {
        let mut app = app();
        app.navigate(Step::PocDetails);
        app.focus = DETAIL_FIELDS.len();
        app.handle_input(key(KeyCode::Enter));
        assert_eq!(app.wizard.project().goals.len(), 1);

        app.navigate(Step::InitialConfig);
        assert_eq!(app.rows().len(), 1);
        app.handle_input(key(KeyCode::Enter));
        assert!(app.wizard.status().config);
    }

    #[test]
    fn reset_gate_declines_and_confirms() {
        let mut app = app();
        app.wizard.go_to(Step::HardwareValidation);
        app.handle_input(key(KeyCode::Char('n')));
        assert!(app.reset_pending);
        app.handle_input(key(KeyCode::Char('n')));
        assert!(!app.reset_pending);
        assert_eq!(app.current_step(), Step::HardwareValidation);

        app.handle_input(key(KeyCode::Char('n')));
        app.handle_input(key(KeyCode::Char('y')));
        assert_eq!(app.current_step(), Step::Dashboard);
        assert_eq!(app.status_message, "Started a new POC.");
    }

    #[test]
    fn quit_from_untouched_plan_needs_no_confirmation() {
        let mut app = app();
        app.navigate(Step::NetworkConfig);
        assert!(!app.has_changes());
        assert_eq!(app.handle_input(key(KeyCode::Char('q'))), InputResult::Quit);
    }

    #[test]
    fn quit_gate_protects_edited_plan() {
        let mut app = app();
        app.navigate(Step::PocDetails);
        app.handle_input(key(KeyCode::Enter));
        type_text(&mut app, "Edge");
        app.handle_input(key(KeyCode::Enter));
        assert!(app.has_changes());

        assert_eq!(app.handle_input(key(KeyCode::Char('q'))), InputResult::Continue);
        assert!(app.quit_pending);
        assert!(crate::wizard::dump_step(&app)
            .contains("- Status: Quit and discard the current plan? (y/n)"));
        assert_eq!(app.handle_input(key(KeyCode::Esc)), InputResult::Continue);
        assert!(!app.quit_pending);
        assert_eq!(app.wizard.project().project_name, "Edge");

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(app.handle_input(ctrl_c), InputResult::Continue);
        assert!(app.quit_pending);
        assert_eq!(app.handle_input(key(KeyCode::Char('y'))), InputResult::Quit);
    }

    #[test]
    fn site_defaults_do_not_count_as_changes() {
        let app = App::new(LaunchOptions {
            cloud_init_defaults: CloudInitPatch {
                user: Some("sles".into()),
                ..Default::default()
            },
            ..LaunchOptions::default()
        });
        assert!(!app.has_changes());
    }

    #[test]
    fn site_defaults_survive_reset() {
        let mut app = App::new(LaunchOptions {
            cloud_init_defaults: CloudInitPatch {
                user: Some("sles".into()),
                ..Default::default()
            },
            ..LaunchOptions::default()
        });
        assert_eq!(app.wizard.cloud_init().user, "sles");
        app.handle_input(key(KeyCode::Char('n')));
        app.handle_input(key(KeyCode::Char('y')));
        assert_eq!(app.wizard.cloud_init().user, "sles");
    }

    #[test]
    fn tab_walks_steps_in_order() {
        let mut app = app();
        for step in &Step::all()[1..] {
            app.handle_input(key(KeyCode::Tab));
            assert_eq!(app.current_step(), *step);
        }
        app.handle_input(key(KeyCode::Tab));
        assert_eq!(app.current_step(), Step::Completed);
        app.handle_input(key(KeyCode::BackTab));
        assert_eq!(app.current_step(), Step::CloudInit);
    }

    #[test]
    fn cloud_init_preview_cycles_nodes_and_format() {
        let mut app = app();
        app.navigate(Step::CloudInit);
        app.handle_input(key(KeyCode::Left));
        assert_eq!(app.preview_node, 2);
        app.handle_input(key(KeyCode::Char('f')));
        assert_eq!(app.cloud_format, OutputFormat::Json);
    }
}
