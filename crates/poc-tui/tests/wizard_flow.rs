use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use poc_core::export::load_plan;
use poc_core::Step;
use poc_tui::wizard::{dump_all_steps, App, InputResult, LaunchOptions};
use tempfile::tempdir;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..key(KeyCode::Char(c))
    }
}

fn options(dir: &std::path::Path) -> LaunchOptions {
    LaunchOptions {
        session_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        output_dir: dir.to_path_buf(),
        ..LaunchOptions::default()
    }
}

/// Focus `row`, open its editor, replace the text and save.
fn edit(app: &mut App, row: usize, text: &str) {
    app.focus = row;
    app.handle_input(key(KeyCode::Enter));
    app.handle_input(ctrl('u'));
    for ch in text.chars() {
        app.handle_input(key(KeyCode::Char(ch)));
    }
    app.handle_input(key(KeyCode::Enter));
    assert!(app.editor.is_none(), "editor still open: {:?}", app.error_message);
}

#[test]
fn plan_a_poc_and_export_it() {
    let dir = tempdir().unwrap();
    let mut app = App::new(options(dir.path()));

    // Dashboard -> Client Information
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.current_step(), Step::PocDetails);
    edit(&mut app, 0, "Edge Lab");
    edit(&mut app, 1, "Sam Doe");
    edit(&mut app, 4, "ACME");
    assert!(app.wizard.status().details);

    app.handle_input(key(KeyCode::Tab));
    assert_eq!(app.current_step(), Step::HardwareValidation);
    edit(&mut app, 5, "4");
    assert_eq!(app.wizard.network().nodes.len(), 4);
    assert!(app.wizard.status().hardware);

    app.handle_input(key(KeyCode::Tab));
    assert_eq!(app.current_step(), Step::NetworkConfig);
    assert_eq!(app.rows().len(), 5 + 4 * 3);
    edit(&mut app, 0, "10.0.0.0/24");
    edit(&mut app, 1, "10.0.0.1");
    edit(&mut app, 2, "10.0.0.10");
    assert!(app.wizard.status().network);

    // Role of node-1 cycles Hybrid -> Master
    app.focus = 7;
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(
        app.wizard.network().nodes[0].role,
        poc_core::NodeRole::Master
    );

    app.navigate(Step::Completed);
    app.handle_input(key(KeyCode::Char('e')));
    app.handle_input(key(KeyCode::Char('p')));
    assert!(app.error_message.is_none());

    let plan = load_plan(&dir.path().join("edge-lab-config.json")).unwrap();
    assert_eq!(plan.project_info.project_name, "Edge Lab");
    assert_eq!(plan.network_spec.nodes.len(), 4);
    let report = std::fs::read_to_string(dir.path().join("edge-lab-report.txt")).unwrap();
    assert!(report.contains("ACME"));

    // An edited plan asks before quitting.
    assert_eq!(app.handle_input(key(KeyCode::Char('q'))), InputResult::Continue);
    assert!(app.quit_pending);
    assert_eq!(app.handle_input(key(KeyCode::Char('y'))), InputResult::Quit);
}

#[test]
fn cloud_init_files_land_in_output_dir() {
    let dir = tempdir().unwrap();
    let mut app = App::new(options(dir.path()));
    app.navigate(Step::CloudInit);
    edit(&mut app, 7, "poc-{dsp}");
    app.handle_input(key(KeyCode::Char('w')));
    assert!(app.error_message.is_none());
    for n in 1..=3 {
        let body = std::fs::read_to_string(dir.path().join(format!("poc-{}.yaml", n))).unwrap();
        assert!(body.starts_with("#cloud-config\n"));
    }
}

#[test]
fn cloud_init_lists_are_editable_and_rendered() {
    let dir = tempdir().unwrap();
    let mut app = App::new(options(dir.path()));
    app.navigate(Step::CloudInit);
    edit(&mut app, 7, "harvester");
    edit(&mut app, 8, "/etc/motd=Edge POC");
    edit(&mut app, 9, "/dev/sdb:/var/lib/longhorn");
    edit(&mut app, 10, "eth1:10.0.0.21/24@10.0.0.1");
    app.handle_input(key(KeyCode::Char('w')));
    assert!(app.error_message.is_none());

    let first = std::fs::read_to_string(dir.path().join("harvester.yaml")).unwrap();
    assert!(first.contains("/var/lib/longhorn"));
    assert!(first.contains("Edge POC"));
    assert!(first.contains("10.0.0.21/24"));
    for n in 2..=3 {
        assert!(dir.path().join(format!("harvester-{}.yaml", n)).exists());
    }
}

#[test]
fn oversized_node_count_stays_in_editor() {
    let dir = tempdir().unwrap();
    let mut app = App::new(options(dir.path()));
    app.navigate(Step::HardwareValidation);
    app.focus = 5;
    app.handle_input(key(KeyCode::Enter));
    app.handle_input(ctrl('u'));
    for ch in "100000".chars() {
        app.handle_input(key(KeyCode::Char(ch)));
    }
    app.handle_input(key(KeyCode::Enter));
    assert!(app.editor.is_some());
    assert!(app.error_message.as_deref().unwrap_or_default().contains("at most"));
    assert_eq!(app.wizard.network().nodes.len(), 3);
}

#[test]
fn lowering_node_count_drops_trailing_nodes() {
    let dir = tempdir().unwrap();
    let mut app = App::new(options(dir.path()));
    app.navigate(Step::NetworkConfig);
    edit(&mut app, 5, "alpha");
    app.navigate(Step::HardwareValidation);
    edit(&mut app, 5, "1");
    let nodes = &app.wizard.network().nodes;
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].name, "alpha");
}

#[test]
fn dump_covers_every_step() {
    let dir = tempdir().unwrap();
    let dumps = dump_all_steps(options(dir.path()));
    assert_eq!(dumps.len(), Step::all().len());
    assert!(dumps[0].starts_with("STEP: Dashboard"));
    assert!(dumps[4].contains("Cluster VIP"));
    assert!(dumps.iter().all(|d| d.contains("Expected user actions")));
}
