use chrono::NaiveDate;
use poc_core::export::{export_to_dir, load_plan};
use poc_core::model::{NetworkPatch, ProjectPatch};
use poc_core::Wizard;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

fn poc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_poc"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run poc binary")
}

fn write_plan(dir: &TempDir, complete: bool) -> PathBuf {
    let mut wizard = Wizard::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    wizard.update_project(ProjectPatch {
        project_name: Some("Edge Lab".into()),
        lead_engineer: Some("Sam Doe".into()),
        client_organization: Some("ACME".into()),
        ..Default::default()
    });
    if complete {
        wizard.update_network(NetworkPatch {
            management_cidr: Some("10.0.0.0/24".into()),
            gateway_ip: Some("10.0.0.1".into()),
            cluster_vip: Some("10.0.0.10".into()),
            ..Default::default()
        });
    }
    export_to_dir(wizard.state(), dir.path(), chrono::Utc::now()).expect("export plan")
}

#[test]
fn validate_passes_complete_plan() {
    let dir = tempdir().unwrap();
    let plan = write_plan(&dir, true);
    let output = poc(dir.path(), &["validate", "--plan", plan.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Network Plan:"));
    assert!(!stdout.contains("INVALID"));
}

#[test]
fn validate_fails_incomplete_plan() {
    let dir = tempdir().unwrap();
    let plan = write_plan(&dir, false);
    let output = poc(dir.path(), &["validate", "--plan", plan.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validation failed: Network Plan"));
}

#[test]
fn malformed_plan_is_reported() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("broken.json");
    std::fs::write(&plan, "not json").unwrap();
    let output = poc(dir.path(), &["validate", "--plan", plan.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a valid POC export"));
}

#[test]
fn oversized_node_count_is_rejected() {
    let dir = tempdir().unwrap();
    let plan = write_plan(&dir, true);
    let json = std::fs::read_to_string(&plan).unwrap();
    assert!(json.contains("\"nodeCount\": 3"));
    std::fs::write(&plan, json.replace("\"nodeCount\": 3", "\"nodeCount\": 4294967295")).unwrap();

    let output = poc(dir.path(), &["cloud-init", "--plan", plan.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a valid POC export"));
    assert!(stderr.contains("exceeds the supported maximum of 64"));
}

#[test]
fn cloud_init_writes_one_file_per_node() {
    let dir = tempdir().unwrap();
    let plan = write_plan(&dir, true);
    let out = dir.path().join("ci");
    let output = poc(
        dir.path(),
        &[
            "cloud-init",
            "--plan",
            plan.to_str().unwrap(),
            "--format",
            "json",
            "--out",
            out.to_str().unwrap(),
        ],
    );
    assert!(output.status.success());
    for n in 1..=3 {
        let body = std::fs::read_to_string(out.join(format!("node-{}.json", n))).unwrap();
        assert!(body.contains(&format!("\"hostname\": \"node-{}\"", n)));
    }
}

#[test]
fn report_refuses_to_overwrite_without_yes() {
    let dir = tempdir().unwrap();
    let plan = write_plan(&dir, true);
    let report = dir.path().join("edge-lab-report.txt");
    std::fs::write(&report, "keep me").unwrap();

    let output = poc(dir.path(), &["report", "--plan", plan.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("use --yes"));
    assert_eq!(std::fs::read_to_string(&report).unwrap(), "keep me");

    let output = poc(dir.path(), &["report", "--plan", plan.to_str().unwrap(), "--yes"]);
    assert!(output.status.success());
    assert!(std::fs::read_to_string(&report).unwrap().contains("ACME"));
}

#[test]
fn report_to_stdout() {
    let dir = tempdir().unwrap();
    let plan = write_plan(&dir, true);
    let output = poc(dir.path(), &["report", "--plan", plan.to_str().unwrap(), "--out", "-"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Edge Lab"));
    assert!(load_plan(&plan).is_ok());
}

#[test]
fn requirements_table_prints() {
    let dir = tempdir().unwrap();
    let output = poc(dir.path(), &["requirements"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Minimum hardware per node"));
}

#[test]
fn dump_tui_prints_every_step() {
    let dir = tempdir().unwrap();
    let output = poc(dir.path(), &["--dump-tui"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("STEP: Dashboard"));
    assert!(stdout.contains("STEP: POC Report"));
}

#[test]
fn wizard_without_tty_fails_cleanly() {
    let dir = tempdir().unwrap();
    let output = poc(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No interactive terminal"));
}

#[test]
fn config_file_is_picked_up() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("poc-assistant.toml"),
        "[cloud_init]\nuser = \"sles\"\n",
    )
    .unwrap();
    let output = poc(dir.path(), &["--dump-tui"]);
    assert!(output.status.success());

    std::fs::write(dir.path().join("poc-assistant.toml"), "bogus = 1\n").unwrap();
    let output = poc(dir.path(), &["requirements"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Config file is invalid"));
}
