use anyhow::anyhow;
use poc_assistant::ui::confirm;
use std::sync::atomic::{AtomicBool, Ordering};

#[test]
fn overwrite_requires_confirmation() {
    let ran = AtomicBool::new(false);
    let result = confirm::confirm_and_run_with(
        "report.txt already exists. Overwrite?",
        |_prompt| Ok(false),
        || {
            ran.store(true, Ordering::SeqCst);
            Ok(())
        },
    )
    .expect("confirmation result");

    assert!(!result);
    assert!(!ran.load(Ordering::SeqCst));
}

#[test]
fn overwrite_runs_on_yes() {
    let ran = AtomicBool::new(false);
    let result = confirm::confirm_and_run_with(
        "report.txt already exists. Overwrite?",
        |_prompt| Ok(true),
        || {
            ran.store(true, Ordering::SeqCst);
            Ok(())
        },
    )
    .expect("confirmation result");

    assert!(result);
    assert!(ran.load(Ordering::SeqCst));
}

#[test]
fn overwrite_aborts_on_prompt_error() {
    let ran = AtomicBool::new(false);
    let result = confirm::confirm_and_run_with(
        "report.txt already exists. Overwrite?",
        |_prompt| Err(anyhow!("stdin closed")),
        || {
            ran.store(true, Ordering::SeqCst);
            Ok(())
        },
    );

    assert!(result.is_err());
    assert!(!ran.load(Ordering::SeqCst));
}

#[test]
fn prompt_text_is_passed_through() {
    let result = confirm::confirm_and_run_with(
        "plan.json already exists. Overwrite?",
        |prompt| Ok(prompt.starts_with("plan.json")),
        || Ok(()),
    )
    .expect("confirmation result");
    assert!(result);
}
