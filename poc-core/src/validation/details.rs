use super::{StatusBuilder, ValidationStatus};
use crate::model::ProjectInfo;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validity of the details step.
///
/// Only project name, lead engineer and client organization gate validity;
/// everything else is advisory.
pub fn validate_details(project: &ProjectInfo) -> ValidationStatus {
    let mut status = StatusBuilder::default();

    if project.project_name.is_empty() {
        status.error("Error: Project name is required.");
    }
    if project.lead_engineer.is_empty() {
        status.error("Error: Lead engineer is required.");
    }
    if project.client_organization.is_empty() {
        status.error("Error: Client organization is required.");
    }

    for (label, value) in [
        ("Lead e-mail", &project.lead_email),
        ("Client contact e-mail", &project.client_contact_email),
    ] {
        if !value.is_empty() && !looks_like_email(value) {
            status.warn(format!(
                "Warning: {} '{}' does not look like an e-mail address.",
                label, value
            ));
        }
    }

    let start = optional_date(&mut status, "Start date", &project.start_date);
    let target = optional_date(&mut status, "Target date", &project.target_date);
    if let (Some(start), Some(target)) = (start, target) {
        if target < start {
            status.warn(format!(
                "Warning: Target date {} is before the start date {}.",
                target, start
            ));
        }
    }

    status.finish()
}

fn optional_date(status: &mut StatusBuilder, label: &str, raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            status.warn(format!(
                "Warning: {} '{}' is not in YYYY-MM-DD format.",
                label, raw
            ));
            None
        }
    }
}

fn looks_like_email(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}
