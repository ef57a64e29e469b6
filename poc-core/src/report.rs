//! Printable plan summary.
//!
//! [`render_summary`] is a pure function of the state and the report date, so
//! rendering twice yields identical text and never touches the wizard.

use crate::topology::render_topology;
use crate::wizard::WizardState;
use chrono::NaiveDate;
use std::fmt::Write as _;

pub const REPORT_BRAND: &str = "SUSE Virtualization";
pub const REPORT_KIND: &str = "POC Validation Report";
pub const REPORT_SUBTITLE: &str = "Configuration Summary & Infrastructure Plan";

const RULE_WIDTH: usize = 72;

fn value(raw: &str, placeholder: &str) -> String {
    if raw.trim().is_empty() {
        format!("({})", placeholder)
    } else {
        raw.to_string()
    }
}

fn not_specified(raw: &str) -> String {
    value(raw, "Not Specified")
}

fn count(raw: u32, placeholder: &str) -> String {
    if raw == 0 {
        format!("({})", placeholder)
    } else {
        raw.to_string()
    }
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}

pub fn render_summary(state: &WizardState, date: NaiveDate) -> String {
    let project = &state.project;
    let hw = &state.hardware;
    let net = &state.network;
    let ci = &state.cloud_init;
    let mut out = String::new();

    // writeln! into a String cannot fail.
    let _ = writeln!(out, "{:<40}{:>32}", REPORT_BRAND, REPORT_KIND);
    let _ = writeln!(out, "{:>72}", date.format("%Y-%m-%d").to_string());
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    let _ = writeln!(out, "{}", value(&project.project_name, "Untitled Project"));
    let _ = writeln!(out, "{}", REPORT_SUBTITLE);

    section(&mut out, "Project Stakeholders & Schedule");
    let _ = writeln!(out, "Lead Engineer:   {}", not_specified(&project.lead_engineer));
    let _ = writeln!(out, "  Organization:  {}", not_specified(&project.organization));
    let _ = writeln!(out, "  E-mail:        {}", not_specified(&project.lead_email));
    let _ = writeln!(out, "Client Contact:  {}", not_specified(&project.client_contact_name));
    let _ = writeln!(
        out,
        "  Role:          {}",
        value(&project.client_contact_role, "Role Not Specified")
    );
    let _ = writeln!(out, "  Organization:  {}", not_specified(&project.client_organization));
    let _ = writeln!(out, "  E-mail:        {}", not_specified(&project.client_contact_email));
    let _ = writeln!(out, "  Phone:         {}", not_specified(&project.client_contact_phone));
    let _ = writeln!(out, "Start Date:      {}", not_specified(&project.start_date));
    let _ = writeln!(out, "Target End:      {}", not_specified(&project.target_date));

    section(&mut out, "Hardware Specification");
    let _ = writeln!(
        out,
        "Total Nodes:     {} Physical Servers",
        count(hw.node_count, "Not Specified")
    );
    let _ = writeln!(
        out,
        "Compute / Node:  {} Cores, {} GB RAM",
        count(hw.cpu_cores, "0"),
        count(hw.ram_gb, "0")
    );
    let _ = writeln!(
        out,
        "Storage / Node:  {} GB ({})",
        count(hw.disk_gb, "0"),
        hw.disk_type
    );
    let _ = writeln!(
        out,
        "Network / Node:  {} Gbps Uplink",
        count(hw.network_speed_gb, "0")
    );

    section(&mut out, "Network Overview");
    let _ = writeln!(out, "Management CIDR: {}", not_specified(&net.management_cidr));
    let _ = writeln!(out, "Gateway:         {}", not_specified(&net.gateway_ip));
    let _ = writeln!(out, "Cluster VIP:     {}", not_specified(&net.cluster_vip));
    let _ = writeln!(out, "DNS Servers:     {}", not_specified(&net.dns_servers));
    let vlan = if net.vlan_id.trim().is_empty() {
        "Native / Untagged"
    } else {
        net.vlan_id.as_str()
    };
    let _ = writeln!(out, "VLAN ID:         {}", vlan);

    section(&mut out, "Node Inventory");
    if net.nodes.is_empty() {
        let _ = writeln!(out, "No nodes configured in Network Plan.");
    } else {
        let _ = writeln!(
            out,
            "{:<20} {:<16} {:<8} {}",
            "Hostname", "IP Address", "Role", "Resources"
        );
        for node in &net.nodes {
            let ip = if node.ip.trim().is_empty() {
                "DHCP"
            } else {
                node.ip.as_str()
            };
            let _ = writeln!(
                out,
                "{:<20} {:<16} {:<8} {} vCPU / {} GB RAM",
                not_specified(&node.name),
                ip,
                node.role.to_string(),
                count(hw.cpu_cores, "0"),
                count(hw.ram_gb, "0")
            );
        }
    }

    section(&mut out, "OS & Cloud-Init Configuration");
    let _ = writeln!(out, "Default User:    {}", value(&ci.user, "opensuse"));
    let _ = writeln!(out, "Timezone:        {}", value(&ci.timezone, "UTC"));
    let keys = if ci.ssh_keys.is_empty() {
        "No keys added".to_string()
    } else {
        format!("{} key(s) configured", ci.ssh_keys.len())
    };
    let _ = writeln!(out, "SSH Keys:        {}", keys);
    let packages = if ci.packages.is_empty() {
        "None".to_string()
    } else {
        ci.packages.join(", ")
    };
    let _ = writeln!(out, "Packages:        {}", packages);

    section(&mut out, "Topology Diagram");
    for line in render_topology(&project.project_name, hw, net) {
        let _ = writeln!(out, "{}", line.trim_end());
    }

    section(&mut out, "POC Success Criteria");
    if project.goals.is_empty() {
        let _ = writeln!(out, "  - No specific goals defined for this project.");
    } else {
        for goal in project.goals.iter() {
            let _ = writeln!(out, "  - {}", goal);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectPatch;
    use crate::wizard::Wizard;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn empty_plan_uses_placeholders() {
        let state = WizardState::initial(date());
        let text = render_summary(&state, date());
        assert!(text.contains("(Untitled Project)"));
        assert!(text.contains(REPORT_SUBTITLE));
        assert!(text.contains("Lead Engineer:   (Not Specified)"));
        assert!(text.contains("VLAN ID:         Native / Untagged"));
        assert!(text.contains("No keys added"));
        assert!(text.contains("curl, wget, vim"));
        assert!(text.contains("No specific goals defined for this project."));
        assert!(text.contains("16 vCPU / 64 GB RAM"));
    }

    #[test]
    fn zero_nodes_reports_empty_inventory() {
        let mut state = WizardState::initial(date());
        state.hardware.node_count = 0;
        state.network.nodes.clear();
        let text = render_summary(&state, date());
        assert!(text.contains("No nodes configured in Network Plan."));
        assert!(text.contains("Total Nodes:     (Not Specified) Physical Servers"));
    }

    #[test]
    fn rendering_is_idempotent_and_non_mutating() {
        let mut wizard = Wizard::new(date());
        wizard.update_project(ProjectPatch {
            project_name: Some("Edge Migration POC!".into()),
            ..Default::default()
        });
        wizard.toggle_goal("Create a VM");
        let before = wizard.state().clone();
        let first = render_summary(wizard.state(), date());
        let second = render_summary(wizard.state(), date());
        assert_eq!(first, second);
        assert_eq!(*wizard.state(), before);
        assert!(first.contains("  - Create a VM"));
        assert!(first.contains("2026-10-19"));
    }
}
