//! Plain-text topology of the planned cluster.

use crate::model::{HardwareSpec, NetworkSpec};
use crate::validation::REQUIREMENTS;

const UNSET: &str = "(not set)";

fn or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        UNSET
    } else {
        value
    }
}

/// Diagram lines for the network plan. Pure; no trailing newline per line.
pub fn render_topology(project_name: &str, hardware: &HardwareSpec, network: &NetworkSpec) -> Vec<String> {
    let mut lines = Vec::new();
    let title = if project_name.trim().is_empty() {
        "SUSE Virtualization Cluster"
    } else {
        project_name
    };
    lines.push(title.to_string());

    let vlan = if network.vlan_id.trim().is_empty() {
        "untagged".to_string()
    } else {
        format!("VLAN {}", network.vlan_id.trim())
    };
    lines.push(format!("  Uplink gateway  {}", or_unset(&network.gateway_ip)));
    lines.push("        |".to_string());
    lines.push(format!(
        "  Management net  {}  ({})",
        or_unset(&network.management_cidr),
        vlan
    ));
    lines.push(format!("  Cluster VIP     {}", or_unset(&network.cluster_vip)));
    lines.push("        |".to_string());

    if network.nodes.is_empty() {
        lines.push("        `-- (no nodes)".to_string());
    }
    let last = network.nodes.len().saturating_sub(1);
    for (idx, node) in network.nodes.iter().enumerate() {
        let branch = if idx == last { "`--" } else { "|--" };
        let ip = if node.ip.trim().is_empty() {
            "DHCP"
        } else {
            node.ip.trim()
        };
        lines.push(format!(
            "        {} {:<14} [{}]  {:<15}  {} vCPU / {} GB RAM / {} GB {}",
            branch,
            or_unset(&node.name),
            node.role,
            ip,
            hardware.cpu_cores,
            hardware.ram_gb,
            hardware.disk_gb,
            hardware.disk_type
        ));
    }

    lines.push(String::new());
    let ha = hardware.node_count >= REQUIREMENTS.ha_nodes;
    lines.push(format!(
        "  Control plane: {} ({} node{})",
        if ha { "highly available" } else { "single point of failure" },
        hardware.node_count,
        if hardware.node_count == 1 { "" } else { "s" }
    ));
    lines
}
