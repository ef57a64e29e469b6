use super::{StatusBuilder, ValidationStatus};
use crate::model::NetworkSpec;
use ipnet::IpNet;
use std::collections::HashMap;
use std::net::IpAddr;

const VLAN_MIN: u16 = 1;
const VLAN_MAX: u16 = 4094;

pub fn validate_network(spec: &NetworkSpec) -> ValidationStatus {
    let mut status = StatusBuilder::default();

    let cidr = spec.management_cidr.trim();
    let network = if cidr.is_empty() {
        status.error("Error: Management CIDR is required.");
        None
    } else {
        match cidr.parse::<IpNet>() {
            Ok(net) => Some(net),
            Err(_) => {
                status.error(format!(
                    "Error: Management CIDR '{}' is not valid CIDR notation (e.g. 192.168.10.0/24).",
                    cidr
                ));
                None
            }
        }
    };

    let gateway = required_ip(&mut status, "Gateway IP", &spec.gateway_ip);
    if let (Some(net), Some(ip)) = (network, gateway) {
        warn_outside(&mut status, "Gateway IP", ip, net);
    }

    let vip = required_ip(&mut status, "Cluster VIP", &spec.cluster_vip);
    if let Some(ip) = vip {
        if gateway == Some(ip) {
            status.error("Error: Cluster VIP must differ from the gateway IP.");
        }
        if let Some(net) = network {
            warn_outside(&mut status, "Cluster VIP", ip, net);
        }
    }

    for entry in spec.dns_entries() {
        if entry.parse::<IpAddr>().is_err() {
            status.error(format!(
                "Error: DNS server '{}' is not a valid IP address.",
                entry
            ));
        }
    }

    let vlan = spec.vlan_id.trim();
    if !vlan.is_empty() {
        let in_range = vlan
            .parse::<u16>()
            .map(|id| (VLAN_MIN..=VLAN_MAX).contains(&id))
            .unwrap_or(false);
        if !in_range {
            status.error(format!(
                "Error: VLAN ID must be a number between {} and {}.",
                VLAN_MIN, VLAN_MAX
            ));
        }
    }

    let mut assigned: HashMap<IpAddr, String> = HashMap::new();
    for (idx, node) in spec.nodes.iter().enumerate() {
        let label = if node.name.trim().is_empty() {
            status.warn(format!("Warning: Node {} has no name.", idx + 1));
            format!("Node {}", idx + 1)
        } else {
            node.name.trim().to_string()
        };

        let raw = node.ip.trim();
        if raw.is_empty() {
            status.warn(format!(
                "Warning: {} has no IP address; it will fall back to DHCP.",
                label
            ));
            continue;
        }
        let Ok(ip) = raw.parse::<IpAddr>() else {
            status.error(format!(
                "Error: {} IP '{}' is not a valid IP address.",
                label, raw
            ));
            continue;
        };

        if vip == Some(ip) {
            status.error(format!(
                "Error: {} IP {} collides with the cluster VIP.",
                label, ip
            ));
        }
        if let Some(owner) = assigned.get(&ip) {
            status.error(format!(
                "Error: {} reuses IP {} already assigned to {}.",
                label, ip, owner
            ));
        } else {
            assigned.insert(ip, label.clone());
        }
        if let Some(net) = network {
            warn_outside(&mut status, &label, ip, net);
        }
    }

    status.finish()
}

fn required_ip(status: &mut StatusBuilder, field: &str, raw: &str) -> Option<IpAddr> {
    let raw = raw.trim();
    if raw.is_empty() {
        status.error(format!("Error: {} is required.", field));
        return None;
    }
    match raw.parse::<IpAddr>() {
        Ok(ip) => Some(ip),
        Err(_) => {
            status.error(format!(
                "Error: {} '{}' is not a valid IP address.",
                field, raw
            ));
            None
        }
    }
}

fn warn_outside(status: &mut StatusBuilder, what: &str, ip: IpAddr, net: IpNet) {
    if !net.contains(&ip) {
        status.warn(format!(
            "Warning: {} {} is outside the management network {}.",
            what,
            ip,
            net.trunc()
        ));
    }
}
