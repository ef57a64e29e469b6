//! Editable form fields and how they map onto controller patches.

use crate::input::InputKind;
use poc_core::model::{
    CloudInitPatch, HardwarePatch, InterfaceOverride, MountEntry, NetworkPatch, ProjectPatch,
    WriteFile,
};
use poc_core::validation::MAX_NODES;
use poc_core::Wizard;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    // Client information
    ProjectName,
    LeadEngineer,
    LeadEmail,
    Organization,
    ClientOrganization,
    ClientContactName,
    ClientContactRole,
    ClientContactEmail,
    ClientContactPhone,
    StartDate,
    TargetDate,
    // Hardware
    CpuCores,
    RamGb,
    DiskGb,
    DiskType,
    NetworkSpeed,
    NodeCount,
    // Network
    ManagementCidr,
    GatewayIp,
    ClusterVip,
    DnsServers,
    VlanId,
    NodeName(usize),
    NodeIp(usize),
    NodeRole(usize),
    // Cloud-init
    User,
    Password,
    SshKeys,
    Packages,
    RunCmds,
    Timezone,
    Locale,
    HostnamePattern,
    WriteFiles,
    Mounts,
    Interfaces,
}

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input(InputKind),
    /// Enter/Space cycles through a fixed set of values.
    Choice,
}

pub const DETAIL_FIELDS: &[Field] = &[
    Field::ProjectName,
    Field::LeadEngineer,
    Field::LeadEmail,
    Field::Organization,
    Field::ClientOrganization,
    Field::ClientContactName,
    Field::ClientContactRole,
    Field::ClientContactEmail,
    Field::ClientContactPhone,
    Field::StartDate,
    Field::TargetDate,
];

pub const HARDWARE_FIELDS: &[Field] = &[
    Field::CpuCores,
    Field::RamGb,
    Field::DiskGb,
    Field::DiskType,
    Field::NetworkSpeed,
    Field::NodeCount,
];

pub const NETWORK_FIELDS: &[Field] = &[
    Field::ManagementCidr,
    Field::GatewayIp,
    Field::ClusterVip,
    Field::DnsServers,
    Field::VlanId,
];

pub const CLOUD_INIT_FIELDS: &[Field] = &[
    Field::User,
    Field::Password,
    Field::SshKeys,
    Field::Packages,
    Field::RunCmds,
    Field::Timezone,
    Field::Locale,
    Field::HostnamePattern,
    Field::WriteFiles,
    Field::Mounts,
    Field::Interfaces,
];

/// Network rows: the fixed fields followed by name/IP/role per node.
pub fn network_fields(node_count: usize) -> Vec<Field> {
    let mut fields = NETWORK_FIELDS.to_vec();
    for i in 0..node_count {
        fields.push(Field::NodeName(i));
        fields.push(Field::NodeIp(i));
        fields.push(Field::NodeRole(i));
    }
    fields
}

/// Separator used for multi-entry fields whose entries may contain spaces.
const ENTRY_SEPARATOR: &str = ";";

impl Field {
    pub fn label(&self) -> String {
        let label = match self {
            Field::ProjectName => "Project Name",
            Field::LeadEngineer => "Lead Engineer",
            Field::LeadEmail => "Lead E-mail",
            Field::Organization => "Partner Organization",
            Field::ClientOrganization => "Client Organization",
            Field::ClientContactName => "Client Contact",
            Field::ClientContactRole => "Contact Role",
            Field::ClientContactEmail => "Contact E-mail",
            Field::ClientContactPhone => "Contact Phone",
            Field::StartDate => "Start Date",
            Field::TargetDate => "Target Date",
            Field::CpuCores => "CPU Cores / Node",
            Field::RamGb => "RAM (GB) / Node",
            Field::DiskGb => "Disk (GB) / Node",
            Field::DiskType => "Disk Type",
            Field::NetworkSpeed => "Network (Gbps)",
            Field::NodeCount => "Node Count",
            Field::ManagementCidr => "Management CIDR",
            Field::GatewayIp => "Gateway IP",
            Field::ClusterVip => "Cluster VIP",
            Field::DnsServers => "DNS Servers",
            Field::VlanId => "VLAN ID",
            Field::NodeName(i) => return format!("Node {} Name", i + 1),
            Field::NodeIp(i) => return format!("Node {} IP", i + 1),
            Field::NodeRole(i) => return format!("Node {} Role", i + 1),
            Field::User => "Default User",
            Field::Password => "Password",
            Field::SshKeys => "SSH Keys (;)",
            Field::Packages => "Packages",
            Field::RunCmds => "Run Commands (;)",
            Field::Timezone => "Timezone",
            Field::Locale => "Locale",
            Field::HostnamePattern => "Hostname Pattern",
            Field::WriteFiles => "Write Files (path=content;)",
            Field::Mounts => "Mounts (dev:path;)",
            Field::Interfaces => "Interfaces (if:dhcp;)",
        };
        label.to_string()
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::DiskType | Field::NodeRole(_) => FieldKind::Choice,
            Field::CpuCores
            | Field::RamGb
            | Field::DiskGb
            | Field::NetworkSpeed
            | Field::NodeCount => FieldKind::Input(InputKind::Number),
            Field::Password => FieldKind::Input(InputKind::Secret),
            _ => FieldKind::Input(InputKind::Text),
        }
    }

    /// Current value as edited text.
    pub fn value(&self, wizard: &Wizard) -> String {
        let p = wizard.project();
        let hw = wizard.hardware();
        let net = wizard.network();
        let ci = wizard.cloud_init();
        match self {
            Field::ProjectName => p.project_name.clone(),
            Field::LeadEngineer => p.lead_engineer.clone(),
            Field::LeadEmail => p.lead_email.clone(),
            Field::Organization => p.organization.clone(),
            Field::ClientOrganization => p.client_organization.clone(),
            Field::ClientContactName => p.client_contact_name.clone(),
            Field::ClientContactRole => p.client_contact_role.clone(),
            Field::ClientContactEmail => p.client_contact_email.clone(),
            Field::ClientContactPhone => p.client_contact_phone.clone(),
            Field::StartDate => p.start_date.clone(),
            Field::TargetDate => p.target_date.clone(),
            Field::CpuCores => hw.cpu_cores.to_string(),
            Field::RamGb => hw.ram_gb.to_string(),
            Field::DiskGb => hw.disk_gb.to_string(),
            Field::DiskType => hw.disk_type.label().to_string(),
            Field::NetworkSpeed => hw.network_speed_gb.to_string(),
            Field::NodeCount => hw.node_count.to_string(),
            Field::ManagementCidr => net.management_cidr.clone(),
            Field::GatewayIp => net.gateway_ip.clone(),
            Field::ClusterVip => net.cluster_vip.clone(),
            Field::DnsServers => net.dns_servers.clone(),
            Field::VlanId => net.vlan_id.clone(),
            Field::NodeName(i) => net.nodes.get(*i).map(|n| n.name.clone()).unwrap_or_default(),
            Field::NodeIp(i) => net.nodes.get(*i).map(|n| n.ip.clone()).unwrap_or_default(),
            Field::NodeRole(i) => net
                .nodes
                .get(*i)
                .map(|n| n.role.to_string())
                .unwrap_or_default(),
            Field::User => ci.user.clone(),
            Field::Password => ci.password.clone(),
            Field::SshKeys => ci.ssh_keys.join(&format!("{} ", ENTRY_SEPARATOR)),
            Field::Packages => ci.packages.join(", "),
            Field::RunCmds => ci.run_cmds.join(&format!("{} ", ENTRY_SEPARATOR)),
            Field::Timezone => ci.timezone.clone(),
            Field::Locale => ci.locale.clone(),
            Field::HostnamePattern => ci.hostname_pattern.clone(),
            Field::WriteFiles => join_entries(
                ci.write_files
                    .iter()
                    .map(|f| format!("{}={}", f.path, f.content.replace('\n', "\\n"))),
            ),
            Field::Mounts => join_entries(
                ci.mounts
                    .iter()
                    .map(|m| format!("{}:{}", m.device, m.mount_point)),
            ),
            Field::Interfaces => join_entries(ci.network_interfaces.iter().map(interface_entry)),
        }
    }

    /// Value as shown in a form row.
    pub fn display(&self, wizard: &Wizard) -> String {
        let value = self.value(wizard);
        match self {
            Field::Password if value.is_empty() => "(none)".to_string(),
            Field::Password => "*".repeat(value.chars().count()),
            Field::NodeIp(_) if value.is_empty() => "(DHCP)".to_string(),
            _ => value,
        }
    }

    /// Advance a choice field to its next value.
    pub fn cycle(&self, wizard: &mut Wizard) {
        match self {
            Field::DiskType => {
                let next = wizard.hardware().disk_type.cycle();
                wizard.update_hardware(HardwarePatch {
                    disk_type: Some(next),
                    ..Default::default()
                });
            }
            Field::NodeRole(i) => {
                let mut nodes = wizard.network().nodes.clone();
                if let Some(node) = nodes.get_mut(*i) {
                    node.role = node.role.cycle();
                    wizard.update_network(NetworkPatch {
                        nodes: Some(nodes),
                        ..Default::default()
                    });
                }
            }
            _ => {}
        }
    }

    /// Send an edited value to the controller.
    pub fn commit(&self, wizard: &mut Wizard, raw: &str) -> Result<(), String> {
        let text = || Some(raw.to_string());
        match self {
            Field::ProjectName => project(wizard, ProjectPatch { project_name: text(), ..Default::default() }),
            Field::LeadEngineer => project(wizard, ProjectPatch { lead_engineer: text(), ..Default::default() }),
            Field::LeadEmail => project(wizard, ProjectPatch { lead_email: text(), ..Default::default() }),
            Field::Organization => project(wizard, ProjectPatch { organization: text(), ..Default::default() }),
            Field::ClientOrganization => project(
                wizard,
                ProjectPatch { client_organization: text(), ..Default::default() },
            ),
            Field::ClientContactName => project(
                wizard,
                ProjectPatch { client_contact_name: text(), ..Default::default() },
            ),
            Field::ClientContactRole => project(
                wizard,
                ProjectPatch { client_contact_role: text(), ..Default::default() },
            ),
            Field::ClientContactEmail => project(
                wizard,
                ProjectPatch { client_contact_email: text(), ..Default::default() },
            ),
            Field::ClientContactPhone => project(
                wizard,
                ProjectPatch { client_contact_phone: text(), ..Default::default() },
            ),
            Field::StartDate => project(wizard, ProjectPatch { start_date: text(), ..Default::default() }),
            Field::TargetDate => project(wizard, ProjectPatch { target_date: text(), ..Default::default() }),
            Field::CpuCores => {
                let value = parse_whole_number(raw, "CPU cores")?;
                hardware(wizard, HardwarePatch { cpu_cores: Some(value), ..Default::default() })
            }
            Field::RamGb => {
                let value = parse_whole_number(raw, "RAM")?;
                hardware(wizard, HardwarePatch { ram_gb: Some(value), ..Default::default() })
            }
            Field::DiskGb => {
                let value = parse_whole_number(raw, "Disk size")?;
                hardware(wizard, HardwarePatch { disk_gb: Some(value), ..Default::default() })
            }
            Field::NetworkSpeed => {
                let value = parse_whole_number(raw, "Network speed")?;
                hardware(
                    wizard,
                    HardwarePatch { network_speed_gb: Some(value), ..Default::default() },
                )
            }
            Field::NodeCount => {
                let value = parse_whole_number(raw, "Node count")?;
                if value > MAX_NODES {
                    return Err(format!("Node count must be at most {}", MAX_NODES));
                }
                hardware(wizard, HardwarePatch { node_count: Some(value), ..Default::default() })
            }
            Field::ManagementCidr => network(
                wizard,
                NetworkPatch { management_cidr: Some(raw.trim().to_string()), ..Default::default() },
            ),
            Field::GatewayIp => network(
                wizard,
                NetworkPatch { gateway_ip: Some(raw.trim().to_string()), ..Default::default() },
            ),
            Field::ClusterVip => network(
                wizard,
                NetworkPatch { cluster_vip: Some(raw.trim().to_string()), ..Default::default() },
            ),
            Field::DnsServers => network(wizard, NetworkPatch { dns_servers: text(), ..Default::default() }),
            Field::VlanId => network(
                wizard,
                NetworkPatch { vlan_id: Some(raw.trim().to_string()), ..Default::default() },
            ),
            Field::NodeName(i) => edit_node(wizard, *i, |node| node.name = raw.to_string()),
            Field::NodeIp(i) => edit_node(wizard, *i, |node| node.ip = raw.trim().to_string()),
            Field::User => {
                validate_required(raw, "Default user")?;
                cloud_init(wizard, CloudInitPatch { user: Some(raw.trim().to_string()), ..Default::default() })
            }
            Field::Password => cloud_init(wizard, CloudInitPatch { password: text(), ..Default::default() }),
            Field::SshKeys => cloud_init(
                wizard,
                CloudInitPatch { ssh_keys: Some(split_entries(raw)), ..Default::default() },
            ),
            Field::Packages => cloud_init(
                wizard,
                CloudInitPatch { packages: Some(split_packages(raw)), ..Default::default() },
            ),
            Field::RunCmds => cloud_init(
                wizard,
                CloudInitPatch { run_cmds: Some(split_entries(raw)), ..Default::default() },
            ),
            Field::Timezone => cloud_init(
                wizard,
                CloudInitPatch { timezone: Some(raw.trim().to_string()), ..Default::default() },
            ),
            Field::Locale => cloud_init(
                wizard,
                CloudInitPatch { locale: Some(raw.trim().to_string()), ..Default::default() },
            ),
            Field::HostnamePattern => {
                validate_required(raw, "Hostname pattern")?;
                cloud_init(
                    wizard,
                    CloudInitPatch { hostname_pattern: Some(raw.trim().to_string()), ..Default::default() },
                )
            }
            Field::WriteFiles => {
                let files = parse_write_files(raw, &wizard.cloud_init().write_files)?;
                cloud_init(wizard, CloudInitPatch { write_files: Some(files), ..Default::default() })
            }
            Field::Mounts => {
                let mounts = parse_mounts(raw, &wizard.cloud_init().mounts)?;
                cloud_init(wizard, CloudInitPatch { mounts: Some(mounts), ..Default::default() })
            }
            Field::Interfaces => {
                let ifaces = parse_interfaces(raw, &wizard.cloud_init().network_interfaces)?;
                cloud_init(
                    wizard,
                    CloudInitPatch { network_interfaces: Some(ifaces), ..Default::default() },
                )
            }
            Field::DiskType | Field::NodeRole(_) => {
                self.cycle(wizard);
                Ok(())
            }
        }
    }
}

fn project(wizard: &mut Wizard, patch: ProjectPatch) -> Result<(), String> {
    wizard.update_project(patch);
    Ok(())
}

fn hardware(wizard: &mut Wizard, patch: HardwarePatch) -> Result<(), String> {
    wizard.update_hardware(patch);
    Ok(())
}

fn network(wizard: &mut Wizard, patch: NetworkPatch) -> Result<(), String> {
    wizard.update_network(patch);
    Ok(())
}

fn cloud_init(wizard: &mut Wizard, patch: CloudInitPatch) -> Result<(), String> {
    wizard.update_cloud_init(patch);
    Ok(())
}

fn edit_node<F>(wizard: &mut Wizard, index: usize, edit: F) -> Result<(), String>
where
    F: FnOnce(&mut poc_core::Node),
{
    let mut nodes = wizard.network().nodes.clone();
    let node = nodes
        .get_mut(index)
        .ok_or_else(|| format!("Node {} no longer exists", index + 1))?;
    edit(node);
    network(wizard, NetworkPatch { nodes: Some(nodes), ..Default::default() })
}

pub fn parse_whole_number(raw: &str, what: &str) -> Result<u32, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", what));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| format!("{} must be a whole number", what))
}

pub fn validate_required(raw: &str, what: &str) -> Result<(), String> {
    if raw.trim().is_empty() {
        Err(format!("{} cannot be empty", what))
    } else {
        Ok(())
    }
}

fn split_entries(raw: &str) -> Vec<String> {
    raw.split(ENTRY_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_entries(entries: impl Iterator<Item = String>) -> String {
    entries.collect::<Vec<_>>().join(&format!("{} ", ENTRY_SEPARATOR))
}

/// `path=content`; `\n` in the content stands for a newline. Permissions and
/// owner of an entry already present for the same path are kept.
fn parse_write_files(raw: &str, current: &[WriteFile]) -> Result<Vec<WriteFile>, String> {
    split_entries(raw)
        .into_iter()
        .map(|entry| {
            let (path, content) = entry
                .split_once('=')
                .ok_or_else(|| format!("'{}' is not path=content", entry))?;
            let path = path.trim();
            if !path.starts_with('/') {
                return Err(format!("File path '{}' must be absolute", path));
            }
            let content = content.trim().replace("\\n", "\n");
            Ok(match current.iter().find(|f| f.path == path) {
                Some(existing) => WriteFile {
                    content,
                    ..existing.clone()
                },
                None => WriteFile::new(path, content),
            })
        })
        .collect()
}

/// `device:mountpoint`; file system type and options of a known device are kept.
fn parse_mounts(raw: &str, current: &[MountEntry]) -> Result<Vec<MountEntry>, String> {
    split_entries(raw)
        .into_iter()
        .map(|entry| {
            let (device, mount_point) = entry
                .split_once(':')
                .map(|(d, m)| (d.trim(), m.trim()))
                .filter(|(d, m)| !d.is_empty() && m.starts_with('/'))
                .ok_or_else(|| format!("'{}' is not device:/mountpoint", entry))?;
            Ok(match current.iter().find(|m| m.device == device) {
                Some(existing) => MountEntry {
                    mount_point: mount_point.to_string(),
                    ..existing.clone()
                },
                None => MountEntry::new(device, mount_point),
            })
        })
        .collect()
}

fn interface_entry(iface: &InterfaceOverride) -> String {
    let mut entry = format!("{}:", iface.name);
    if iface.dhcp4 {
        entry.push_str("dhcp");
    } else {
        entry.push_str(&iface.addresses.join(","));
    }
    if let Some(gateway) = &iface.gateway4 {
        entry.push('@');
        entry.push_str(gateway);
    }
    entry
}

/// `iface:dhcp` or `iface:addr/prefix[,addr/prefix]@gateway` (gateway optional).
/// Nameservers and MTU of a known interface are kept.
fn parse_interfaces(raw: &str, current: &[InterfaceOverride]) -> Result<Vec<InterfaceOverride>, String> {
    split_entries(raw)
        .into_iter()
        .map(|entry| {
            let (name, spec) = entry
                .split_once(':')
                .map(|(n, s)| (n.trim(), s.trim()))
                .filter(|(n, s)| !n.is_empty() && !s.is_empty())
                .ok_or_else(|| format!("'{}' is not iface:dhcp or iface:addr/prefix", entry))?;
            let (addrs, gateway) = match spec.split_once('@') {
                Some((addrs, gw)) => (addrs.trim(), Some(gw.trim())),
                None => (spec, None),
            };
            if let Some(gw) = gateway {
                gw.parse::<IpAddr>()
                    .map_err(|_| format!("Gateway '{}' is not an IP address", gw))?;
            }

            let mut iface = current
                .iter()
                .find(|i| i.name == name)
                .cloned()
                .unwrap_or_else(|| InterfaceOverride::dhcp(name));
            iface.gateway4 = gateway.map(str::to_string);
            if addrs.eq_ignore_ascii_case("dhcp") {
                iface.dhcp4 = true;
                iface.addresses.clear();
            } else {
                iface.dhcp4 = false;
                iface.addresses = addrs
                    .split(',')
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(parse_address)
                    .collect::<Result<_, _>>()?;
            }
            Ok(iface)
        })
        .collect()
}

fn parse_address(addr: &str) -> Result<String, String> {
    let invalid = || format!("'{}' is not addr/prefix", addr);
    let (ip, prefix) = addr.split_once('/').ok_or_else(invalid)?;
    let ip: IpAddr = ip.parse().map_err(|_| invalid())?;
    let max = if ip.is_ipv4() { 32 } else { 128 };
    match prefix.parse::<u8>() {
        Ok(p) if p <= max => Ok(format!("{}/{}", ip, p)),
        _ => Err(invalid()),
    }
}

fn split_packages(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use poc_core::{DiskType, NodeRole};

    fn wizard() -> Wizard {
        Wizard::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn number_fields_parse_or_explain() {
        assert_eq!(parse_whole_number(" 12 ", "RAM"), Ok(12));
        assert_eq!(
            parse_whole_number("", "RAM"),
            Err("RAM cannot be empty".to_string())
        );
        assert!(parse_whole_number("-1", "RAM").is_err());
    }

    #[test]
    fn commit_routes_through_controller() {
        let mut w = wizard();
        Field::NodeCount.commit(&mut w, "5").unwrap();
        assert_eq!(w.network().nodes.len(), 5);

        Field::NodeIp(4).commit(&mut w, " 10.0.0.15 ").unwrap();
        assert_eq!(w.network().nodes[4].ip, "10.0.0.15");

        Field::Packages.commit(&mut w, "curl, jq  open-iscsi").unwrap();
        assert_eq!(w.cloud_init().packages, vec!["curl", "jq", "open-iscsi"]);

        Field::SshKeys.commit(&mut w, "ssh-ed25519 AAA a@b; ssh-rsa BBB c@d").unwrap();
        assert_eq!(w.cloud_init().ssh_keys.len(), 2);
        assert_eq!(Field::SshKeys.value(&w), "ssh-ed25519 AAA a@b; ssh-rsa BBB c@d");
    }

    #[test]
    fn node_count_above_limit_keeps_editor_error() {
        let mut w = wizard();
        let err = Field::NodeCount.commit(&mut w, "4294967295").unwrap_err();
        assert_eq!(err, format!("Node count must be at most {}", MAX_NODES));
        assert_eq!(w.network().nodes.len(), 3);
        Field::NodeCount.commit(&mut w, &MAX_NODES.to_string()).unwrap();
        assert_eq!(w.network().nodes.len(), MAX_NODES as usize);
    }

    #[test]
    fn write_files_round_trip() {
        let mut w = wizard();
        Field::WriteFiles
            .commit(&mut w, "/etc/motd=Welcome\\nto the POC; /etc/sysctl.d/90-poc.conf=vm.swappiness=10")
            .unwrap();
        let files = &w.cloud_init().write_files;
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].content, "Welcome\nto the POC");
        assert_eq!(files[1].content, "vm.swappiness=10");
        assert_eq!(files[1].permissions, "0644");

        let text = Field::WriteFiles.value(&w);
        assert_eq!(
            text,
            "/etc/motd=Welcome\\nto the POC; /etc/sysctl.d/90-poc.conf=vm.swappiness=10"
        );
        let before = w.cloud_init().clone();
        Field::WriteFiles.commit(&mut w, &text).unwrap();
        assert_eq!(*w.cloud_init(), before);
    }

    #[test]
    fn write_files_keep_permissions_of_known_paths() {
        let mut w = wizard();
        let mut script = WriteFile::new("/usr/local/bin/setup", "echo hi");
        script.permissions = "0755".to_string();
        w.update_cloud_init(CloudInitPatch { write_files: Some(vec![script]), ..Default::default() });
        Field::WriteFiles.commit(&mut w, "/usr/local/bin/setup=echo bye").unwrap();
        let file = &w.cloud_init().write_files[0];
        assert_eq!(file.permissions, "0755");
        assert_eq!(file.content, "echo bye");
        assert!(Field::WriteFiles.commit(&mut w, "relative=x").is_err());
        assert!(Field::WriteFiles.commit(&mut w, "/etc/motd").is_err());
    }

    #[test]
    fn mounts_round_trip() {
        let mut w = wizard();
        Field::Mounts.commit(&mut w, "/dev/sdb1:/var/lib/longhorn; /dev/sdc:/data").unwrap();
        let mounts = &w.cloud_init().mounts;
        assert_eq!(mounts.len(), 2);
        assert_eq!(mounts[0].as_row(), vec!["/dev/sdb1", "/var/lib/longhorn", "auto", "defaults,nofail"]);
        assert_eq!(Field::Mounts.value(&w), "/dev/sdb1:/var/lib/longhorn; /dev/sdc:/data");

        assert!(Field::Mounts.commit(&mut w, "/dev/sdd").is_err());
        assert!(Field::Mounts.commit(&mut w, "/dev/sdd:data").is_err());
        Field::Mounts.commit(&mut w, "").unwrap();
        assert!(w.cloud_init().mounts.is_empty());
    }

    #[test]
    fn interfaces_round_trip() {
        let mut w = wizard();
        Field::Interfaces
            .commit(&mut w, "eth0:dhcp; eth1:10.0.0.5/24,10.0.1.5/24@10.0.0.1")
            .unwrap();
        let ifaces = &w.cloud_init().network_interfaces;
        assert_eq!(ifaces.len(), 2);
        assert!(ifaces[0].dhcp4);
        assert!(!ifaces[1].dhcp4);
        assert_eq!(ifaces[1].addresses, vec!["10.0.0.5/24", "10.0.1.5/24"]);
        assert_eq!(ifaces[1].gateway4.as_deref(), Some("10.0.0.1"));

        let text = Field::Interfaces.value(&w);
        assert_eq!(text, "eth0:dhcp; eth1:10.0.0.5/24,10.0.1.5/24@10.0.0.1");
        let before = w.cloud_init().clone();
        Field::Interfaces.commit(&mut w, &text).unwrap();
        assert_eq!(*w.cloud_init(), before);
    }

    #[test]
    fn interfaces_reject_bad_addresses_and_keep_mtu() {
        let mut w = wizard();
        let mut iface = InterfaceOverride::dhcp("eth1");
        iface.mtu = Some(9000);
        w.update_cloud_init(CloudInitPatch {
            network_interfaces: Some(vec![iface]),
            ..Default::default()
        });
        Field::Interfaces.commit(&mut w, "eth1:192.168.1.20/24").unwrap();
        assert_eq!(w.cloud_init().network_interfaces[0].mtu, Some(9000));

        let before = w.cloud_init().clone();
        for bad in ["eth1", "eth1:10.0.0.5", "eth1:10.0.0.5/33", "eth1:dhcp@gateway"] {
            assert!(Field::Interfaces.commit(&mut w, bad).is_err(), "{}", bad);
        }
        assert_eq!(*w.cloud_init(), before);
    }

    #[test]
    fn invalid_number_leaves_state_alone() {
        let mut w = wizard();
        let before = w.state().clone();
        assert!(Field::CpuCores.commit(&mut w, "").is_err());
        assert_eq!(*w.state(), before);
    }

    #[test]
    fn choices_cycle() {
        let mut w = wizard();
        Field::DiskType.cycle(&mut w);
        assert_eq!(w.hardware().disk_type, DiskType::Ssd.cycle());
        Field::NodeRole(0).cycle(&mut w);
        assert_eq!(w.network().nodes[0].role, NodeRole::Hybrid.cycle());
    }

    #[test]
    fn network_rows_cover_every_node() {
        let fields = network_fields(3);
        assert_eq!(fields.len(), NETWORK_FIELDS.len() + 9);
        assert_eq!(fields.last(), Some(&Field::NodeRole(2)));
    }

    #[test]
    fn display_masks_password_and_marks_dhcp() {
        let mut w = wizard();
        assert_eq!(Field::Password.display(&w), "(none)");
        Field::Password.commit(&mut w, "abc").unwrap();
        assert_eq!(Field::Password.display(&w), "***");
        assert_eq!(Field::NodeIp(0).display(&w), "(DHCP)");
    }
}
