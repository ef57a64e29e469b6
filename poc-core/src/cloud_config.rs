//! Per-node cloud-init documents.

use crate::errors::Result;
use crate::export::slug;
use crate::model::{CloudInitConfig, InterfaceOverride, Node, WriteFile, NAME_TOKEN, POSITION_TOKEN};
use anyhow::Context;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

pub const CLOUD_CONFIG_HEADER: &str = "#cloud-config";
const SUDO_RULE: &str = "ALL=(ALL) NOPASSWD:ALL";
const DEFAULT_SHELL: &str = "/bin/bash";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            OutputFormat::Yaml => OutputFormat::Json,
            OutputFormat::Json => OutputFormat::Yaml,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Yaml => "YAML",
            OutputFormat::Json => "JSON",
        })
    }
}

#[derive(Debug, Serialize)]
struct CloudConfigDoc<'a> {
    hostname: String,
    timezone: &'a str,
    locale: &'a str,
    users: Vec<UserEntry<'a>>,
    ssh_pwauth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    chpasswd: Option<Chpasswd<'a>>,
    package_update: bool,
    #[serde(skip_serializing_if = "is_empty_slice")]
    packages: &'a [String],
    #[serde(skip_serializing_if = "is_empty_slice")]
    write_files: &'a [WriteFile],
    #[serde(skip_serializing_if = "is_empty_slice")]
    runcmd: &'a [String],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    mounts: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<NetworkDoc<'a>>,
}

#[derive(Debug, Serialize)]
struct UserEntry<'a> {
    name: &'a str,
    sudo: &'static str,
    shell: &'static str,
    lock_passwd: bool,
    #[serde(skip_serializing_if = "is_empty_slice")]
    ssh_authorized_keys: &'a [String],
}

#[derive(Debug, Serialize)]
struct Chpasswd<'a> {
    expire: bool,
    users: Vec<ChpasswdUser<'a>>,
}

#[derive(Debug, Serialize)]
struct ChpasswdUser<'a> {
    name: &'a str,
    password: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct NetworkDoc<'a> {
    version: u8,
    ethernets: BTreeMap<&'a str, EthernetDoc<'a>>,
}

#[derive(Debug, Serialize)]
struct EthernetDoc<'a> {
    dhcp4: bool,
    #[serde(skip_serializing_if = "is_empty_slice")]
    addresses: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    gateway4: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nameservers: Option<Nameservers<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mtu: Option<u32>,
}

#[derive(Debug, Serialize)]
struct Nameservers<'a> {
    addresses: &'a [String],
}

fn is_empty_slice<T>(items: &&[T]) -> bool {
    items.is_empty()
}

impl<'a> From<&'a InterfaceOverride> for EthernetDoc<'a> {
    fn from(iface: &'a InterfaceOverride) -> Self {
        Self {
            dhcp4: iface.dhcp4,
            addresses: &iface.addresses,
            gateway4: iface.gateway4.as_deref(),
            nameservers: (!iface.nameservers.is_empty()).then_some(Nameservers {
                addresses: &iface.nameservers,
            }),
            mtu: iface.mtu,
        }
    }
}

/// Expand the hostname pattern for the node at 0-based `index`.
///
/// The result only holds `[a-z0-9-]`, so it is also safe as a file stem.
pub fn hostname_for(pattern: &str, node: &Node, index: usize) -> String {
    let position = (index + 1).to_string();
    let hostname = slug(
        &pattern
            .replace(POSITION_TOKEN, &position)
            .replace(NAME_TOKEN, &node.name),
    );
    if hostname.is_empty() {
        format!("node-{}", position)
    } else {
        hostname
    }
}

/// Hostnames for every node, suffixed with the node position where the
/// pattern would repeat one.
pub fn unique_hostnames(pattern: &str, nodes: &[Node]) -> Vec<String> {
    let mut seen = HashSet::new();
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let base = hostname_for(pattern, node, index);
            let mut hostname = base.clone();
            let mut suffix = index + 1;
            while !seen.insert(hostname.clone()) {
                hostname = format!("{}-{}", base, suffix);
                suffix += 1;
            }
            hostname
        })
        .collect()
}

fn build_doc(config: &CloudInitConfig, hostname: String) -> CloudConfigDoc<'_> {
    let has_password = config.has_password();
    CloudConfigDoc {
        hostname,
        timezone: &config.timezone,
        locale: &config.locale,
        users: vec![UserEntry {
            name: &config.user,
            sudo: SUDO_RULE,
            shell: DEFAULT_SHELL,
            lock_passwd: !has_password,
            ssh_authorized_keys: &config.ssh_keys,
        }],
        ssh_pwauth: has_password,
        chpasswd: has_password.then(|| Chpasswd {
            expire: false,
            users: vec![ChpasswdUser {
                name: &config.user,
                password: &config.password,
                kind: "text",
            }],
        }),
        package_update: true,
        packages: &config.packages,
        write_files: &config.write_files,
        runcmd: &config.run_cmds,
        mounts: config.mounts.iter().map(|m| m.as_row()).collect(),
        network: (!config.network_interfaces.is_empty()).then(|| NetworkDoc {
            version: 2,
            ethernets: config
                .network_interfaces
                .iter()
                .map(|iface| (iface.name.as_str(), EthernetDoc::from(iface)))
                .collect(),
        }),
    }
}

/// Render one node's document. Output is deterministic for equal input.
pub fn render_node(
    config: &CloudInitConfig,
    node: &Node,
    index: usize,
    format: OutputFormat,
) -> Result<String> {
    render_doc(config, hostname_for(&config.hostname_pattern, node, index), format)
}

fn render_doc(config: &CloudInitConfig, hostname: String, format: OutputFormat) -> Result<String> {
    let doc = build_doc(config, hostname);
    match format {
        OutputFormat::Yaml => {
            let body = serde_yaml::to_string(&doc).context("failed to render cloud-config YAML")?;
            Ok(format!("{}\n{}", CLOUD_CONFIG_HEADER, body))
        }
        OutputFormat::Json => {
            let body =
                serde_json::to_string_pretty(&doc).context("failed to render cloud-config JSON")?;
            Ok(format!("{}\n", body))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNode {
    pub hostname: String,
    pub body: String,
}

impl RenderedNode {
    pub fn filename(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.hostname, format.extension())
    }
}

/// Render every node. Hostnames, and so file names, are distinct.
pub fn render_all(
    config: &CloudInitConfig,
    nodes: &[Node],
    format: OutputFormat,
) -> Result<Vec<RenderedNode>> {
    unique_hostnames(&config.hostname_pattern, nodes)
        .into_iter()
        .map(|hostname| {
            Ok(RenderedNode {
                body: render_doc(config, hostname.clone(), format)?,
                hostname,
            })
        })
        .collect()
}
