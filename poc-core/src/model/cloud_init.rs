use super::project::merge;
use serde::{Deserialize, Serialize};

/// Token in [`CloudInitConfig::hostname_pattern`] replaced by the node's 1-based position.
pub const POSITION_TOKEN: &str = "{dsp}";
/// Token replaced by the slug of the node name.
pub const NAME_TOKEN: &str = "{name}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudInitConfig {
    pub user: String,
    pub password: String,
    #[serde(default)]
    pub ssh_keys: Vec<String>,
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub run_cmds: Vec<String>,
    #[serde(default)]
    pub write_files: Vec<WriteFile>,
    pub timezone: String,
    pub hostname_pattern: String,
    pub locale: String,
    #[serde(default)]
    pub mounts: Vec<MountEntry>,
    #[serde(default)]
    pub network_interfaces: Vec<InterfaceOverride>,
}

impl Default for CloudInitConfig {
    fn default() -> Self {
        Self {
            user: "opensuse".to_string(),
            password: String::new(),
            ssh_keys: Vec::new(),
            packages: vec!["curl".to_string(), "wget".to_string(), "vim".to_string()],
            run_cmds: Vec::new(),
            write_files: Vec::new(),
            timezone: "UTC".to_string(),
            hostname_pattern: format!("node-{}", POSITION_TOKEN),
            locale: "en_US.UTF-8".to_string(),
            mounts: Vec::new(),
            network_interfaces: Vec::new(),
        }
    }
}

impl CloudInitConfig {
    pub fn apply(&mut self, patch: CloudInitPatch) {
        merge(&mut self.user, patch.user);
        merge(&mut self.password, patch.password);
        merge(&mut self.ssh_keys, patch.ssh_keys);
        merge(&mut self.packages, patch.packages);
        merge(&mut self.run_cmds, patch.run_cmds);
        merge(&mut self.write_files, patch.write_files);
        merge(&mut self.timezone, patch.timezone);
        merge(&mut self.hostname_pattern, patch.hostname_pattern);
        merge(&mut self.locale, patch.locale);
        merge(&mut self.mounts, patch.mounts);
        merge(&mut self.network_interfaces, patch.network_interfaces);
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

/// A `write_files` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteFile {
    pub path: String,
    pub content: String,
    #[serde(default = "default_permissions")]
    pub permissions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

fn default_permissions() -> String {
    "0644".to_string()
}

impl WriteFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            permissions: default_permissions(),
            owner: None,
        }
    }
}

/// One fstab-style mount; rendered as a cloud-init `mounts` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountEntry {
    pub device: String,
    pub mount_point: String,
    #[serde(default = "default_fs_type")]
    pub fs_type: String,
    #[serde(default = "default_mount_options")]
    pub options: String,
}

fn default_fs_type() -> String {
    "auto".to_string()
}

fn default_mount_options() -> String {
    "defaults,nofail".to_string()
}

impl MountEntry {
    pub fn new(device: impl Into<String>, mount_point: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            mount_point: mount_point.into(),
            fs_type: default_fs_type(),
            options: default_mount_options(),
        }
    }

    pub fn as_row(&self) -> Vec<String> {
        vec![
            self.device.clone(),
            self.mount_point.clone(),
            self.fs_type.clone(),
            self.options.clone(),
        ]
    }
}

/// Per-interface override rendered into a network-config v2 `ethernets` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceOverride {
    pub name: String,
    #[serde(default)]
    pub dhcp4: bool,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway4: Option<String>,
    #[serde(default)]
    pub nameservers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
}

impl InterfaceOverride {
    pub fn dhcp(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dhcp4: true,
            addresses: Vec::new(),
            gateway4: None,
            nameservers: Vec::new(),
            mtu: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudInitPatch {
    pub user: Option<String>,
    pub password: Option<String>,
    pub ssh_keys: Option<Vec<String>>,
    pub packages: Option<Vec<String>>,
    pub run_cmds: Option<Vec<String>>,
    pub write_files: Option<Vec<WriteFile>>,
    pub timezone: Option<String>,
    pub hostname_pattern: Option<String>,
    pub locale: Option<String>,
    pub mounts: Option<Vec<MountEntry>>,
    pub network_interfaces: Option<Vec<InterfaceOverride>>,
}

impl From<CloudInitConfig> for CloudInitPatch {
    /// A full record is a patch that replaces every field.
    fn from(config: CloudInitConfig) -> Self {
        Self {
            user: Some(config.user),
            password: Some(config.password),
            ssh_keys: Some(config.ssh_keys),
            packages: Some(config.packages),
            run_cmds: Some(config.run_cmds),
            write_files: Some(config.write_files),
            timezone: Some(config.timezone),
            hostname_pattern: Some(config.hostname_pattern),
            locale: Some(config.locale),
            mounts: Some(config.mounts),
            network_interfaces: Some(config.network_interfaces),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_opensuse_profile() {
        let cfg = CloudInitConfig::default();
        assert_eq!(cfg.user, "opensuse");
        assert_eq!(cfg.packages, vec!["curl", "wget", "vim"]);
        assert_eq!(cfg.hostname_pattern, "node-{dsp}");
        assert!(!cfg.has_password());
    }

    #[test]
    fn full_record_patch_replaces_everything() {
        let mut cfg = CloudInitConfig::default();
        let replacement = CloudInitConfig {
            user: "admin".to_string(),
            packages: Vec::new(),
            ..CloudInitConfig::default()
        };
        cfg.apply(replacement.clone().into());
        assert_eq!(cfg, replacement);
    }

    #[test]
    fn write_file_defaults_permissions_on_deserialize() {
        let wf: WriteFile = serde_json::from_str(r#"{"path":"/etc/motd","content":"hi"}"#).unwrap();
        assert_eq!(wf.permissions, "0644");
        assert!(wf.owner.is_none());
    }
}
