//! Optional TOML settings for the assistant.
//!
//! ```toml
//! output_dir = "plans"
//! log_file = "poc-assistant.log"
//! log_level = "debug"
//!
//! [cloud_init]
//! user = "sles"
//! timezone = "Europe/Berlin"
//! hostname_pattern = "hv-{dsp}"
//! ```

use crate::errors::{PocError, Result};
use crate::model::CloudInitPatch;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "poc-assistant.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub output_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub cloud_init: CloudInitDefaults,
}

/// Site defaults applied over the built-in cloud-init profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CloudInitDefaults {
    pub user: Option<String>,
    pub timezone: Option<String>,
    pub locale: Option<String>,
    pub hostname_pattern: Option<String>,
    pub packages: Option<Vec<String>>,
}

impl CloudInitDefaults {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_patch(&self) -> CloudInitPatch {
        CloudInitPatch {
            user: self.user.clone(),
            timezone: self.timezone.clone(),
            locale: self.locale.clone(),
            hostname_pattern: self.hostname_pattern.clone(),
            packages: self.packages.clone(),
            ..Default::default()
        }
    }
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| PocError::InvalidConfig(err.to_string()).into())
    }

    /// Load an explicitly named file; it must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in config file {}", path.display()))
    }

    /// Load `explicit` if given, else the default file when present.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// CLI flags win over file values.
    pub fn with_overrides(mut self, output_dir: Option<PathBuf>, log_file: Option<PathBuf>) -> Self {
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
