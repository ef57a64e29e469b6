use super::project::merge;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiskType {
    #[serde(rename = "SSD")]
    Ssd,
    #[serde(rename = "NVMe")]
    Nvme,
    /// Rotational disk
    #[serde(rename = "HDD")]
    Hdd,
}

impl DiskType {
    pub fn all() -> &'static [DiskType] {
        &[DiskType::Ssd, DiskType::Nvme, DiskType::Hdd]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiskType::Ssd => "SSD",
            DiskType::Nvme => "NVMe",
            DiskType::Hdd => "HDD (Rotational)",
        }
    }

    /// Next variant, wrapping around; used by selector widgets.
    pub fn cycle(self) -> Self {
        match self {
            DiskType::Ssd => DiskType::Nvme,
            DiskType::Nvme => DiskType::Hdd,
            DiskType::Hdd => DiskType::Ssd,
        }
    }
}

impl fmt::Display for DiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskType::Ssd => write!(f, "SSD"),
            DiskType::Nvme => write!(f, "NVMe"),
            DiskType::Hdd => write!(f, "HDD"),
        }
    }
}

/// Per-node hardware of the POC cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSpec {
    pub cpu_cores: u32,
    pub ram_gb: u32,
    pub disk_gb: u32,
    pub disk_type: DiskType,
    pub network_speed_gb: u32,
    pub node_count: u32,
}

impl Default for HardwareSpec {
    fn default() -> Self {
        Self {
            cpu_cores: 16,
            ram_gb: 64,
            disk_gb: 500,
            disk_type: DiskType::Ssd,
            network_speed_gb: 10,
            node_count: 3,
        }
    }
}

impl HardwareSpec {
    pub fn apply(&mut self, patch: HardwarePatch) {
        merge(&mut self.cpu_cores, patch.cpu_cores);
        merge(&mut self.ram_gb, patch.ram_gb);
        merge(&mut self.disk_gb, patch.disk_gb);
        merge(&mut self.disk_type, patch.disk_type);
        merge(&mut self.network_speed_gb, patch.network_speed_gb);
        merge(&mut self.node_count, patch.node_count);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HardwarePatch {
    pub cpu_cores: Option<u32>,
    pub ram_gb: Option<u32>,
    pub disk_gb: Option<u32>,
    pub disk_type: Option<DiskType>,
    pub network_speed_gb: Option<u32>,
    pub node_count: Option<u32>,
}
