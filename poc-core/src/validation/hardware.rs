use super::{StatusBuilder, ValidationStatus};
use crate::model::{DiskType, HardwareSpec};

/// Minimum hardware for a functional test cluster (installation guide, page 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareRequirements {
    pub cpu_cores: u32,
    pub ram_gb: u32,
    pub disk_gb: u32,
    pub network_gb: u32,
    pub min_nodes: u32,
    pub ha_nodes: u32,
}

pub const REQUIREMENTS: HardwareRequirements = HardwareRequirements {
    cpu_cores: 8,
    ram_gb: 32,
    disk_gb: 250,
    // Documented minimum only; validate_hardware does not enforce it.
    network_gb: 1,
    min_nodes: 1,
    ha_nodes: 3,
};

/// Largest node count the planner accepts; node lists are materialized.
pub const MAX_NODES: u32 = 64;

pub fn validate_hardware(spec: &HardwareSpec) -> ValidationStatus {
    let req = REQUIREMENTS;
    let mut status = StatusBuilder::default();

    if spec.node_count < req.min_nodes {
        status.error("At least 1 node is required.");
    } else if spec.node_count > MAX_NODES {
        status.error(format!("Error: At most {} nodes are supported.", MAX_NODES));
    } else if spec.node_count < req.ha_nodes {
        status.warn("Warning: 3 nodes are required for High Availability features (Page 8).");
    }

    if spec.cpu_cores < req.cpu_cores {
        status.error(format!(
            "Error: Minimum {} CPU cores required for testing (Page 8).",
            req.cpu_cores
        ));
    }

    if spec.ram_gb < req.ram_gb {
        status.error(format!(
            "Error: Minimum {} GB RAM required for testing (Page 8).",
            req.ram_gb
        ));
    }

    if spec.disk_gb < req.disk_gb {
        status.error(format!(
            "Error: Minimum {} GB Disk required (Page 8).",
            req.disk_gb
        ));
    }

    if spec.disk_type == DiskType::Hdd {
        status.warn("Warning: SSD/NVMe (5000+ IOPS) is strongly recommended for etcd performance.");
    }

    status.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(cpu: u32, ram: u32, disk: u32, nodes: u32, disk_type: DiskType) -> HardwareSpec {
        HardwareSpec {
            cpu_cores: cpu,
            ram_gb: ram,
            disk_gb: disk,
            disk_type,
            network_speed_gb: 1,
            node_count: nodes,
        }
    }

    #[test]
    fn minimum_spec_is_clean() {
        let status = validate_hardware(&spec(8, 32, 250, 3, DiskType::Ssd));
        assert_eq!(status, ValidationStatus::valid());
    }

    #[test]
    fn undersized_single_hdd_node_reports_in_order() {
        let status = validate_hardware(&spec(4, 16, 100, 1, DiskType::Hdd));
        assert!(!status.is_valid);
        assert_eq!(
            status.messages,
            vec![
                "Warning: 3 nodes are required for High Availability features (Page 8).",
                "Error: Minimum 8 CPU cores required for testing (Page 8).",
                "Error: Minimum 32 GB RAM required for testing (Page 8).",
                "Error: Minimum 250 GB Disk required (Page 8).",
                "Warning: SSD/NVMe (5000+ IOPS) is strongly recommended for etcd performance.",
            ]
        );
    }

    #[test]
    fn zero_nodes_is_a_hard_error() {
        let status = validate_hardware(&spec(16, 64, 500, 0, DiskType::Nvme));
        assert!(!status.is_valid);
        assert_eq!(status.messages, vec!["At least 1 node is required."]);
    }

    #[test]
    fn two_nodes_only_warns() {
        let status = validate_hardware(&spec(16, 64, 500, 2, DiskType::Ssd));
        assert!(status.is_valid);
        assert_eq!(status.messages.len(), 1);
    }

    #[test]
    fn hdd_alone_keeps_spec_valid() {
        let status = validate_hardware(&spec(16, 64, 500, 3, DiskType::Hdd));
        assert!(status.is_valid);
        assert_eq!(status.warnings().count(), 1);
    }

    #[test]
    fn node_count_above_limit_is_an_error() {
        let status = validate_hardware(&spec(16, 64, 500, MAX_NODES + 1, DiskType::Ssd));
        assert!(!status.is_valid);
        assert_eq!(status.messages, vec!["Error: At most 64 nodes are supported."]);
        assert!(validate_hardware(&spec(16, 64, 500, MAX_NODES, DiskType::Ssd)).is_clean());
    }

    #[test]
    fn network_speed_is_not_enforced() {
        let mut s = spec(8, 32, 250, 3, DiskType::Ssd);
        s.network_speed_gb = 0;
        assert!(validate_hardware(&s).is_clean());
    }
}
