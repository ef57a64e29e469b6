use super::project::merge;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeRole {
    Master,
    Worker,
    Hybrid,
}

impl NodeRole {
    pub fn cycle(self) -> Self {
        match self {
            NodeRole::Master => NodeRole::Worker,
            NodeRole::Worker => NodeRole::Hybrid,
            NodeRole::Hybrid => NodeRole::Master,
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Master => write!(f, "Master"),
            NodeRole::Worker => write!(f, "Worker"),
            NodeRole::Hybrid => write!(f, "Hybrid"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    /// Empty means the node will pick up an address over DHCP.
    pub ip: String,
    pub role: NodeRole,
}

impl Node {
    /// Placeholder for the node at `index` (0-based) of the cluster list.
    pub fn placeholder(index: usize) -> Self {
        Self {
            name: format!("node-{}", index + 1),
            ip: String::new(),
            role: NodeRole::Hybrid,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    pub management_cidr: String,
    pub gateway_ip: String,
    pub cluster_vip: String,
    /// Comma or whitespace separated resolver addresses.
    pub dns_servers: String,
    pub vlan_id: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl NetworkSpec {
    pub fn apply(&mut self, patch: NetworkPatch) {
        merge(&mut self.management_cidr, patch.management_cidr);
        merge(&mut self.gateway_ip, patch.gateway_ip);
        merge(&mut self.cluster_vip, patch.cluster_vip);
        merge(&mut self.dns_servers, patch.dns_servers);
        merge(&mut self.vlan_id, patch.vlan_id);
        merge(&mut self.nodes, patch.nodes);
    }

    pub fn dns_entries(&self) -> impl Iterator<Item = &str> {
        self.dns_servers
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkPatch {
    pub management_cidr: Option<String>,
    pub gateway_ip: Option<String>,
    pub cluster_vip: Option<String>,
    pub dns_servers: Option<String>,
    pub vlan_id: Option<String>,
    pub nodes: Option<Vec<Node>>,
}
