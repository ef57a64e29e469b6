//! Static content tables: POC goals, dashboard modules, checklists.

use crate::wizard::{Completion, Step};

/// POC success criteria offered on the details step.
pub const GOALS: &[&str] = &[
    "Provision hosts through the ISO installer",
    "Optional. Provision hosts through PXE boot",
    "Register an image to use for VMs",
    "Create a Storage Class and Volume",
    "Create a VLAN network in SUSE Virtualization",
    "Create a VM",
    "Configure a backup target",
    "Configure a user-data cloud-config script",
    "Create a backup of a VM",
    "Restore a VM from a backup",
    "Perform a live migration of a VM (requires multi-host)",
    "Use the serial/VNC console of a VM",
    "Import the SSH key and access a VM using the key (Linux only)",
    "Multi-cluster management, multi-tenancy for VM management, multi-disk support",
    "Integration with Rancher. Provision a RKE2 Kubernetes cluster on top of a SUSE Virtualization cluster",
];

/// Which completion flag lights a dashboard module's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Details,
    Hardware,
    Network,
    Install,
    Config,
    Always,
}

impl Indicator {
    pub fn is_set(&self, completion: &Completion) -> bool {
        match self {
            Indicator::Details => completion.details,
            Indicator::Hardware => completion.hardware,
            Indicator::Network => completion.network,
            Indicator::Install => completion.install,
            Indicator::Config => completion.config,
            Indicator::Always => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardModule {
    pub step: Step,
    pub title: &'static str,
    pub description: &'static str,
    pub indicator: Indicator,
}

pub const DASHBOARD: &[DashboardModule] = &[
    DashboardModule {
        step: Step::PocDetails,
        title: "Client Information",
        description: "Define project scope, engineer details, and goals.",
        indicator: Indicator::Details,
    },
    DashboardModule {
        step: Step::HardwareValidation,
        title: "Hardware Validation",
        description: "Check node specs against SUSE requirements.",
        indicator: Indicator::Hardware,
    },
    DashboardModule {
        step: Step::NetworkConfig,
        title: "Network & Validation",
        description: "Configure IPs, VLANs, and validate topology.",
        indicator: Indicator::Network,
    },
    DashboardModule {
        step: Step::InstallGuide,
        title: "Full Installation Guide",
        description: "Comprehensive documentation and step-by-step installation manual.",
        indicator: Indicator::Always,
    },
    DashboardModule {
        step: Step::ArchitecturePreview,
        title: "Architecture Plan",
        description: "View the generated infrastructure topology map.",
        indicator: Indicator::Always,
    },
    DashboardModule {
        step: Step::CloudInit,
        title: "Cloud-Init Generator",
        description: "Create YAML for VM/Node configuration.",
        indicator: Indicator::Always,
    },
    DashboardModule {
        step: Step::InstallationProcess,
        title: "Installation Checklist",
        description: "Interactive checklist for tracking deployment progress.",
        indicator: Indicator::Install,
    },
    DashboardModule {
        step: Step::InitialConfig,
        title: "POC Goals & Validation",
        description: "Step-by-step guides for specific POC success criteria.",
        indicator: Indicator::Config,
    },
    DashboardModule {
        step: Step::Completed,
        title: "Generate Report",
        description: "View summary and export the final report.",
        indicator: Indicator::Always,
    },
];

/// Deployment tasks tracked on the installation step.
pub const INSTALL_CHECKLIST: &[&str] = &[
    "Download the installer ISO and verify its checksum",
    "Write the ISO to USB media or mount it through the BMC",
    "Enable VT-x/AMD-V and disable secure boot quirks in firmware",
    "Install the first node and choose \"Create a new cluster\"",
    "Set the cluster VIP and cluster token on the first node",
    "Join the remaining nodes with \"Join an existing cluster\"",
    "Wait for every node to report Ready in the dashboard",
    "Log in to the UI and set the admin password",
];

/// Long-form documentation shown on the guide step.
pub const INSTALL_GUIDE: &[(&str, &[&str])] = &[
    (
        "1. Prerequisites",
        &[
            "x86_64 servers meeting the hardware minimums (see Hardware Specs).",
            "A management network with a free static address for the cluster VIP.",
            "DNS and NTP reachable from every node.",
        ],
    ),
    (
        "2. Prepare installation media",
        &[
            "Download the ISO and its checksum from the release page.",
            "Boot each node from USB, virtual media or PXE.",
        ],
    ),
    (
        "3. Create the cluster",
        &[
            "On the first node select \"Create a new cluster\".",
            "Configure the management NIC, hostname and static IP from the Network Plan.",
            "Enter the cluster VIP and a cluster token; keep the token for the next nodes.",
        ],
    ),
    (
        "4. Join additional nodes",
        &[
            "Select \"Join an existing cluster\" and point at the cluster VIP.",
            "Use the same cluster token.",
            "Three nodes are needed before the control plane becomes highly available.",
        ],
    ),
    (
        "5. Post-install",
        &[
            "Open https://<cluster VIP> and set the admin password.",
            "Upload a VM image and create a VLAN network.",
            "Attach the cloud-init documents from the generator to new VMs.",
        ],
    ),
];
