//! Wizard controller: sole owner of the planning state.
//!
//! Views read slices through the accessors and request changes through the
//! `update_*` methods. Derived state (node list, validity flags) is recomputed
//! before every update returns, so a read never observes a stale flag.

use crate::errors::Result;
use crate::model::{
    CloudInitConfig, CloudInitPatch, HardwarePatch, HardwareSpec, NetworkPatch, NetworkSpec,
    ProjectInfo, ProjectPatch,
};
use crate::sync::sync_nodes;
use crate::validation::{
    validate_details, validate_hardware, validate_network, ValidationStatus, MAX_NODES,
};
use chrono::NaiveDate;

pub const RESET_PROMPT: &str = "Are you sure you want to start a new POC? Current data will be lost.";

/// Screens of the wizard. Navigation between them is never gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Dashboard,
    PocDetails,
    HardwareValidation,
    NetworkConfig,
    ArchitecturePreview,
    InstallationProcess,
    InstallGuide,
    InitialConfig,
    CloudInit,
    Completed,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[
            Step::Dashboard,
            Step::PocDetails,
            Step::HardwareValidation,
            Step::NetworkConfig,
            Step::ArchitecturePreview,
            Step::InstallationProcess,
            Step::InstallGuide,
            Step::InitialConfig,
            Step::CloudInit,
            Step::Completed,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Dashboard => "Dashboard",
            Step::PocDetails => "Client Information",
            Step::HardwareValidation => "Hardware Specs",
            Step::NetworkConfig => "Network Plan",
            Step::ArchitecturePreview => "Topology Preview",
            Step::InstallationProcess => "Installation",
            Step::InstallGuide => "Documentation & Guide",
            Step::InitialConfig => "POC Goals Validation",
            Step::CloudInit => "Cloud-Init Generator",
            Step::Completed => "POC Report",
        }
    }
}

/// Records whose validity is derived and published to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Details,
    Hardware,
    Network,
}

/// Dashboard status indicators. Advisory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completion {
    pub details: bool,
    pub hardware: bool,
    pub network: bool,
    pub install: bool,
    pub config: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub project: ProjectInfo,
    pub hardware: HardwareSpec,
    pub network: NetworkSpec,
    pub cloud_init: CloudInitConfig,
    pub current_step: Step,
    pub completion: Completion,
}

impl WizardState {
    /// Session defaults, with derived state already applied.
    pub fn initial(session_date: NaiveDate) -> Self {
        let hardware = HardwareSpec::default();
        let mut network = NetworkSpec::default();
        sync_nodes(&mut network.nodes, hardware.node_count);
        let project = ProjectInfo::new(session_date);
        let completion = Completion {
            details: validate_details(&project).is_valid,
            hardware: validate_hardware(&hardware).is_valid,
            network: validate_network(&network).is_valid,
            install: false,
            config: false,
        };
        Self {
            project,
            hardware,
            network,
            cloud_init: CloudInitConfig::default(),
            current_step: Step::Dashboard,
            completion,
        }
    }
}

type Observer = Box<dyn FnMut(Section, &ValidationStatus)>;

pub struct Wizard {
    state: WizardState,
    session_date: NaiveDate,
    details_status: ValidationStatus,
    hardware_status: ValidationStatus,
    network_status: ValidationStatus,
    observers: Vec<Observer>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

impl Wizard {
    pub fn new(session_date: NaiveDate) -> Self {
        let state = WizardState::initial(session_date);
        Self {
            details_status: validate_details(&state.project),
            hardware_status: validate_hardware(&state.hardware),
            network_status: validate_network(&state.network),
            state,
            session_date,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn project(&self) -> &ProjectInfo {
        &self.state.project
    }

    pub fn hardware(&self) -> &HardwareSpec {
        &self.state.hardware
    }

    pub fn network(&self) -> &NetworkSpec {
        &self.state.network
    }

    pub fn cloud_init(&self) -> &CloudInitConfig {
        &self.state.cloud_init
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    /// Dashboard status of all five completion flags.
    pub fn status(&self) -> Completion {
        self.state.completion
    }

    pub fn session_date(&self) -> NaiveDate {
        self.session_date
    }

    pub fn details_valid(&self) -> bool {
        self.state.completion.details
    }

    pub fn validation(&self, section: Section) -> &ValidationStatus {
        match section {
            Section::Details => &self.details_status,
            Section::Hardware => &self.hardware_status,
            Section::Network => &self.network_status,
        }
    }

    /// Register a validation observer. It is called right away with the
    /// current status of every section, then after each recomputation.
    pub fn subscribe<F>(&mut self, mut observer: F)
    where
        F: FnMut(Section, &ValidationStatus) + 'static,
    {
        observer(Section::Details, &self.details_status);
        observer(Section::Hardware, &self.hardware_status);
        observer(Section::Network, &self.network_status);
        self.observers.push(Box::new(observer));
    }

    pub fn update_project(&mut self, patch: ProjectPatch) {
        log::debug!("update_project: {:?}", patch);
        self.state.project.apply(patch);
        self.refresh(Section::Details);
    }

    pub fn toggle_goal(&mut self, goal: &str) -> bool {
        let mut goals = self.state.project.goals.clone();
        let selected = goals.toggle(goal);
        self.update_project(ProjectPatch {
            goals: Some(goals),
            ..Default::default()
        });
        selected
    }

    /// A `node_count` above [`MAX_NODES`] is dropped from the patch.
    pub fn update_hardware(&mut self, mut patch: HardwarePatch) {
        log::debug!("update_hardware: {:?}", patch);
        if let Some(count) = patch.node_count.filter(|count| *count > MAX_NODES) {
            log::warn!("ignoring node count {} above the limit of {}", count, MAX_NODES);
            patch.node_count = None;
        }
        let previous_count = self.state.hardware.node_count;
        self.state.hardware.apply(patch);
        self.refresh(Section::Hardware);

        let node_count = self.state.hardware.node_count;
        if node_count != previous_count && sync_nodes(&mut self.state.network.nodes, node_count) {
            self.refresh(Section::Network);
        }
    }

    pub fn update_network(&mut self, patch: NetworkPatch) {
        log::debug!("update_network: {:?}", patch);
        self.state.network.apply(patch);
        let node_count = self.state.hardware.node_count;
        if sync_nodes(&mut self.state.network.nodes, node_count) {
            log::warn!(
                "node list replaced with a different length; resynchronized to {} nodes",
                node_count
            );
        }
        self.refresh(Section::Network);
    }

    /// Accepts a partial patch or a whole [`CloudInitConfig`].
    pub fn update_cloud_init(&mut self, patch: impl Into<CloudInitPatch>) {
        let patch = patch.into();
        log::debug!("update_cloud_init: {:?}", patch);
        self.state.cloud_init.apply(patch);
    }

    pub fn set_install_complete(&mut self, complete: bool) {
        self.state.completion.install = complete;
    }

    pub fn set_config_complete(&mut self, complete: bool) {
        self.state.completion.config = complete;
    }

    /// Always permitted; completion flags are indicators, not gates.
    pub fn go_to(&mut self, step: Step) {
        if self.state.current_step != step {
            log::debug!("go_to: {:?} -> {:?}", self.state.current_step, step);
        }
        self.state.current_step = step;
    }

    /// Restore every record to its defaults once `confirm` agrees.
    ///
    /// Declining leaves the state untouched and returns `Ok(false)`. A prompt
    /// error is propagated without mutating anything.
    pub fn reset_with<C>(&mut self, confirm: C) -> Result<bool>
    where
        C: FnOnce(&str) -> Result<bool>,
    {
        if !confirm(RESET_PROMPT)? {
            log::info!("reset declined; keeping current plan");
            return Ok(false);
        }
        self.state = WizardState::initial(self.session_date);
        self.refresh(Section::Details);
        self.refresh(Section::Hardware);
        self.refresh(Section::Network);
        log::info!("plan reset to defaults");
        Ok(true)
    }

    fn refresh(&mut self, section: Section) {
        let status = match section {
            Section::Details => validate_details(&self.state.project),
            Section::Hardware => validate_hardware(&self.state.hardware),
            Section::Network => validate_network(&self.state.network),
        };
        match section {
            Section::Details => self.state.completion.details = status.is_valid,
            Section::Hardware => self.state.completion.hardware = status.is_valid,
            Section::Network => self.state.completion.network = status.is_valid,
        }
        for observer in self.observers.iter_mut() {
            observer(section, &status);
        }
        match section {
            Section::Details => self.details_status = status,
            Section::Hardware => self.hardware_status = status,
            Section::Network => self.network_status = status,
        }
    }
}
