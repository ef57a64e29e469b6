use chrono::NaiveDate;
use poc_core::model::{HardwarePatch, NetworkPatch, ProjectPatch};
use poc_core::wizard::{Section, Step, Wizard, WizardState};
use poc_core::{DiskType, NodeRole};
use std::cell::RefCell;
use std::rc::Rc;

fn session() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

#[test]
fn node_list_follows_count_through_a_session() {
    let mut wizard = Wizard::new(session());
    for count in [5u32, 2, 0, 8, 8, 3] {
        wizard.update_hardware(HardwarePatch {
            node_count: Some(count),
            ..Default::default()
        });
        assert_eq!(wizard.network().nodes.len(), count as usize);
    }
}

#[test]
fn shrinking_and_regrowing_keeps_edited_prefix() {
    let mut wizard = Wizard::new(session());
    wizard.update_hardware(HardwarePatch {
        node_count: Some(5),
        ..Default::default()
    });

    let mut nodes = wizard.network().nodes.clone();
    nodes[0].ip = "192.168.10.11".into();
    nodes[0].role = NodeRole::Master;
    nodes[1].name = "storage-a".into();
    wizard.update_network(NetworkPatch {
        nodes: Some(nodes.clone()),
        ..Default::default()
    });

    wizard.update_hardware(HardwarePatch {
        node_count: Some(2),
        ..Default::default()
    });
    wizard.update_hardware(HardwarePatch {
        node_count: Some(5),
        ..Default::default()
    });

    let after = &wizard.network().nodes;
    assert_eq!(after[..2], nodes[..2]);
    assert_eq!(after[2].name, "node-3");
    assert_eq!(after[4].name, "node-5");
    assert!(after[2..].iter().all(|n| n.ip.is_empty() && n.role == NodeRole::Hybrid));
}

#[test]
fn non_count_hardware_edits_leave_nodes_alone() {
    let mut wizard = Wizard::new(session());
    let mut nodes = wizard.network().nodes.clone();
    nodes[2].ip = "10.1.1.3".into();
    wizard.update_network(NetworkPatch {
        nodes: Some(nodes),
        ..Default::default()
    });

    let network_events = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&network_events);
    wizard.subscribe(move |section, _| {
        if section == Section::Network {
            *counter.borrow_mut() += 1;
        }
    });
    *network_events.borrow_mut() = 0;

    let before = wizard.network().clone();
    wizard.update_hardware(HardwarePatch {
        cpu_cores: Some(32),
        disk_type: Some(DiskType::Nvme),
        ..Default::default()
    });
    assert_eq!(*wizard.network(), before);
    assert_eq!(*network_events.borrow(), 0);
}

#[test]
fn hardware_validity_is_fresh_after_each_update() {
    let mut wizard = Wizard::new(session());
    assert!(wizard.status().hardware);

    wizard.update_hardware(HardwarePatch {
        disk_gb: Some(100),
        ..Default::default()
    });
    assert!(!wizard.status().hardware);
    assert_eq!(
        wizard.validation(Section::Hardware).messages,
        vec!["Error: Minimum 250 GB Disk required (Page 8)."]
    );

    wizard.update_hardware(HardwarePatch {
        disk_gb: Some(250),
        ..Default::default()
    });
    assert!(wizard.status().hardware);
}

#[test]
fn network_flag_turns_valid_with_core_addresses() {
    let mut wizard = Wizard::new(session());
    assert!(!wizard.status().network);
    wizard.update_network(NetworkPatch {
        management_cidr: Some("192.168.10.0/24".into()),
        gateway_ip: Some("192.168.10.1".into()),
        cluster_vip: Some("192.168.10.100".into()),
        ..Default::default()
    });
    assert!(wizard.status().network);
    // Placeholder nodes have no IP yet: DHCP warnings only.
    assert_eq!(wizard.validation(Section::Network).warnings().count(), 3);
}

#[test]
fn full_reset_round_trip() {
    let mut wizard = Wizard::new(session());
    wizard.update_project(ProjectPatch {
        project_name: Some("Edge Migration POC!".into()),
        lead_engineer: Some("Sam".into()),
        client_organization: Some("ACME".into()),
        ..Default::default()
    });
    wizard.toggle_goal("Create a VM");
    wizard.update_hardware(HardwarePatch {
        node_count: Some(1),
        ..Default::default()
    });
    wizard.set_install_complete(true);
    wizard.set_config_complete(true);
    wizard.go_to(Step::Completed);
    assert!(wizard.details_valid());

    let snapshot = wizard.state().clone();
    assert!(!wizard.reset_with(|_| Ok(false)).expect("declined reset"));
    assert_eq!(*wizard.state(), snapshot);

    assert!(wizard.reset_with(|_| Ok(true)).expect("confirmed reset"));
    assert_eq!(*wizard.state(), WizardState::initial(session()));
    assert_eq!(wizard.current_step(), Step::Dashboard);
    let status = wizard.status();
    assert!(!status.install && !status.config && !status.details);
    assert_eq!(wizard.network().nodes.len(), 3);
}

#[test]
fn every_step_has_a_title() {
    let titles: Vec<_> = Step::all().iter().map(|s| s.title()).collect();
    assert_eq!(titles.len(), 10);
    assert_eq!(titles[0], "Dashboard");
    assert_eq!(titles[9], "POC Report");
}
