//! Phase command formatting.
//!
//! `invocations_for` is the single dispatch point mapping a `(Phase,
//! ExtraVars)` pair to the external commands for that phase. It is a pure
//! function: deterministic, no side effects, no I/O. Field values are
//! substituted without validation; empty strings pass through verbatim.
//!
//! Three phases deviate from the one-line-template rule and are special
//! cased below:
//! - `ConfigureStorageNetwork`: the purge+public and private paths fire
//!   independently and may both fire in one call.
//! - `MariadbCluster`: the keepalived failover script is appended only when
//!   the host name equals the designated second controller.
//! - `InitSwiftRings`: fans out one add-device invocation per
//!   (storage IP x device) pair between the create and rebalance steps.
//!
//! Placeholder phases return an empty list.

use crate::extra_vars::ExtraVars;
use crate::invocation::CommandInvocation;
use crate::phase::Phase;

/// Node whose MariaDB deployment triggers the keepalived failover script.
/// A hard-coded special case of the deployment procedure, not a general rule.
const MARIADB_FAILOVER_NODE: &str = "controller02";

/// Devices added to the ring for every storage node. Only sdb1 and sdc1
/// are supported by the storage playbooks.
const RING_DEVICES: [&str; 2] = ["sdb1", "sdc1"];

/// Fixed device weight used by the add-node-to-the-ring playbook.
const RING_DEVICE_WEIGHT: &str = "100";

/// Format the external command invocations for one phase.
///
/// Returns the invocations in execution order. Placeholder phases yield an
/// empty vector, which the executor treats as trivial success.
pub fn invocations_for(phase: Phase, vars: &ExtraVars) -> Vec<CommandInvocation> {
    match phase {
        Phase::PrepareBasicEnvironment => {
            vec![CommandInvocation::playback(
                "openstack_basic_environment.yml",
                &[],
            )]
        }
        Phase::ConfigureStorageNetwork => configure_storage_network(vars),
        Phase::LoadBalancer => {
            vec![CommandInvocation::playback(
                "openstack_haproxy.yml",
                &[
                    format!("host={}", vars.host_name),
                    format!("router_id={}", vars.router_id),
                    format!("state={}", vars.state),
                    format!("priority={}", vars.priority),
                ],
            )]
        }
        Phase::LbOptimize => vec![CommandInvocation::python("patch-limits.py")],
        Phase::MariadbCluster => mariadb_cluster(vars),
        Phase::RabbitmqCluster => {
            vec![host_only_playbook("openstack_rabbitmq.yml", vars)]
        }
        Phase::Keystone => vec![host_only_playbook("openstack_keystone.yml", vars)],
        Phase::FormatDiskForSwift => {
            vec![host_only_playbook("openstack_storage_partitions.yml", vars)]
        }
        Phase::SwiftStorage => {
            vec![CommandInvocation::playback(
                "openstack_swift_storage.yml",
                &[
                    format!("host={}", vars.host_name),
                    format!("my_storage_ip={}", vars.my_storage_ip),
                ],
            )]
        }
        Phase::SwiftProxy => vec![host_only_playbook("openstack_swift_proxy.yml", vars)],
        Phase::InitSwiftRings => init_swift_rings(vars),

        // Not yet implemented: no invocations, trivially succeeds.
        Phase::DistSwiftRingConf
        | Phase::FinalizeSwift
        | Phase::Glance
        | Phase::CephAdmin
        | Phase::CephInitMon
        | Phase::CephClient
        | Phase::GetCephKey
        | Phase::AddOsd
        | Phase::AddCephMon
        | Phase::SyncCephKey
        | Phase::CephUserPool
        | Phase::CinderApi
        | Phase::CinderVolume
        | Phase::RestartCephDeps
        | Phase::NovaController
        | Phase::Dashboard
        | Phase::NovaComputes
        | Phase::NovaNetwork
        | Phase::Heat
        | Phase::AutoStart
        | Phase::Designate
        | Phase::KvmToDocker => Vec::new(),
    }
}

/// Single-invocation playbook substituting only the host name.
fn host_only_playbook(playbook: &str, vars: &ExtraVars) -> CommandInvocation {
    CommandInvocation::playback(playbook, &[format!("host={}", vars.host_name)])
}

/// The playback-nic storage-network setup.
///
/// Purge-and-reconfigure of the public interface fires only when both
/// `purge` and `public` are set; the private path fires whenever `private`
/// is set. The paths are not mutually exclusive: setting all three flags
/// emits two invocations. `purge` with no role selected emits nothing.
fn configure_storage_network(vars: &ExtraVars) -> Vec<CommandInvocation> {
    let nic = &vars.nic;
    let mut invocations = Vec::new();

    if nic.purge && nic.public {
        invocations.push(CommandInvocation::new(
            "playback-nic",
            vec![
                "--purge".to_string(),
                "--public".to_string(),
                "--host".to_string(),
                nic.host.clone(),
                "--user".to_string(),
                nic.user.clone(),
                "--address".to_string(),
                nic.address.clone(),
                "--nic".to_string(),
                nic.nic.clone(),
                "--netmask".to_string(),
                nic.netmask.clone(),
                "--gateway".to_string(),
                nic.gateway.clone(),
                "--dns-nameservers".to_string(),
                nic.dns.clone(),
            ],
        ));
    }

    if nic.private {
        invocations.push(CommandInvocation::new(
            "playback-nic",
            vec![
                "--private".to_string(),
                "--host".to_string(),
                nic.host.clone(),
                "--user".to_string(),
                nic.user.clone(),
                "--address".to_string(),
                nic.address.clone(),
                "--nic".to_string(),
                nic.nic.clone(),
                "--netmask".to_string(),
                nic.netmask.clone(),
            ],
        ));
    }

    invocations
}

/// MariaDB cluster deployment, plus the keepalived failover script on the
/// designated second controller only (string equality against one literal).
fn mariadb_cluster(vars: &ExtraVars) -> Vec<CommandInvocation> {
    let mut invocations = vec![CommandInvocation::playback(
        "openstack_mariadb.yml",
        &[
            format!("host={}", vars.host_name),
            format!("my_ip={}", vars.my_ip),
        ],
    )];

    if vars.host_name == MARIADB_FAILOVER_NODE {
        invocations.push(CommandInvocation::python("keepalived.py"));
    }

    invocations
}

/// Swift ring initialization: create the builder files, add every
/// (storage IP x device) pair, then rebalance. For N storage IPs this is
/// 2N + 2 invocations.
fn init_swift_rings(vars: &ExtraVars) -> Vec<CommandInvocation> {
    let mut invocations = vec![CommandInvocation::playback(
        "openstack_swift_builder_file.yml",
        &[],
    )];

    for ip in &vars.swift_storage_storage_ip {
        for device in RING_DEVICES {
            invocations.push(CommandInvocation::playback(
                "openstack_swift_add_node_to_the_ring.yml",
                &[
                    format!("swift_storage_storage_ip={}", ip),
                    format!("device_name={}", device),
                    format!("device_weight={}", RING_DEVICE_WEIGHT),
                ],
            ));
        }
    }

    invocations.push(CommandInvocation::playback(
        "openstack_swift_rebalance_ring.yml",
        &[],
    ));

    invocations
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn lb_vars() -> ExtraVars {
        let mut vars = ExtraVars::new();
        vars.host_name = "lb01".to_string();
        vars.router_id = "lb01".to_string();
        vars.state = "MASTER".to_string();
        vars.priority = "150".to_string();
        vars
    }

    #[test]
    fn test_prepare_basic_environment() {
        let invs = invocations_for(Phase::PrepareBasicEnvironment, &ExtraVars::new());
        assert_eq!(invs.len(), 1);
        assert_eq!(
            invs[0].to_string(),
            "playback --ansible openstack_basic_environment.yml -vvvv"
        );
    }

    #[test]
    fn test_load_balancer_substitutes_four_vars() {
        let invs = invocations_for(Phase::LoadBalancer, &lb_vars());
        assert_eq!(invs.len(), 1);
        assert_eq!(
            invs[0].args,
            vec![
                "--ansible",
                "openstack_haproxy.yml",
                "--extra-vars",
                "host=lb01",
                "router_id=lb01",
                "state=MASTER",
                "priority=150",
                "-vvvv",
            ]
        );
    }

    #[test]
    fn test_lb_optimize_runs_patch_limits() {
        let invs = invocations_for(Phase::LbOptimize, &ExtraVars::new());
        assert_eq!(invs.len(), 1);
        assert_eq!(invs[0].program, "python");
        assert_eq!(invs[0].args, vec!["patch-limits.py"]);
    }

    #[test]
    fn test_host_only_phases() {
        let mut vars = ExtraVars::new();
        vars.host_name = "controller01".to_string();

        for (phase, playbook) in [
            (Phase::RabbitmqCluster, "openstack_rabbitmq.yml"),
            (Phase::Keystone, "openstack_keystone.yml"),
            (Phase::FormatDiskForSwift, "openstack_storage_partitions.yml"),
            (Phase::SwiftProxy, "openstack_swift_proxy.yml"),
        ] {
            let invs = invocations_for(phase, &vars);
            assert_eq!(invs.len(), 1, "{phase} should emit one invocation");
            assert_eq!(
                invs[0].args,
                vec![
                    "--ansible".to_string(),
                    playbook.to_string(),
                    "--extra-vars".to_string(),
                    "host=controller01".to_string(),
                    "-vvvv".to_string(),
                ]
            );
        }
    }

    #[test]
    fn test_empty_fields_substitute_verbatim() {
        let invs = invocations_for(Phase::Keystone, &ExtraVars::new());
        assert_eq!(invs.len(), 1);
        assert!(invs[0].args.contains(&"host=".to_string()));
    }

    #[test]
    fn test_mariadb_single_invocation_on_first_controller() {
        let mut vars = ExtraVars::new();
        vars.host_name = "controller01".to_string();
        vars.my_ip = "192.169.151.19".to_string();

        let invs = invocations_for(Phase::MariadbCluster, &vars);
        assert_eq!(invs.len(), 1);
        assert!(invs[0].args.contains(&"my_ip=192.169.151.19".to_string()));
    }

    #[test]
    fn test_mariadb_failover_script_on_second_controller() {
        let mut vars = ExtraVars::new();
        vars.host_name = "controller02".to_string();
        vars.my_ip = "192.169.151.17".to_string();

        let invs = invocations_for(Phase::MariadbCluster, &vars);
        assert_eq!(invs.len(), 2);
        assert_eq!(invs[0].program, "playback");
        assert_eq!(invs[1].program, "python");
        assert_eq!(invs[1].args, vec!["keepalived.py"]);
    }

    #[test]
    fn test_mariadb_literal_match_only() {
        // Near-misses do not trigger the failover script.
        for name in ["controller02 ", "Controller02", "controller2", "controller020"] {
            let mut vars = ExtraVars::new();
            vars.host_name = name.to_string();
            assert_eq!(invocations_for(Phase::MariadbCluster, &vars).len(), 1);
        }
    }

    #[test]
    fn test_nic_purge_public() {
        let mut vars = ExtraVars::new();
        vars.nic.purge = true;
        vars.nic.public = true;
        vars.nic.host = "192.169.150.19".to_string();
        vars.nic.user = "ubuntu".to_string();
        vars.nic.address = "192.169.151.19".to_string();
        vars.nic.nic = "eth1".to_string();
        vars.nic.netmask = "255.255.255.0".to_string();
        vars.nic.gateway = "192.169.151.1".to_string();
        vars.nic.dns = "192.169.11.11 192.169.11.12".to_string();

        let invs = invocations_for(Phase::ConfigureStorageNetwork, &vars);
        assert_eq!(invs.len(), 1);
        assert_eq!(invs[0].program, "playback-nic");
        assert_eq!(
            invs[0].args,
            vec![
                "--purge",
                "--public",
                "--host",
                "192.169.150.19",
                "--user",
                "ubuntu",
                "--address",
                "192.169.151.19",
                "--nic",
                "eth1",
                "--netmask",
                "255.255.255.0",
                "--gateway",
                "192.169.151.1",
                "--dns-nameservers",
                "192.169.11.11 192.169.11.12",
            ]
        );
    }

    #[test]
    fn test_nic_private() {
        let mut vars = ExtraVars::new();
        vars.nic.private = true;
        vars.nic.host = "192.169.150.19".to_string();
        vars.nic.user = "ubuntu".to_string();
        vars.nic.address = "192.168.1.12".to_string();
        vars.nic.nic = "eth2".to_string();
        vars.nic.netmask = "255.255.255.0".to_string();

        let invs = invocations_for(Phase::ConfigureStorageNetwork, &vars);
        assert_eq!(invs.len(), 1);
        assert_eq!(
            invs[0].args,
            vec![
                "--private",
                "--host",
                "192.169.150.19",
                "--user",
                "ubuntu",
                "--address",
                "192.168.1.12",
                "--nic",
                "eth2",
                "--netmask",
                "255.255.255.0",
            ]
        );
    }

    #[test]
    fn test_nic_purge_without_public_is_noop() {
        let mut vars = ExtraVars::new();
        vars.nic.purge = true;
        assert!(invocations_for(Phase::ConfigureStorageNetwork, &vars).is_empty());
    }

    #[test]
    fn test_nic_public_without_purge_is_noop() {
        let mut vars = ExtraVars::new();
        vars.nic.public = true;
        assert!(invocations_for(Phase::ConfigureStorageNetwork, &vars).is_empty());
    }

    #[test]
    fn test_nic_all_flags_fire_both_paths() {
        // Documented quirk: public and private are not mutually exclusive.
        let mut vars = ExtraVars::new();
        vars.nic.purge = true;
        vars.nic.public = true;
        vars.nic.private = true;

        let invs = invocations_for(Phase::ConfigureStorageNetwork, &vars);
        assert_eq!(invs.len(), 2);
        assert_eq!(invs[0].args[0], "--purge");
        assert_eq!(invs[1].args[0], "--private");
    }

    #[test]
    fn test_init_swift_rings_fan_out() {
        let mut vars = ExtraVars::new();
        vars.swift_storage_storage_ip =
            vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()];

        let invs = invocations_for(Phase::InitSwiftRings, &vars);
        assert_eq!(invs.len(), 6);

        assert!(invs[0].args.contains(&"openstack_swift_builder_file.yml".to_string()));
        assert!(invs[5].args.contains(&"openstack_swift_rebalance_ring.yml".to_string()));

        let expected = [
            ("10.0.0.1", "sdb1"),
            ("10.0.0.1", "sdc1"),
            ("10.0.0.2", "sdb1"),
            ("10.0.0.2", "sdc1"),
        ];
        for (inv, (ip, device)) in invs[1..5].iter().zip(expected) {
            assert!(inv
                .args
                .contains(&"openstack_swift_add_node_to_the_ring.yml".to_string()));
            assert!(inv.args.contains(&format!("swift_storage_storage_ip={ip}")));
            assert!(inv.args.contains(&format!("device_name={device}")));
            assert!(inv.args.contains(&"device_weight=100".to_string()));
        }
    }

    #[test]
    fn test_init_swift_rings_no_storage_nodes() {
        // Create and rebalance still run with an empty storage list.
        let invs = invocations_for(Phase::InitSwiftRings, &ExtraVars::new());
        assert_eq!(invs.len(), 2);
    }

    #[test]
    fn test_placeholder_phases_emit_nothing() {
        let mut vars = ExtraVars::new();
        vars.host_name = "controller01".to_string();
        vars.disk = "/dev/sdb".to_string();

        for phase in Phase::iter().filter(|p| !p.is_implemented()) {
            assert!(
                invocations_for(phase, &vars).is_empty(),
                "{phase} should be a placeholder"
            );
            assert!(invocations_for(phase, &ExtraVars::new()).is_empty());
        }
    }

    #[test]
    fn test_formatter_is_deterministic() {
        let mut vars = lb_vars();
        vars.swift_storage_storage_ip = vec!["192.168.1.16".to_string()];

        for phase in Phase::iter() {
            let first = invocations_for(phase, &vars);
            let second = invocations_for(phase, &vars);
            assert_eq!(first, second, "{phase} must format deterministically");
        }
    }
}
