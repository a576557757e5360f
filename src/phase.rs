//! The deployment phase catalogue.
//!
//! Every step of the OpenStack bring-up is named by one `Phase` variant.
//! A phase is purely a key selecting a command template; it carries no
//! state of its own. The declaration order below is the canonical
//! deployment order, and `Phase::iter()` walks it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One named deployment step.
///
/// Phases split into two groups:
/// - implemented phases, which map to one or more external command
///   invocations (see `formatter::invocations_for`), and
/// - placeholders, which are explicit "not yet implemented" no-ops that
///   emit nothing and trivially succeed.
///
/// Sequencing between phases is entirely the caller's responsibility; no
/// phase depends on another's in-process return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Prepare the OpenStack basic environment.
    PrepareBasicEnvironment,
    /// Set up the storage network via playback-nic.
    ConfigureStorageNetwork,
    /// Deploy HAProxy and keepalived.
    LoadBalancer,
    /// Optimize the load balancer.
    LbOptimize,
    /// Deploy the MariaDB cluster.
    MariadbCluster,
    /// Deploy the RabbitMQ cluster.
    RabbitmqCluster,
    /// Deploy Keystone HA.
    Keystone,
    /// Format the disks for Swift storage (sdb1 and sdc1 only).
    FormatDiskForSwift,
    /// Deploy Swift storage.
    SwiftStorage,
    /// Deploy Swift proxy HA.
    SwiftProxy,
    /// Initialize the Swift rings.
    InitSwiftRings,
    /// Distribute the Swift ring configuration files.
    DistSwiftRingConf,
    /// Finalize the Swift installation.
    FinalizeSwift,
    /// Deploy Glance HA.
    Glance,
    /// Deploy the Ceph admin node.
    CephAdmin,
    /// Deploy the Ceph initial monitor.
    CephInitMon,
    /// Deploy the Ceph clients.
    CephClient,
    /// Add Ceph initial monitor(s) and gather the keys.
    GetCephKey,
    /// Add Ceph OSDs.
    AddOsd,
    /// Add Ceph monitors.
    AddCephMon,
    /// Copy the Ceph keys to nodes.
    SyncCephKey,
    /// Create the cinder Ceph user and pool name.
    CephUserPool,
    /// Deploy cinder-api.
    CinderApi,
    /// Deploy cinder-volume on the controller node (Ceph backend).
    CinderVolume,
    /// Restart volume service dependencies for the Ceph backend.
    RestartCephDeps,
    /// Deploy the Nova controller.
    NovaController,
    /// Deploy Horizon.
    Dashboard,
    /// Deploy the Nova computes.
    NovaComputes,
    /// Deploy legacy nova-network (FlatDHCP only).
    NovaNetwork,
    /// Deploy orchestration components (Heat).
    Heat,
    /// Enable service auto start on boot.
    AutoStart,
    /// Deploy DNS as a Service.
    Designate,
    /// Convert KVM to Docker (optional).
    KvmToDocker,
}

impl Phase {
    /// One-line human description, as printed by `playstack list`.
    pub fn description(&self) -> &'static str {
        match self {
            Phase::PrepareBasicEnvironment => "Prepare OpenStack basic environment",
            Phase::ConfigureStorageNetwork => "Set up the storage network via playback-nic",
            Phase::LoadBalancer => "Deploy HAProxy and keepalived",
            Phase::LbOptimize => "Optimize the load balancer",
            Phase::MariadbCluster => "Deploy MariaDB cluster",
            Phase::RabbitmqCluster => "Deploy RabbitMQ cluster",
            Phase::Keystone => "Deploy Keystone HA",
            Phase::FormatDiskForSwift => "Format disks for Swift storage (sdb1/sdc1)",
            Phase::SwiftStorage => "Deploy Swift storage",
            Phase::SwiftProxy => "Deploy Swift proxy HA",
            Phase::InitSwiftRings => "Initialize the Swift rings",
            Phase::DistSwiftRingConf => "Distribute Swift ring configuration files",
            Phase::FinalizeSwift => "Finalize the Swift installation",
            Phase::Glance => "Deploy Glance HA",
            Phase::CephAdmin => "Deploy the Ceph admin node",
            Phase::CephInitMon => "Deploy the Ceph initial monitor",
            Phase::CephClient => "Deploy the Ceph clients",
            Phase::GetCephKey => "Add Ceph initial monitor(s) and gather the keys",
            Phase::AddOsd => "Add Ceph OSDs",
            Phase::AddCephMon => "Add Ceph monitors",
            Phase::SyncCephKey => "Copy the Ceph keys to nodes",
            Phase::CephUserPool => "Create the cinder Ceph user and pool name",
            Phase::CinderApi => "Deploy cinder-api",
            Phase::CinderVolume => "Deploy cinder-volume on the controller node (Ceph backend)",
            Phase::RestartCephDeps => "Restart volume service dependencies for the Ceph backend",
            Phase::NovaController => "Deploy the Nova controller",
            Phase::Dashboard => "Deploy Horizon",
            Phase::NovaComputes => "Deploy the Nova computes",
            Phase::NovaNetwork => "Deploy legacy nova-network (FlatDHCP only)",
            Phase::Heat => "Deploy orchestration components (Heat)",
            Phase::AutoStart => "Enable service auto start on boot",
            Phase::Designate => "Deploy DNS as a Service",
            Phase::KvmToDocker => "Convert KVM to Docker (optional)",
        }
    }

    /// Whether the phase has a command template.
    ///
    /// Placeholder phases are kept distinct from the implemented set so the
    /// CLI can mark them; they emit no invocations and always succeed.
    pub fn is_implemented(&self) -> bool {
        matches!(
            self,
            Phase::PrepareBasicEnvironment
                | Phase::ConfigureStorageNetwork
                | Phase::LoadBalancer
                | Phase::LbOptimize
                | Phase::MariadbCluster
                | Phase::RabbitmqCluster
                | Phase::Keystone
                | Phase::FormatDiskForSwift
                | Phase::SwiftStorage
                | Phase::SwiftProxy
                | Phase::InitSwiftRings
        )
    }
}
