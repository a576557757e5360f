//! The parameter bag substituted into phase command templates.
//!
//! `ExtraVars` is a flat record of every value the formatter can splice
//! into a playbook invocation. The caller owns a single bag, mutates it
//! freely between phase runs, and passes it by reference into each call.
//! Fields are never validated at format time: an empty string substitutes
//! verbatim, mirroring the behavior of the playbooks being driven.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Substitutable values for one orchestration run.
///
/// Field names follow the `--extra-vars` keys the playbooks expect
/// (`host`, `my_ip`, `swift_storage_storage_ip`, ...). All fields default
/// to empty, which the formatter passes through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraVars {
    /// Ansible playbook name (*.yml).
    pub playbook: String,
    /// Vars: node_name.
    pub node_name: String,
    /// Vars: host (IP form).
    pub host_ip: String,
    /// Vars: storage_ip.
    pub storage_ip: String,
    /// Vars: storage_mask.
    pub storage_mask: String,
    /// Vars: storage_network.
    pub storage_network: String,
    /// Vars: storage_broadcast.
    pub storage_broadcast: String,
    /// Vars: host (name form).
    pub host_name: String,
    /// Vars: router_id.
    pub router_id: String,
    /// Vars: state (keepalived MASTER/SLAVE).
    pub state: String,
    /// Vars: priority (keepalived VRRP priority).
    pub priority: String,
    /// Auxiliary Python script name (*.py).
    pub python_script: String,
    /// Vars: my_ip.
    pub my_ip: String,
    /// Vars: my_storage_ip.
    pub my_storage_ip: String,
    /// Vars: swift_storage_storage_ip, one entry per storage node.
    pub swift_storage_storage_ip: Vec<String>,
    /// Vars: device_name.
    pub device_name: String,
    /// Vars: device_weight.
    pub device_weight: i64,
    /// Vars: hosts.
    pub hosts: String,
    /// Vars: client.
    pub client_name: String,
    /// Vars: disk.
    pub disk: String,
    /// Vars: partition.
    pub partition: String,
    /// playback-nic command-line arguments.
    pub nic: NicConfig,
}

/// One network-interface configuration action for `playback-nic`.
///
/// `purge`/`public`/`private` select which invocation paths fire; the
/// remaining fields are the flag values. The flags are deliberately not
/// cross-validated: `purge` without `public` fires nothing, and setting
/// both `public` and `private` fires both paths in one call. See
/// `formatter::invocations_for` for the exact emission rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NicConfig {
    /// Args: --purge.
    pub purge: bool,
    /// Args: --public.
    pub public: bool,
    /// Args: --private.
    pub private: bool,
    /// Args: --host.
    pub host: String,
    /// Args: --user.
    pub user: String,
    /// Args: --address.
    pub address: String,
    /// Args: --nic.
    pub nic: String,
    /// Args: --netmask.
    pub netmask: String,
    /// Args: --gateway.
    pub gateway: String,
    /// Args: --dns-nameservers (space-separated list, passed as one value).
    pub dns: String,
}

impl ExtraVars {
    /// Create an empty bag. Equivalent to `Default::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the bag to a JSON vars file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize vars to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write vars to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a bag from a JSON vars file.
    ///
    /// Missing fields take their defaults; there is no semantic validation
    /// beyond JSON well-formedness, by contract.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read vars from {:?}", path.as_ref()))?;

        let vars: Self = serde_json::from_str(&content).context("Failed to parse vars JSON")?;

        Ok(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_empty() {
        let vars = ExtraVars::new();
        assert!(vars.host_name.is_empty());
        assert!(vars.swift_storage_storage_ip.is_empty());
        assert_eq!(vars.device_weight, 0);
        assert!(!vars.nic.purge);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let vars: ExtraVars =
            serde_json::from_str(r#"{"host_name":"controller01"}"#).unwrap();
        assert_eq!(vars.host_name, "controller01");
        assert!(vars.my_ip.is_empty());
        assert!(!vars.nic.private);
    }

    #[test]
    fn test_nested_nic_config() {
        let vars: ExtraVars = serde_json::from_str(
            r#"{"nic":{"purge":true,"public":true,"host":"192.169.150.19","user":"ubuntu"}}"#,
        )
        .unwrap();
        assert!(vars.nic.purge);
        assert!(vars.nic.public);
        assert!(!vars.nic.private);
        assert_eq!(vars.nic.user, "ubuntu");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vars.json");

        let mut vars = ExtraVars::new();
        vars.host_name = "compute05".to_string();
        vars.my_storage_ip = "192.168.1.16".to_string();
        vars.swift_storage_storage_ip =
            vec!["192.168.1.16".to_string(), "192.168.1.15".to_string()];

        vars.save_to_file(&path).unwrap();
        let loaded = ExtraVars::load_from_file(&path).unwrap();
        assert_eq!(vars, loaded);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = ExtraVars::load_from_file("/nonexistent/vars.json");
        assert!(result.is_err());
    }
}
