//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{ApiAccess, Device, Network, Organization};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Organization Fixtures
    // =========================================================================

    /// Create an organization with API access enabled.
    pub fn organization(id: &str, name: &str) -> Organization {
        Organization {
            id: id.to_string(),
            name: name.to_string(),
            url: Some(format!(
                "https://n1.meraki.com/o/{id}/manage/organization/overview"
            )),
            api: Some(ApiAccess { enabled: true }),
        }
    }

    // =========================================================================
    // Network Fixtures
    // =========================================================================

    /// Create an appliance network in an organization.
    pub fn network(id: &str, org_id: &str, name: &str) -> Network {
        Network {
            id: id.to_string(),
            organization_id: Some(org_id.to_string()),
            name: name.to_string(),
            product_types: vec!["appliance".to_string()],
            time_zone: Some("Europe/Stockholm".to_string()),
            tags: vec![],
            enrollment_string: None,
            url: None,
            notes: None,
            is_bound_to_config_template: false,
        }
    }

    /// Create a combined appliance/switch/wireless network.
    pub fn combined_network(id: &str, org_id: &str, name: &str) -> Network {
        let mut network = Self::network(id, org_id, name);
        network.product_types = vec![
            "appliance".to_string(),
            "switch".to_string(),
            "wireless".to_string(),
        ];
        network
    }

    // =========================================================================
    // Device Fixtures
    // =========================================================================

    /// Create a device with a model and LAN IP.
    pub fn device(serial: &str, model: &str, lan_ip: &str) -> Device {
        Device {
            serial: serial.to_string(),
            name: Some(format!("{model} {serial}")),
            model: Some(model.to_string()),
            mac: None,
            lan_ip: Some(lan_ip.to_string()),
            network_id: None,
            firmware: None,
            address: None,
            lat: None,
            lng: None,
            notes: None,
            tags: vec![],
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Create a default scenario with interconnected test data.
    ///
    /// Contains:
    /// - 2 organizations ("Test Organization" 1000, "Second Organization" 2000)
    /// - 1 combined network "Main Office" (L_100) in organization 1000
    /// - 2 devices in L_100
    pub fn default_scenario() -> DefaultScenario {
        let mut mx = Self::device("Q2XX-AAAA-0001", "MX67", "192.168.128.1");
        mx.network_id = Some("L_100".to_string());
        let mut ap = Self::device("Q2XX-AAAA-0002", "MR36", "192.168.128.20");
        ap.network_id = Some("L_100".to_string());

        DefaultScenario {
            organizations: vec![
                Self::organization("1000", "Test Organization"),
                Self::organization("2000", "Second Organization"),
            ],
            networks: vec![Self::combined_network("L_100", "1000", "Main Office")],
            devices: vec![("L_100".to_string(), vec![mx, ap])],
        }
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub organizations: Vec<Organization>,
    pub networks: Vec<Network>,
    /// Devices keyed by network ID.
    pub devices: Vec<(String, Vec<Device>)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_fixture() {
        let org = Fixtures::organization("1", "Acme");
        assert_eq!(org.name, "Acme");
        assert!(org.api_enabled());
    }

    #[test]
    fn test_default_scenario() {
        let scenario = Fixtures::default_scenario();
        assert_eq!(scenario.organizations.len(), 2);
        assert_eq!(scenario.networks[0].organization_id.as_deref(), Some("1000"));
        assert!(scenario.networks[0].has_product("wireless"));
        assert_eq!(scenario.devices[0].1.len(), 2);
    }
}
