//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Meraki Dashboard API.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::{
    Admin, Device, FirewallRule, FirewallRules, Network, NewAdmin, NewNetwork, NewWebhookServer,
    Organization, Vlan, WebhookServer,
};

/// Why a state operation was rejected; maps onto 404 and 400 responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockError {
    NotFound(String),
    BadRequest(String),
}

pub type MockResult<T> = Result<T, MockError>;

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Organizations in listing order.
    pub organizations: Vec<Organization>,

    /// Networks indexed by network ID.
    pub networks: HashMap<String, Network>,

    /// Devices indexed by network ID.
    pub devices: HashMap<String, Vec<Device>>,

    /// Admins indexed by organization ID.
    pub admins: HashMap<String, Vec<Admin>>,

    /// Webhook servers indexed by network ID.
    pub webhooks: HashMap<String, Vec<WebhookServer>>,

    /// VLANs indexed by network ID.
    pub vlans: HashMap<String, Vec<Vlan>>,

    /// Network IDs with VLANs enabled.
    pub vlans_enabled: HashMap<String, bool>,

    /// Custom L3 firewall rules indexed by network ID.
    pub firewall_rules: HashMap<String, Vec<FirewallRule>>,

    /// Alert settings indexed by network ID.
    pub alerts: HashMap<String, Value>,

    /// Site-to-site VPN settings indexed by network ID.
    pub s2s_vpn: HashMap<String, Value>,

    /// Optional API key. If set, requests must send it in `X-Cisco-Meraki-API-Key`.
    pub required_api_key: Option<String>,

    /// If set, every request is answered with this status.
    pub forced_status: Option<u16>,

    next_id: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an organization to the state.
    pub fn with_organization(mut self, org: Organization) -> Self {
        self.organizations.push(org);
        self
    }

    /// Add a network to the state.
    pub fn with_network(mut self, network: Network) -> Self {
        self.networks.insert(network.id.clone(), network);
        self
    }

    /// Add a device to a network.
    pub fn with_device(mut self, network_id: &str, device: Device) -> Self {
        self.devices
            .entry(network_id.to_string())
            .or_default()
            .push(device);
        self
    }

    /// Set the required API key.
    pub fn with_required_api_key(mut self, key: &str) -> Self {
        self.required_api_key = Some(key.to_string());
        self
    }

    /// Answer every request with `status`.
    pub fn with_forced_status(mut self, status: u16) -> Self {
        self.forced_status = Some(status);
        self
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", 100_000 + self.next_id)
    }

    fn require_org(&self, org_id: &str) -> MockResult<()> {
        if self.organizations.iter().any(|o| o.id == org_id) {
            Ok(())
        } else {
            Err(MockError::NotFound(format!("Organization {org_id} not found")))
        }
    }

    fn require_network(&self, network_id: &str) -> MockResult<&Network> {
        self.networks
            .get(network_id)
            .ok_or_else(|| MockError::NotFound(format!("Network {network_id} not found")))
    }

    /// List networks in an organization.
    pub fn list_networks(&self, org_id: &str) -> MockResult<Vec<Network>> {
        self.require_org(org_id)?;
        let mut networks: Vec<Network> = self
            .networks
            .values()
            .filter(|n| n.organization_id.as_deref() == Some(org_id))
            .cloned()
            .collect();
        networks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(networks)
    }

    /// Create a network; names are unique per organization.
    pub fn create_network(&mut self, org_id: &str, params: NewNetwork) -> MockResult<Network> {
        self.require_org(org_id)?;
        let taken = self
            .networks
            .values()
            .any(|n| n.organization_id.as_deref() == Some(org_id) && n.name == params.name);
        if taken {
            return Err(MockError::BadRequest(
                "Name has already been taken".to_string(),
            ));
        }

        let network = Network {
            id: self.next_id("L_"),
            organization_id: Some(org_id.to_string()),
            name: params.name,
            product_types: params.product_types,
            time_zone: Some(params.time_zone),
            tags: params.tags,
            enrollment_string: None,
            url: None,
            notes: params.notes,
            is_bound_to_config_template: false,
        };
        self.networks.insert(network.id.clone(), network.clone());
        Ok(network)
    }

    /// List devices in a network.
    pub fn list_devices(&self, network_id: &str) -> MockResult<Vec<Device>> {
        self.require_network(network_id)?;
        Ok(self.devices.get(network_id).cloned().unwrap_or_default())
    }

    /// Create an admin; emails are unique per organization.
    pub fn create_admin(&mut self, org_id: &str, params: NewAdmin) -> MockResult<Admin> {
        self.require_org(org_id)?;
        let admins = self.admins.get(org_id);
        if admins.is_some_and(|list| list.iter().any(|a| a.email == params.email)) {
            return Err(MockError::BadRequest("Email has already been taken".to_string()));
        }

        let admin = Admin {
            id: self.next_id(""),
            name: params.name,
            email: params.email,
            org_access: Some(params.org_access),
            tags: params.tags,
            account_status: Some("pending".to_string()),
            two_factor_auth_enabled: false,
            has_api_key: false,
            last_active: None,
        };
        self.admins
            .entry(org_id.to_string())
            .or_default()
            .push(admin.clone());
        Ok(admin)
    }

    /// Register a webhook server on a network.
    pub fn create_webhook(
        &mut self,
        network_id: &str,
        params: NewWebhookServer,
    ) -> MockResult<WebhookServer> {
        self.require_network(network_id)?;
        let server = WebhookServer {
            id: self.next_id("wh_"),
            name: params.name,
            url: params.url,
            network_id: Some(network_id.to_string()),
            payload_template: None,
        };
        self.webhooks
            .entry(network_id.to_string())
            .or_default()
            .push(server.clone());
        Ok(server)
    }

    /// Enable or disable VLANs on a network.
    pub fn set_vlans_enabled(&mut self, network_id: &str, enabled: bool) -> MockResult<bool> {
        self.require_network(network_id)?;
        self.vlans_enabled.insert(network_id.to_string(), enabled);
        Ok(enabled)
    }

    /// List VLANs in a network.
    pub fn list_vlans(&self, network_id: &str) -> MockResult<Vec<Vlan>> {
        self.require_network(network_id)?;
        Ok(self.vlans.get(network_id).cloned().unwrap_or_default())
    }

    /// Add a VLAN; VLANs must be enabled and IDs unique.
    pub fn create_vlan(&mut self, network_id: &str, mut vlan: Vlan) -> MockResult<Vlan> {
        self.require_network(network_id)?;
        if !self.vlans_enabled.get(network_id).copied().unwrap_or(false) {
            return Err(MockError::BadRequest(
                "VLANs are not enabled for this network".to_string(),
            ));
        }

        let vlans = self.vlans.entry(network_id.to_string()).or_default();
        if vlans.iter().any(|v| v.id == vlan.id) {
            return Err(MockError::BadRequest(format!(
                "VLAN {} already exists",
                vlan.id
            )));
        }
        vlan.network_id = Some(network_id.to_string());
        vlans.push(vlan.clone());
        Ok(vlan)
    }

    /// Apply a partial update to a VLAN.
    pub fn update_vlan(&mut self, network_id: &str, vlan_id: &str, body: &Value) -> MockResult<Vlan> {
        self.require_network(network_id)?;
        let vlan = self
            .vlans
            .get_mut(network_id)
            .and_then(|vlans| vlans.iter_mut().find(|v| v.id == vlan_id))
            .ok_or_else(|| MockError::NotFound(format!("VLAN {vlan_id} not found")))?;

        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
        if let Some(name) = field("name") {
            vlan.name = name;
        }
        if let Some(subnet) = field("subnet") {
            vlan.subnet = subnet;
        }
        if let Some(ip) = field("applianceIp") {
            vlan.appliance_ip = ip;
        }
        if let Some(policy) = field("groupPolicyId") {
            vlan.group_policy_id = Some(policy);
        }
        Ok(vlan.clone())
    }

    /// Current firewall rules, with the trailing default rule the API always reports.
    pub fn firewall_rules(&self, network_id: &str) -> MockResult<FirewallRules> {
        self.require_network(network_id)?;
        let mut rules = self
            .firewall_rules
            .get(network_id)
            .cloned()
            .unwrap_or_default();
        rules.push(FirewallRule {
            comment: Some("Default rule".to_string()),
            policy: "allow".to_string(),
            protocol: "Any".to_string(),
            src_port: "Any".to_string(),
            src_cidr: "Any".to_string(),
            dest_port: "Any".to_string(),
            dest_cidr: "Any".to_string(),
            syslog_enabled: false,
        });
        Ok(FirewallRules { rules })
    }

    /// Replace the custom firewall rules.
    pub fn set_firewall_rules(
        &mut self,
        network_id: &str,
        rules: FirewallRules,
    ) -> MockResult<FirewallRules> {
        self.require_network(network_id)?;
        self.firewall_rules
            .insert(network_id.to_string(), rules.custom_rules().to_vec());
        self.firewall_rules(network_id)
    }

    /// Alert settings (empty object until set).
    pub fn alerts(&self, network_id: &str) -> MockResult<Value> {
        self.require_network(network_id)?;
        Ok(self
            .alerts
            .get(network_id)
            .cloned()
            .unwrap_or_else(|| serde_json::json!({})))
    }

    /// Replace alert settings.
    pub fn set_alerts(&mut self, network_id: &str, body: Value) -> MockResult<Value> {
        self.require_network(network_id)?;
        self.alerts.insert(network_id.to_string(), body.clone());
        Ok(body)
    }

    /// Replace site-to-site VPN settings.
    pub fn set_s2s_vpn(&mut self, network_id: &str, body: Value) -> MockResult<Value> {
        self.require_network(network_id)?;
        if body.get("mode").and_then(Value::as_str).is_none() {
            return Err(MockError::BadRequest("'mode' must be specified".to_string()));
        }
        self.s2s_vpn.insert(network_id.to_string(), body.clone());
        Ok(body)
    }
}
