//! Security appliance settings: VLANs and L3 firewall rules.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::client::{log_created, segment, MerakiClient};
use crate::error::{MerakiError, Result};
use crate::traits::{Create, List, Update};

/// An appliance VLAN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vlan {
    /// VLAN ID (1-4094). Sent as a string; numbers are accepted on read.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    pub name: String,

    /// Subnet in CIDR notation (e.g., "192.168.1.0/24").
    pub subnet: String,

    /// Appliance IP on the VLAN.
    #[serde(rename = "applianceIp")]
    pub appliance_ip: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_policy_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
}

impl Vlan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        subnet: impl Into<String>,
        appliance_ip: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subnet: subnet.into(),
            appliance_ip: appliance_ip.into(),
            group_policy_id: None,
            network_id: None,
        }
    }

    /// Check that the VLAN ID is a number in 1..=4094.
    pub fn validate_id(id: &str) -> Result<u16> {
        match id.trim().parse::<u16>() {
            Ok(n) if (1..=4094).contains(&n) => Ok(n),
            _ => Err(MerakiError::InvalidInput(format!(
                "VLAN id '{id}' must be a number between 1 and 4094"
            ))),
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> core::result::Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Identifies one VLAN in one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlanRef {
    pub network_id: String,
    pub vlan_id: String,
}

impl VlanRef {
    pub fn new(network_id: impl Into<String>, vlan_id: impl Into<String>) -> Self {
        Self {
            network_id: network_id.into(),
            vlan_id: vlan_id.into(),
        }
    }
}

#[async_trait]
impl List for Vlan {
    type Scope = str; // Network ID

    #[tracing::instrument(skip(client))]
    async fn list(client: &MerakiClient, network_id: &str) -> Result<Vec<Self>> {
        client
            .get_json(&format!("networks/{}/appliance/vlans", segment(network_id)))
            .await
    }
}

#[async_trait]
impl Create for Vlan {
    type Scope = str; // Network ID
    type Params = Vlan;

    #[tracing::instrument(skip(client))]
    async fn create(client: &MerakiClient, network_id: &str, vlan: Vlan) -> Result<Self> {
        Vlan::validate_id(&vlan.id)?;

        let path = format!("networks/{}/appliance/vlans", segment(network_id));
        let response = client.post(&path, &vlan).await?;
        log_created(
            &response,
            "VlanAdded",
            format_args!("Vlan id: {} added to {network_id}", vlan.id),
        );
        response.json().await.map_err(MerakiError::Http)
    }
}

#[async_trait]
impl Update for Vlan {
    type Id = VlanRef;
    /// Partial VLAN body; only the fields present are changed.
    type Params = Value;

    #[tracing::instrument(skip(client, body))]
    async fn update(client: &MerakiClient, id: VlanRef, body: Value) -> Result<Self> {
        let path = format!(
            "networks/{}/appliance/vlans/{}",
            segment(&id.network_id),
            segment(&id.vlan_id)
        );
        let response = client.put(&path, &body).await?;
        log_created(
            &response,
            "VlanUpdated",
            format_args!("Vlan id: {} updated", id.vlan_id),
        );
        response.json().await.map_err(MerakiError::Http)
    }
}

/// Whether VLANs are enabled on a network's appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VlanSettings {
    pub vlans_enabled: bool,
}

#[async_trait]
impl Update for VlanSettings {
    type Id = String; // Network ID
    type Params = VlanSettings;

    #[tracing::instrument(skip(client))]
    async fn update(client: &MerakiClient, network_id: String, params: VlanSettings) -> Result<Self> {
        let path = format!("networks/{}/appliance/vlans/settings", segment(&network_id));
        let response = client.put(&path, &params).await?;
        if params.vlans_enabled {
            log_created(
                &response,
                "VlansEnabled",
                format_args!("Vlans enabled on {network_id}"),
            );
        }
        response.json().await.map_err(MerakiError::Http)
    }
}

/// The appliance's layer 3 firewall rule set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirewallRules {
    pub rules: Vec<FirewallRule>,
}

/// One layer 3 firewall rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallRule {
    #[serde(default)]
    pub comment: Option<String>,
    /// "allow" or "deny".
    pub policy: String,
    /// "tcp", "udp", "icmp", "icmp6" or "any".
    pub protocol: String,
    #[serde(default = "any")]
    pub src_port: String,
    pub src_cidr: String,
    #[serde(default = "any")]
    pub dest_port: String,
    pub dest_cidr: String,
    #[serde(default)]
    pub syslog_enabled: bool,
}

fn any() -> String {
    "Any".to_string()
}

impl FirewallRules {
    /// The rules the caller manages, without the trailing default rule the
    /// API appends to every response.
    pub fn custom_rules(&self) -> &[FirewallRule] {
        match self.rules.last() {
            Some(last) if last.comment.as_deref() == Some("Default rule") => {
                &self.rules[..self.rules.len() - 1]
            }
            _ => &self.rules,
        }
    }
}

#[async_trait]
impl Update for FirewallRules {
    type Id = String; // Network ID
    type Params = FirewallRules;

    #[tracing::instrument(skip(client, rules))]
    async fn update(client: &MerakiClient, network_id: String, rules: FirewallRules) -> Result<Self> {
        for rule in &rules.rules {
            if !matches!(rule.policy.as_str(), "allow" | "deny") {
                return Err(MerakiError::InvalidInput(format!(
                    "firewall policy '{}' must be 'allow' or 'deny'",
                    rule.policy
                )));
            }
        }

        let path = format!(
            "networks/{}/appliance/firewall/l3FirewallRules",
            segment(&network_id)
        );
        let response = client.put(&path, &rules).await?;
        log_created(
            &response,
            "L3FirewallUpdated",
            format_args!("L3 Firewall rules for {network_id} updated"),
        );
        response.json().await.map_err(MerakiError::Http)
    }
}

/// List a network's appliance VLANs.
pub async fn get_vlans(client: &MerakiClient, network_id: &str) -> Result<Vec<Vlan>> {
    Vlan::list(client, network_id).await
}

/// Add a VLAN to a network's appliance.
pub async fn add_vlan(client: &MerakiClient, network_id: &str, vlan: Vlan) -> Result<Vlan> {
    Vlan::create(client, network_id, vlan).await
}

/// Apply a partial update to one VLAN.
pub async fn update_vlan(
    client: &MerakiClient,
    network_id: &str,
    vlan_id: &str,
    body: Value,
) -> Result<Vlan> {
    Vlan::update(client, VlanRef::new(network_id, vlan_id), body).await
}

/// Turn on VLANs for a network's appliance.
pub async fn enable_vlans(client: &MerakiClient, network_id: &str) -> Result<VlanSettings> {
    VlanSettings::update(
        client,
        network_id.to_string(),
        VlanSettings {
            vlans_enabled: true,
        },
    )
    .await
}

/// Fetch a network's layer 3 firewall rules.
pub async fn get_firewall_rules(client: &MerakiClient, network_id: &str) -> Result<FirewallRules> {
    client
        .get_json(&format!(
            "networks/{}/appliance/firewall/l3FirewallRules",
            segment(network_id)
        ))
        .await
}

/// Replace a network's layer 3 firewall rules.
pub async fn update_firewall_rules(
    client: &MerakiClient,
    network_id: &str,
    rules: FirewallRules,
) -> Result<FirewallRules> {
    FirewallRules::update(client, network_id.to_string(), rules).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vlan_id_accepts_number_or_string() {
        let from_number: Vlan = serde_json::from_str(
            r#"{"id": 1234, "name": "Data", "subnet": "10.0.0.0/24", "applianceIp": "10.0.0.1"}"#,
        )
        .unwrap();
        let from_string: Vlan = serde_json::from_str(
            r#"{"id": "1234", "name": "Data", "subnet": "10.0.0.0/24", "applianceIp": "10.0.0.1"}"#,
        )
        .unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn test_vlan_body_omits_unset_fields() {
        let vlan = Vlan::new("10", "Voice", "192.168.10.0/24", "192.168.10.1");
        let json = serde_json::to_value(&vlan).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "10",
                "name": "Voice",
                "subnet": "192.168.10.0/24",
                "applianceIp": "192.168.10.1"
            })
        );
    }

    #[test]
    fn test_validate_vlan_id() {
        assert_eq!(Vlan::validate_id("1").unwrap(), 1);
        assert_eq!(Vlan::validate_id("4094").unwrap(), 4094);
        assert!(Vlan::validate_id("0").is_err());
        assert!(Vlan::validate_id("4095").is_err());
        assert!(Vlan::validate_id("voice").is_err());
    }

    #[test]
    fn test_vlan_settings_body() {
        let json = serde_json::to_value(VlanSettings {
            vlans_enabled: true,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "vlansEnabled": true }));
    }

    #[test]
    fn test_firewall_rules_custom_rules_drops_default() {
        let json = r#"{
            "rules": [
                {
                    "comment": "Allow TCP traffic to subnet with HTTP servers.",
                    "policy": "allow",
                    "protocol": "tcp",
                    "destPort": "443",
                    "destCidr": "192.168.1.0/24",
                    "srcPort": "Any",
                    "srcCidr": "Any",
                    "syslogEnabled": false
                },
                {
                    "comment": "Default rule",
                    "policy": "allow",
                    "protocol": "Any",
                    "srcPort": "Any",
                    "srcCidr": "Any",
                    "destPort": "Any",
                    "destCidr": "Any",
                    "syslogEnabled": false
                }
            ]
        }"#;

        let rules: FirewallRules = serde_json::from_str(json).unwrap();
        assert_eq!(rules.rules.len(), 2);
        assert_eq!(rules.custom_rules().len(), 1);
        assert_eq!(rules.custom_rules()[0].dest_port, "443");
    }

    #[test]
    fn test_firewall_rule_port_defaults() {
        let rule: FirewallRule = serde_json::from_str(
            r#"{"policy": "deny", "protocol": "any", "srcCidr": "Any", "destCidr": "10.0.0.0/8"}"#,
        )
        .unwrap();
        assert_eq!(rule.src_port, "Any");
        assert_eq!(rule.dest_port, "Any");
        assert!(!rule.syslog_enabled);
    }
}
