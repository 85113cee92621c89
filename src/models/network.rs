//! Network model, trait implementations and network-level settings.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{log_created, segment, MerakiClient};
use crate::error::{MerakiError, Result};
use crate::traits::{Create, List};

/// Time zone applied to networks created through [`NewNetwork::appliance`].
pub const DEFAULT_TIME_ZONE: &str = "Europe/Stockholm";

/// A Meraki network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network ID (e.g., "L_646829496481105433" or "N_24329156").
    pub id: String,

    /// Owning organization ID.
    #[serde(default)]
    pub organization_id: Option<String>,

    /// Network name.
    pub name: String,

    /// Product types enabled on the network (e.g., "appliance", "switch").
    #[serde(default)]
    pub product_types: Vec<String>,

    /// IANA time zone.
    #[serde(default)]
    pub time_zone: Option<String>,

    /// Network tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Enrollment string for Systems Manager.
    #[serde(default)]
    pub enrollment_string: Option<String>,

    /// Dashboard URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Whether the network is bound to a configuration template.
    #[serde(default)]
    pub is_bound_to_config_template: bool,
}

/// Request body for creating a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNetwork {
    pub name: String,
    pub time_zone: String,
    pub tags: Vec<String>,
    pub product_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewNetwork {
    /// An appliance-only network in the default time zone.
    pub fn appliance(name: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            name: name.into(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            tags,
            product_types: vec!["appliance".to_string()],
            notes: None,
        }
    }
}

impl Network {
    /// Whether the network has the given product type enabled.
    pub fn has_product(&self, product_type: &str) -> bool {
        self.product_types.iter().any(|p| p == product_type)
    }
}

#[async_trait]
impl List for Network {
    type Scope = str; // Organization ID

    #[tracing::instrument(skip(client))]
    async fn list(client: &MerakiClient, org_id: &str) -> Result<Vec<Self>> {
        client
            .get_json(&format!("organizations/{}/networks", segment(org_id)))
            .await
    }
}

#[async_trait]
impl Create for Network {
    type Scope = str; // Organization ID
    type Params = NewNetwork;

    #[tracing::instrument(skip(client))]
    async fn create(client: &MerakiClient, org_id: &str, params: NewNetwork) -> Result<Self> {
        if params.name.trim().is_empty() {
            return Err(MerakiError::InvalidInput("network name must not be empty".into()));
        }

        let path = format!("organizations/{}/networks", segment(org_id));
        let response = client.post(&path, &params).await?;
        log_created(
            &response,
            "NetworkCreated",
            format_args!("Network {} created", params.name),
        );
        response.json().await.map_err(MerakiError::Http)
    }
}

/// List the networks in an organization.
pub async fn get_org_networks(client: &MerakiClient, org_id: &str) -> Result<Vec<Network>> {
    Network::list(client, org_id).await
}

/// Create an appliance network with the default time zone.
pub async fn create_network(
    client: &MerakiClient,
    org_id: &str,
    name: &str,
    tags: Vec<String>,
) -> Result<Network> {
    Network::create(client, org_id, NewNetwork::appliance(name, tags)).await
}

/// Fetch a network's alert settings.
pub async fn get_alerts(client: &MerakiClient, network_id: &str) -> Result<Value> {
    client
        .get_json(&format!("networks/{}/alerts/settings", segment(network_id)))
        .await
}

/// Replace a network's alert settings with `body`.
#[tracing::instrument(skip(client, body))]
pub async fn update_alerts(client: &MerakiClient, network_id: &str, body: &Value) -> Result<Value> {
    let path = format!("networks/{}/alerts/settings", segment(network_id));
    let response = client.put(&path, body).await?;
    log_created(
        &response,
        "AlertsCreated",
        format_args!("Alerts added to {network_id}"),
    );
    response.json().await.map_err(MerakiError::Http)
}

/// Replace a network's site-to-site VPN settings with `body`.
#[tracing::instrument(skip(client, body))]
pub async fn update_s2s_vpn(
    client: &MerakiClient,
    network_id: &str,
    body: &Value,
) -> Result<Value> {
    let path = format!(
        "networks/{}/appliance/vpn/siteToSiteVpn",
        segment(network_id)
    );
    let response = client.put(&path, body).await?;
    log_created(
        &response,
        "S2sVPNUpdated",
        format_args!("Site-to-Site VPN for {network_id} updated"),
    );
    response.json().await.map_err(MerakiError::Http)
}
