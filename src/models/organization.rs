//! Organization model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::MerakiClient;
use crate::error::Result;
use crate::logging::{log_event, Level};
use crate::traits::List;

/// A Meraki Dashboard organization.
///
/// Organizations are the top-level containers; every network, admin and
/// license belongs to exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization ID (numeric, returned as a string).
    pub id: String,

    /// Organization name.
    pub name: String,

    /// Dashboard URL for the organization.
    #[serde(default)]
    pub url: Option<String>,

    /// API access settings.
    #[serde(default)]
    pub api: Option<ApiAccess>,
}

/// API access settings for an organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiAccess {
    /// Whether the Dashboard API is enabled.
    #[serde(default)]
    pub enabled: bool,
}

impl Organization {
    /// Whether Dashboard API access is enabled for this organization.
    pub fn api_enabled(&self) -> bool {
        self.api.as_ref().map(|a| a.enabled).unwrap_or(false)
    }
}

#[async_trait]
impl List for Organization {
    type Scope = ();

    #[tracing::instrument(skip(client))]
    async fn list(client: &MerakiClient, _scope: &()) -> Result<Vec<Self>> {
        client.get_json("organizations").await
    }
}

/// List the organizations the API key has access to.
pub async fn get_orgs(client: &MerakiClient) -> Result<Vec<Organization>> {
    Organization::list(client, &()).await
}

/// Look up an organization ID by exact name.
///
/// Returns `None` (and logs a `Fail` event) when no organization matches.
/// If several organizations share the name, the last one listed wins.
pub async fn get_org_by_name(client: &MerakiClient, name: &str) -> Result<Option<String>> {
    let organizations = get_orgs(client).await?;
    Ok(find_org_id(&organizations, name))
}

/// Find the ID of the organization called `name` in an already-fetched list.
pub fn find_org_id(organizations: &[Organization], name: &str) -> Option<String> {
    let org_id = organizations
        .iter()
        .filter(|org| org.name == name)
        .last()
        .map(|org| org.id.clone());

    if org_id.is_none() {
        log_event(Level::Error, "Fail", "Organization not found");
    }

    org_id
}
