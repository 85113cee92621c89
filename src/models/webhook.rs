//! Webhook HTTP server model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{log_created, segment, MerakiClient};
use crate::error::{MerakiError, Result};
use crate::traits::Create;

/// An HTTP server that receives a network's webhook alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookServer {
    /// Server ID (base64 of the URL).
    pub id: String,

    pub name: String,

    pub url: String,

    #[serde(default)]
    pub network_id: Option<String>,

    /// Payload template applied to deliveries.
    #[serde(default)]
    pub payload_template: Option<PayloadTemplate>,
}

/// Reference to a webhook payload template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadTemplate {
    pub payload_template_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for registering a webhook server.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWebhookServer {
    pub name: String,
    pub url: String,
    pub shared_secret: String,
}

impl std::fmt::Debug for NewWebhookServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewWebhookServer")
            .field("name", &self.name)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Create for WebhookServer {
    type Scope = str; // Network ID
    type Params = NewWebhookServer;

    #[tracing::instrument(skip(client))]
    async fn create(
        client: &MerakiClient,
        network_id: &str,
        params: NewWebhookServer,
    ) -> Result<Self> {
        url::Url::parse(&params.url).map_err(|e| {
            MerakiError::InvalidInput(format!("invalid webhook url '{}': {e}", params.url))
        })?;

        let path = format!("networks/{}/webhooks/httpServers", segment(network_id));
        let response = client.post(&path, &params).await?;
        log_created(
            &response,
            "WebhookCreated",
            format_args!("Name {} - {} created", params.name, params.url),
        );
        response.json().await.map_err(MerakiError::Http)
    }
}

/// Register a webhook receiver on a network.
pub async fn add_webhook(
    client: &MerakiClient,
    network_id: &str,
    name: &str,
    url: &str,
    secret: &str,
) -> Result<WebhookServer> {
    let params = NewWebhookServer {
        name: name.to_string(),
        url: url.to_string(),
        shared_secret: secret.to_string(),
    };
    WebhookServer::create(client, network_id, params).await
}
