//! Meraki Dashboard API client library.
//!
//! A thin Rust wrapper over the Meraki Dashboard REST API (v1) covering
//! organizations, networks, devices, admins, webhooks, appliance VLANs,
//! firewall rules, alerts and site-to-site VPN settings.
//!
//! # Quick Start
//!
//! ```no_run
//! use meraki_sdk::{MerakiClient, Network, List};
//!
//! #[tokio::main]
//! async fn main() -> meraki_sdk::Result<()> {
//!     meraki_sdk::logging::init();
//!
//!     // Create client from environment variables
//!     let client = MerakiClient::from_env()?;
//!
//!     // Resolve an organization by name
//!     let org_id = meraki_sdk::get_org_by_name(&client, "Acme Corp")
//!         .await?
//!         .expect("organization exists");
//!
//!     // List its networks
//!     let networks = Network::list(&client, &org_id).await?;
//!     println!("Found {} networks", networks.len());
//!
//!     // Create a new appliance network
//!     let network = meraki_sdk::create_network(
//!         &client,
//!         &org_id,
//!         "Branch 12",
//!         vec!["branch".to_string()],
//!     ).await?;
//!     meraki_sdk::enable_vlans(&client, &network.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Every call funnels through [`MerakiClient::request`], which issues one
//! HTTP request and classifies the response with [`StatusClass`]:
//!
//! - 2xx is returned to the caller
//! - 400 and 404 become [`MerakiError::Request`]
//! - 401, 403 and 429 become [`MerakiError::Fatal`]
//! - anything else becomes [`MerakiError::Api`]
//!
//! Entity operations are grouped behind three traits: [`List`], [`Create`]
//! and [`Update`]. The free functions re-exported at the crate root
//! (`get_orgs`, `create_network`, `add_vlan`, ...) are the one-call
//! entry points built on top of them.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `MERAKI_API_KEY` (required) - Your Dashboard API key
//! - `MERAKI_API_URL` (optional) - Base URL (defaults to `https://api.meraki.com/api/v1`)
//! - `MERAKI_VERIFY_TLS` (optional) - Set to `true` to verify TLS certificates
//!
//! Logging is configured with `LOGLEVEL` (defaults to `INFO`).

pub mod cli;
mod client;
mod error;
pub mod logging;
mod models;
pub mod output;
mod status;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{ClientConfig, MerakiClient, API_KEY_HEADER, DEFAULT_API_URL, LEGACY_API_KEY_ENV};
pub use error::{MerakiError, Result};
pub use status::StatusClass;

// Re-export traits
pub use traits::{Create, List, Update};

// Re-export models
pub use models::{
    // Organization types
    ApiAccess,
    Organization,
    // Network types
    Network,
    NewNetwork,
    DEFAULT_TIME_ZONE,
    // Device types
    Device,
    // Admin types
    Admin,
    AdminTag,
    NewAdmin,
    DEFAULT_ORG_ACCESS,
    // Webhook types
    NewWebhookServer,
    PayloadTemplate,
    WebhookServer,
    // Appliance types
    FirewallRule,
    FirewallRules,
    Vlan,
    VlanRef,
    VlanSettings,
};

// Re-export convenience functions
pub use models::{add_org_admin, add_webhook};
pub use models::{create_network, get_alerts, get_org_networks, update_alerts, update_s2s_vpn};
pub use models::{find_org_id, get_org_by_name, get_orgs};
pub use models::get_network_devices;
pub use models::{
    add_vlan, enable_vlans, get_firewall_rules, get_vlans, update_firewall_rules, update_vlan,
};
