//! Mock Meraki Dashboard API server.
//!
//! Provides an axum-based HTTP server that simulates the Dashboard API.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers::{self, errors};
use super::state::MockState;
use crate::client::API_KEY_HEADER;

/// An in-process Dashboard API bound to a loopback port.
///
/// Point a [`MerakiClient`](crate::MerakiClient) at [`MockServer::url`] and
/// drive whole provisioning workflows against it.
pub struct MockServer {
    url: String,
    handle: JoinHandle<()>,
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Serve the default scenario (two organizations, one network, two devices).
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Serve a state with no organizations at all.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Serve `state` on an ephemeral loopback port.
    pub async fn with_state(state: MockState) -> Self {
        let state = state.shared();
        let router = Self::create_router(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock Dashboard listener");
        let addr = listener
            .local_addr()
            .expect("mock Dashboard listener address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("mock Dashboard server");
        });

        Self {
            url: format!("http://{addr}"),
            handle,
            state,
        }
    }

    /// Base URL to hand to the client; API paths hang directly off it.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The live state, for seeding data or forcing statuses mid-test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        Arc::clone(&self.state)
    }

    /// Stop serving and wait for the task to finish.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// State built from [`Fixtures::default_scenario`].
    pub fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for org in scenario.organizations {
            state = state.with_organization(org);
        }

        for network in scenario.networks {
            state = state.with_network(network);
        }

        for (network_id, devices) in scenario.devices {
            for device in devices {
                state = state.with_device(&network_id, device);
            }
        }

        state
    }

    /// Routes for every wrapped endpoint behind the gatekeeper, plus an
    /// unguarded `/health`.
    pub fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Organization routes
            .route("/organizations", get(handlers::list_organizations))
            .route(
                "/organizations/:org_id/networks",
                get(handlers::list_networks).post(handlers::create_network),
            )
            .route("/organizations/:org_id/admins", post(handlers::create_admin))
            // Network routes
            .route("/networks/:network_id/devices", get(handlers::list_devices))
            .route(
                "/networks/:network_id/webhooks/httpServers",
                post(handlers::create_webhook),
            )
            .route(
                "/networks/:network_id/alerts/settings",
                get(handlers::get_alerts).put(handlers::update_alerts),
            )
            .route(
                "/networks/:network_id/appliance/vpn/siteToSiteVpn",
                put(handlers::update_s2s_vpn),
            )
            // Appliance routes
            .route(
                "/networks/:network_id/appliance/vlans",
                get(handlers::list_vlans).post(handlers::create_vlan),
            )
            .route(
                "/networks/:network_id/appliance/vlans/:vlan_id",
                put(handlers::update_vlan),
            )
            .route(
                "/networks/:network_id/appliance/firewall/l3FirewallRules",
                get(handlers::get_firewall_rules).put(handlers::update_firewall_rules),
            )
            .layer(middleware::from_fn_with_state(state.clone(), gatekeeper))
            .route("/health", get(health))
            .with_state(state)
    }
}

/// Apply the forced status and API key check before any API route.
async fn gatekeeper(
    State(state): State<Arc<RwLock<MockState>>>,
    request: Request,
    next: Next,
) -> Response {
    {
        let state = state.read().await;

        if let Some(code) = state.forced_status {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return errors(status, "Forced status");
        }

        if let Some(ref required) = state.required_api_key {
            let provided = request
                .headers()
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok());
            if provided != Some(required.as_str()) {
                return errors(StatusCode::UNAUTHORIZED, "Invalid API key");
            }
        }
    }

    next.run(request).await
}

async fn health() -> &'static str {
    "ok"
}
