//! Network endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde_json::Value;

use super::{respond, SharedState};
use crate::NewWebhookServer;

/// GET /networks/{networkId}/devices
pub async fn list_devices(
    State(state): State<SharedState>,
    Path(network_id): Path<String>,
) -> Response {
    let state = state.read().await;
    respond(StatusCode::OK, state.list_devices(&network_id))
}

/// POST /networks/{networkId}/webhooks/httpServers
pub async fn create_webhook(
    State(state): State<SharedState>,
    Path(network_id): Path<String>,
    Json(params): Json<NewWebhookServer>,
) -> Response {
    let mut state = state.write().await;
    respond(StatusCode::CREATED, state.create_webhook(&network_id, params))
}

/// GET /networks/{networkId}/alerts/settings
pub async fn get_alerts(
    State(state): State<SharedState>,
    Path(network_id): Path<String>,
) -> Response {
    let state = state.read().await;
    respond(StatusCode::OK, state.alerts(&network_id))
}

/// PUT /networks/{networkId}/alerts/settings
pub async fn update_alerts(
    State(state): State<SharedState>,
    Path(network_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.write().await;
    respond(StatusCode::OK, state.set_alerts(&network_id, body))
}

/// PUT /networks/{networkId}/appliance/vpn/siteToSiteVpn
pub async fn update_s2s_vpn(
    State(state): State<SharedState>,
    Path(network_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.write().await;
    respond(StatusCode::OK, state.set_s2s_vpn(&network_id, body))
}
