//! Appliance VLAN and firewall endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::{errors, respond, SharedState};
use crate::{FirewallRules, Vlan, VlanSettings};

/// GET /networks/{networkId}/appliance/vlans
pub async fn list_vlans(
    State(state): State<SharedState>,
    Path(network_id): Path<String>,
) -> Response {
    let state = state.read().await;
    respond(StatusCode::OK, state.list_vlans(&network_id))
}

/// POST /networks/{networkId}/appliance/vlans
pub async fn create_vlan(
    State(state): State<SharedState>,
    Path(network_id): Path<String>,
    Json(vlan): Json<Vlan>,
) -> Response {
    let mut state = state.write().await;
    respond(StatusCode::CREATED, state.create_vlan(&network_id, vlan))
}

/// PUT /networks/{networkId}/appliance/vlans/{vlanId}
///
/// Also serves PUT .../vlans/settings, which shares the path shape.
pub async fn update_vlan(
    State(state): State<SharedState>,
    Path((network_id, vlan_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.write().await;

    if vlan_id == "settings" {
        let settings: VlanSettings = match serde_json::from_value(body) {
            Ok(s) => s,
            Err(e) => return errors(StatusCode::BAD_REQUEST, &e.to_string()),
        };
        let result = state
            .set_vlans_enabled(&network_id, settings.vlans_enabled)
            .map(|enabled| VlanSettings {
                vlans_enabled: enabled,
            });
        return respond(StatusCode::OK, result);
    }

    respond(StatusCode::OK, state.update_vlan(&network_id, &vlan_id, &body))
}

/// GET /networks/{networkId}/appliance/firewall/l3FirewallRules
pub async fn get_firewall_rules(
    State(state): State<SharedState>,
    Path(network_id): Path<String>,
) -> Response {
    let state = state.read().await;
    respond(StatusCode::OK, state.firewall_rules(&network_id))
}

/// PUT /networks/{networkId}/appliance/firewall/l3FirewallRules
pub async fn update_firewall_rules(
    State(state): State<SharedState>,
    Path(network_id): Path<String>,
    Json(rules): Json<FirewallRules>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    respond(StatusCode::OK, state.set_firewall_rules(&network_id, rules))
}
