//! Organization endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{respond, SharedState};
use crate::{NewAdmin, NewNetwork};

/// GET /organizations
pub async fn list_organizations(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    (StatusCode::OK, Json(state.organizations.clone()))
}

/// GET /organizations/{orgId}/networks
pub async fn list_networks(
    State(state): State<SharedState>,
    Path(org_id): Path<String>,
) -> Response {
    let state = state.read().await;
    respond(StatusCode::OK, state.list_networks(&org_id))
}

/// POST /organizations/{orgId}/networks
pub async fn create_network(
    State(state): State<SharedState>,
    Path(org_id): Path<String>,
    Json(params): Json<NewNetwork>,
) -> Response {
    let mut state = state.write().await;
    respond(StatusCode::CREATED, state.create_network(&org_id, params))
}

/// POST /organizations/{orgId}/admins
pub async fn create_admin(
    State(state): State<SharedState>,
    Path(org_id): Path<String>,
    Json(params): Json<NewAdmin>,
) -> Response {
    let mut state = state.write().await;
    respond(StatusCode::CREATED, state.create_admin(&org_id, params))
}
