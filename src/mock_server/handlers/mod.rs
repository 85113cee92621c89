//! HTTP request handlers for the mock server.

pub mod appliance;
pub mod networks;
pub mod organizations;

pub use appliance::*;
pub use networks::*;
pub use organizations::*;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::state::{MockError, MockState};

pub(crate) type SharedState = Arc<RwLock<MockState>>;

/// Dashboard-style error body: `{"errors": ["..."]}`.
pub(crate) fn errors(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "errors": [message] }))).into_response()
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        match self {
            MockError::NotFound(msg) => errors(StatusCode::NOT_FOUND, &msg),
            MockError::BadRequest(msg) => errors(StatusCode::BAD_REQUEST, &msg),
        }
    }
}

/// Turn a state result into a JSON response with `status` on success.
pub(crate) fn respond<T: serde::Serialize>(
    status: StatusCode,
    result: Result<T, MockError>,
) -> Response {
    match result {
        Ok(body) => (status, Json(body)).into_response(),
        Err(e) => e.into_response(),
    }
}
