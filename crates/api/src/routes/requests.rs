//! Verification request review routes.
//!
//! All routes here act on behalf of a company executive identified by the
//! `X-Caller-Id` header; the engine enforces role and ownership.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::info;

use crate::AppState;
use crate::middleware::CallerIdentity;
use crate::routes::engine_error;
use auditra_shared::types::RequestId;

/// Creates the requests router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/requests", get(list_requests))
        .route("/requests/waiting", get(list_waiting_requests))
        .route("/requests/{request_id}/accept", post(accept_request))
        .route("/requests/{request_id}/reject", post(reject_request))
}

/// GET /requests - List all requests against the caller's company.
async fn list_requests(State(state): State<AppState>, caller: CallerIdentity) -> impl IntoResponse {
    match state.engine.requests(caller.user_id()) {
        Ok(requests) => (StatusCode::OK, Json(json!({ "requests": requests }))).into_response(),
        Err(e) => engine_error(&e),
    }
}

/// GET /requests/waiting - List still-waiting requests against the
/// caller's company.
async fn list_waiting_requests(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> impl IntoResponse {
    match state.engine.waiting_requests(caller.user_id()) {
        Ok(requests) => (StatusCode::OK, Json(json!({ "requests": requests }))).into_response(),
        Err(e) => engine_error(&e),
    }
}

/// POST `/requests/{request_id}/accept` - Accept a waiting request.
async fn accept_request(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(request_id): Path<RequestId>,
) -> impl IntoResponse {
    match state.engine.accept_request(caller.user_id(), request_id) {
        Ok(party) => {
            info!(
                request_id = %request_id,
                accepted_by = %caller.user_id(),
                "Verification request accepted"
            );
            (StatusCode::OK, Json(party)).into_response()
        }
        Err(e) => engine_error(&e),
    }
}

/// POST `/requests/{request_id}/reject` - Reject a waiting request.
async fn reject_request(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(request_id): Path<RequestId>,
) -> impl IntoResponse {
    match state.engine.reject_request(caller.user_id(), request_id) {
        Ok(()) => {
            info!(
                request_id = %request_id,
                rejected_by = %caller.user_id(),
                "Verification request rejected"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => engine_error(&e),
    }
}
