//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;
use auditra_core::AuditError;

pub mod companies;
pub mod health;
pub mod identity;
pub mod requests;
pub mod statements;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(companies::routes())
        .merge(requests::routes())
        .merge(statements::routes())
        .merge(identity::routes())
}

/// Maps a domain error onto its JSON response.
pub(crate) fn engine_error(err: &AuditError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}
