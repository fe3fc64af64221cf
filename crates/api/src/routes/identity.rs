//! Caller self-inspection routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};

use crate::AppState;
use crate::middleware::CallerIdentity;
use crate::routes::engine_error;

/// Creates the identity router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

/// GET /me - Return the caller's own user record.
///
/// Lets a pending user observe whether their verification request has
/// been decided yet.
async fn me(State(state): State<AppState>, caller: CallerIdentity) -> impl IntoResponse {
    match state.engine.user(caller.user_id()) {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => engine_error(&e),
    }
}
