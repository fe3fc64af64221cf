//! Caller identity extraction for protected routes.
//!
//! The platform's authentication layer is an external collaborator; by the
//! time a request reaches this service it carries the caller's opaque
//! principal id in the `X-Caller-Id` header. This extractor surfaces that
//! id to handlers; the engine decides what the caller may actually do.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use serde_json::json;

use auditra_shared::types::UserId;

/// Header carrying the caller's principal id.
pub const CALLER_ID_HEADER: &str = "x-caller-id";

/// Extractor for the calling user's identity.
///
/// Use this in handlers that act on behalf of a caller:
///
/// ```ignore
/// async fn handler(caller: CallerIdentity) -> impl IntoResponse {
///     let user_id = caller.user_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CallerIdentity(pub UserId);

impl CallerIdentity {
    /// Returns the caller's user id.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.0
    }
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(CALLER_ID_HEADER)
            .and_then(|h| h.to_str().ok());

        let Some(raw) = header else {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "missing_caller",
                    "message": "X-Caller-Id header is required"
                })),
            ));
        };

        raw.parse::<UserId>().map(CallerIdentity).map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "invalid_caller",
                    "message": "X-Caller-Id must be a valid UUID"
                })),
            )
        })
    }
}
