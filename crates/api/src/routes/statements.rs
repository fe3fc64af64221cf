//! Statement upload and listing routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::AppState;
use crate::middleware::CallerIdentity;
use crate::routes::engine_error;

/// Creates the statements router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/statements/financial",
            post(upload_financial_statement).get(list_financial_statements),
        )
        .route(
            "/statements/audit",
            post(upload_audit_statement).get(list_audit_statements),
        )
}

/// Body for a statement upload.
#[derive(Debug, Deserialize)]
struct UploadStatementBody {
    /// Location of the statement document.
    url: String,
}

/// POST /statements/financial - Upload a financial statement as a verified
/// division manager.
async fn upload_financial_statement(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(body): Json<UploadStatementBody>,
) -> impl IntoResponse {
    match state
        .engine
        .upload_financial_statement(caller.user_id(), &body.url)
    {
        Ok(statement) => {
            info!(
                statement_id = %statement.id,
                company_id = %statement.company_id,
                "Financial statement uploaded"
            );
            (StatusCode::CREATED, Json(statement)).into_response()
        }
        Err(e) => engine_error(&e),
    }
}

/// GET /statements/financial - List the caller's company's financial
/// statements.
async fn list_financial_statements(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> impl IntoResponse {
    match state.engine.financial_statements(caller.user_id()) {
        Ok(statements) => {
            (StatusCode::OK, Json(json!({ "statements": statements }))).into_response()
        }
        Err(e) => engine_error(&e),
    }
}

/// POST /statements/audit - Upload an audit statement as a verified
/// auditor.
async fn upload_audit_statement(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(body): Json<UploadStatementBody>,
) -> impl IntoResponse {
    match state
        .engine
        .upload_audit_statement(caller.user_id(), &body.url)
    {
        Ok(statement) => {
            info!(
                statement_id = %statement.id,
                company_id = %statement.company_id,
                "Audit statement uploaded"
            );
            (StatusCode::CREATED, Json(statement)).into_response()
        }
        Err(e) => engine_error(&e),
    }
}

/// GET /statements/audit - List the caller's company's audit statements.
async fn list_audit_statements(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> impl IntoResponse {
    match state.engine.audit_statements(caller.user_id()) {
        Ok(statements) => {
            (StatusCode::OK, Json(json!({ "statements": statements }))).into_response()
        }
        Err(e) => engine_error(&e),
    }
}
