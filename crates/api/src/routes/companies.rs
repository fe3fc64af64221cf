//! Company registration and verification request submission routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::routes::engine_error;
use auditra_core::CompanyProfile;
use auditra_shared::types::CompanyId;

/// Creates the companies router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/companies", post(register_company))
        .route("/companies/{company_id}", get(get_company))
        .route("/companies/{company_id}", put(update_company))
        .route(
            "/companies/{company_id}/division-requests",
            post(submit_division_request),
        )
        .route(
            "/companies/{company_id}/auditor-requests",
            post(submit_auditor_request),
        )
}

/// POST /companies - Register a company and its executive.
async fn register_company(
    State(state): State<AppState>,
    Json(profile): Json<CompanyProfile>,
) -> impl IntoResponse {
    match state.engine.register_company(profile) {
        Ok(registration) => {
            info!(
                company_id = %registration.company_id,
                executive_id = %registration.executive_id,
                "Company registered"
            );
            (StatusCode::CREATED, Json(registration)).into_response()
        }
        Err(e) => engine_error(&e),
    }
}

/// GET `/companies/{company_id}` - Get company details.
async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<CompanyId>,
) -> impl IntoResponse {
    match state.engine.company(company_id) {
        Ok(company) => (StatusCode::OK, Json(company)).into_response(),
        Err(e) => engine_error(&e),
    }
}

/// PUT `/companies/{company_id}` - Replace a company's profile.
async fn update_company(
    State(state): State<AppState>,
    Path(company_id): Path<CompanyId>,
    Json(profile): Json<CompanyProfile>,
) -> impl IntoResponse {
    match state.engine.update_company(company_id, profile) {
        Ok(company) => {
            info!(company_id = %company_id, "Company updated");
            (StatusCode::OK, Json(company)).into_response()
        }
        Err(e) => engine_error(&e),
    }
}

/// Body for a division verification request.
#[derive(Debug, Deserialize)]
struct DivisionRequestBody {
    /// Name of the division asking for verification.
    division_name: String,
}

/// POST `/companies/{company_id}/division-requests` - Submit a division
/// verification request.
async fn submit_division_request(
    State(state): State<AppState>,
    Path(company_id): Path<CompanyId>,
    Json(body): Json<DivisionRequestBody>,
) -> impl IntoResponse {
    match state
        .engine
        .submit_division_request(company_id, &body.division_name)
    {
        Ok(ticket) => {
            info!(
                company_id = %company_id,
                request_id = %ticket.request_id,
                division_name = %body.division_name,
                "Division verification requested"
            );
            (StatusCode::CREATED, Json(ticket)).into_response()
        }
        Err(e) => engine_error(&e),
    }
}

/// POST `/companies/{company_id}/auditor-requests` - Submit an auditor
/// verification request.
async fn submit_auditor_request(
    State(state): State<AppState>,
    Path(company_id): Path<CompanyId>,
) -> impl IntoResponse {
    match state.engine.submit_auditor_request(company_id) {
        Ok(ticket) => {
            info!(
                company_id = %company_id,
                request_id = %ticket.request_id,
                "Auditor verification requested"
            );
            (StatusCode::CREATED, Json(ticket)).into_response()
        }
        Err(e) => engine_error(&e),
    }
}
