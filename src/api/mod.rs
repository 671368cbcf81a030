pub mod company;
pub mod dashboard;
pub mod employee;
pub mod health;
pub mod meta;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

/// HTTP-facing wrapper around `DomainError`.
///
/// Error kinds map to status codes structurally; handlers never parse
/// message text to decide a response.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Resource not found" })),
            )
                .into_response(),
            DomainError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            DomainError::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(json!({ "error": msg }))).into_response()
            }
            DomainError::Database(msg) => {
                tracing::error!("storage failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Companies
        .route(
            "/companies",
            get(company::list_companies).post(company::create_company),
        )
        .route(
            "/companies/:id",
            get(company::get_company)
                .put(company::update_company)
                .delete(company::delete_company),
        )
        .route(
            "/companies/:id/employees",
            get(company::list_company_employees),
        )
        // Employees
        .route(
            "/employees",
            get(employee::list_employees).post(employee::create_employee),
        )
        .route(
            "/employees/:id",
            get(employee::get_employee)
                .put(employee::update_employee)
                .delete(employee::delete_employee),
        )
        // Dashboard & statistics
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/stats/companies", get(dashboard::company_statistics))
        .route("/stats/employees", get(dashboard::employee_statistics))
        // Fixed enumerations for form dropdowns
        .route("/meta/legal-forms", get(meta::list_legal_forms))
        .route("/meta/positions", get(meta::list_positions))
        .with_state(state)
}
