use axum::{extract::State, response::IntoResponse, Json};

use super::ApiError;
use crate::infrastructure::AppState;
use crate::services::stats_service::DashboardSummary;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Headline numbers and recent hires", body = DashboardSummary)
    )
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let summary = state.stats_service.dashboard().await?;
    Ok(Json(summary))
}

pub async fn company_statistics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state.stats_service.company_statistics().await?;
    Ok(Json(stats))
}

pub async fn employee_statistics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state.stats_service.employee_statistics().await?;
    Ok(Json(stats))
}
