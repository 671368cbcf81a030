use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::ApiError;
use crate::domain::{Company, CompanyDraft, DomainError};
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/companies",
    responses(
        (status = 200, description = "All companies ordered by name, with employee counts")
    )
)]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let companies = state.company_service.list_all().await?;

    Ok(Json(json!({
        "companies": companies,
        "total": companies.len()
    })))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    responses(
        (status = 200, description = "The company", body = Company),
        (status = 404, description = "No company with this id")
    )
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let company = state
        .company_service
        .get_by_id(id)
        .await?
        .ok_or(DomainError::NotFound)?;

    Ok(Json(company))
}

#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = CompanyDraft,
    responses(
        (status = 201, description = "Company created"),
        (status = 400, description = "Validation failed, all violations listed")
    )
)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(draft): Json<CompanyDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let id = state.company_service.create(&draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Company created successfully",
            "id": id
        })),
    ))
}

pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(mut draft): Json<CompanyDraft>,
) -> Result<impl IntoResponse, ApiError> {
    // A body id that disagrees with the path is a client error
    if draft.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError(DomainError::Validation(vec![
            "Company ID in the body does not match the URL.".to_string(),
        ])));
    }
    draft.id = Some(id);

    state.company_service.update(&draft).await?;

    Ok(Json(json!({ "message": "Company updated successfully" })))
}

pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    // Conflict (company still has employees) propagates as 409 via ApiError
    let deleted = state.company_service.delete(id).await?;

    if !deleted {
        return Err(ApiError(DomainError::NotFound));
    }

    Ok(Json(json!({ "message": "Company deleted successfully" })))
}

pub async fn list_company_employees(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let employees = state.employee_service.list_by_company(id).await?;

    Ok(Json(json!({
        "employees": employees,
        "total": employees.len()
    })))
}
