use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::ApiError;
use crate::domain::{DomainError, EmployeeDraft};
use crate::infrastructure::AppState;

pub async fn list_employees(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let employees = state.employee_service.list_all().await?;

    Ok(Json(json!({
        "employees": employees,
        "total": employees.len()
    })))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = state
        .employee_service
        .get_by_id(id)
        .await?
        .ok_or(DomainError::NotFound)?;

    Ok(Json(employee))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(draft): Json<EmployeeDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let id = state.employee_service.create(&draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Employee created successfully",
            "id": id
        })),
    ))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(mut draft): Json<EmployeeDraft>,
) -> Result<impl IntoResponse, ApiError> {
    if draft.id.is_some_and(|body_id| body_id != id) {
        return Err(ApiError(DomainError::Validation(vec![
            "Employee ID in the body does not match the URL.".to_string(),
        ])));
    }
    draft.id = Some(id);

    state.employee_service.update(&draft).await?;

    Ok(Json(json!({ "message": "Employee updated successfully" })))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.employee_service.delete(id).await?;

    if !deleted {
        return Err(ApiError(DomainError::NotFound));
    }

    Ok(Json(json!({ "message": "Employee deleted successfully" })))
}
