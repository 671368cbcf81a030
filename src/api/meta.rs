//! Fixed enumeration tables exposed to the presentation layer, so form
//! dropdowns and the validation pipeline share one source of truth.

use axum::Json;
use serde_json::{json, Value};

use crate::models::employee::Position;
use crate::models::LEGAL_FORMS;

pub async fn list_legal_forms() -> Json<Value> {
    Json(json!({ "legal_forms": LEGAL_FORMS }))
}

pub async fn list_positions() -> Json<Value> {
    let positions: Vec<Value> = Position::ROLES
        .iter()
        .map(|p| json!({ "value": *p as i32, "label": p.label() }))
        .collect();

    Json(json!({ "positions": positions }))
}
