//! People resource handlers.

use super::{body_object, parse_id};
use crate::error::AppError;
use crate::models::{PeopleCreate, PeoplePatch};
use crate::response;
use crate::service::{PeopleService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = PeopleService::list(&state.pool).await?;
    Ok(response::ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, "Invalid ID")?;
    let person = PeopleService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("People not found".into()))?;
    Ok(response::ok(person))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let map = body_object(body, "Invalid data")?;
    RequestValidator::require_name(&map)?;
    let payload: PeopleCreate = serde_json::from_value(Value::Object(map))
        .map_err(|_| AppError::BadRequest("Invalid data".into()))?;
    let person = PeopleService::create(&state.pool, &payload).await?;
    Ok(response::created(person))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, "Invalid People ID")?;
    if PeopleService::get(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound("People not found".into()));
    }
    let map = body_object(body, "Request body is missing or invalid")?;
    if map.is_empty() {
        return Err(AppError::BadRequest(
            "Request body is missing or invalid".into(),
        ));
    }
    let patch: PeoplePatch = serde_json::from_value(Value::Object(map))
        .map_err(|_| AppError::BadRequest("Request body is missing or invalid".into()))?;
    let person = PeopleService::update(&state.pool, id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound("People not found".into()))?;
    Ok(response::ok(person))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, "Invalid People ID")?;
    if !PeopleService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("People not found".into()));
    }
    Ok(response::confirmation("People deleted successfully"))
}
