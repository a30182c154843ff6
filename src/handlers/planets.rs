//! Planet resource handlers. Same shape as people, except create requires
//! the full attribute set and names the first missing field.

use super::{body_object, parse_id};
use crate::error::AppError;
use crate::models::{PlanetCreate, PlanetPatch};
use crate::response;
use crate::service::{PlanetService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = PlanetService::list(&state.pool).await?;
    Ok(response::ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, "Invalid ID")?;
    let planet = PlanetService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(response::ok(planet))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let map = body_object(body, "Invalid data")?;
    RequestValidator::require_fields(&map, PlanetCreate::REQUIRED_FIELDS)?;
    let payload: PlanetCreate = serde_json::from_value(Value::Object(map))
        .map_err(|_| AppError::BadRequest("Invalid data".into()))?;
    let planet = PlanetService::create(&state.pool, &payload).await?;
    Ok(response::created(planet))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, "Invalid Planet ID")?;
    if PlanetService::get(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound("Planet not found".into()));
    }
    let map = body_object(body, "Request body is missing or invalid")?;
    if map.is_empty() {
        return Err(AppError::BadRequest(
            "Request body is missing or invalid".into(),
        ));
    }
    let patch: PlanetPatch = serde_json::from_value(Value::Object(map))
        .map_err(|_| AppError::BadRequest("Request body is missing or invalid".into()))?;
    let planet = PlanetService::update(&state.pool, id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(response::ok(planet))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, "Invalid Planet ID")?;
    if !PlanetService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Planet not found".into()));
    }
    Ok(response::confirmation("Planet deleted successfully"))
}
