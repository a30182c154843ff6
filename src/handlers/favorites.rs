//! Favorite handlers: add/remove a user's bookmark of one people or planet
//! row. People and planet variants share the same flow; [`FavoriteKind`]
//! picks the target table and message wording.
//!
//! Check order matches the contract: body user_id, then user existence, then
//! path id validity, then target existence / favorite lookup.

use super::{parse_id, value_as_id};
use crate::error::AppError;
use crate::models::FavoriteKind;
use crate::response;
use crate::service::{FavoriteService, PeopleService, PlanetService, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

fn body_user_id(body: Option<Json<Value>>) -> Result<i64, AppError> {
    // null and 0 both count as "no user id given".
    let raw = body
        .and_then(|Json(v)| v.get("user_id").cloned())
        .filter(|v| !v.is_null() && v.as_i64() != Some(0))
        .ok_or_else(|| AppError::BadRequest("User ID is required in the body".into()))?;
    value_as_id(&raw).ok_or_else(|| AppError::BadRequest("User ID must be an integer".into()))
}

async fn target_exists(
    state: &AppState,
    kind: FavoriteKind,
    target_id: i64,
) -> Result<bool, AppError> {
    Ok(match kind {
        FavoriteKind::People => PeopleService::get(&state.pool, target_id).await?.is_some(),
        FavoriteKind::Planet => PlanetService::get(&state.pool, target_id).await?.is_some(),
    })
}

async fn add(
    state: AppState,
    kind: FavoriteKind,
    id_str: String,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = body_user_id(body)?;
    if UserService::get(&state.pool, user_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "User with id {} not found",
            user_id
        )));
    }
    let target_id = parse_id(&id_str, &format!("Invalid {} ID", kind.label()))?;
    if !target_exists(&state, kind, target_id).await? {
        return Err(AppError::NotFound(format!(
            "{} with id {} not found",
            kind.label(),
            target_id
        )));
    }
    if FavoriteService::find(&state.pool, kind, user_id, target_id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "{} already in favorites",
            kind.label()
        )));
    }
    let favorite = FavoriteService::add(&state.pool, kind, user_id, target_id).await?;
    Ok(response::created(favorite))
}

async fn remove(
    state: AppState,
    kind: FavoriteKind,
    id_str: String,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = body_user_id(body)?;
    if UserService::get(&state.pool, user_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "User with id {} not found",
            user_id
        )));
    }
    let target_id = parse_id(&id_str, &format!("Invalid {} ID", kind.label()))?;
    if !FavoriteService::remove(&state.pool, kind, user_id, target_id).await? {
        return Err(AppError::NotFound(format!(
            "Favorite {} not found for this user",
            kind.noun()
        )));
    }
    Ok(response::confirmation(format!(
        "Favorite {} deleted",
        kind.noun()
    )))
}

pub async fn add_people(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    add(state, FavoriteKind::People, id_str, body).await
}

pub async fn add_planet(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    add(state, FavoriteKind::Planet, id_str, body).await
}

pub async fn remove_people(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    remove(state, FavoriteKind::People, id_str, body).await
}

pub async fn remove_planet(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    remove(state, FavoriteKind::Planet, id_str, body).await
}
