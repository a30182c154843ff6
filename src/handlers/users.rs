//! User resource handlers: list, and a user's favorites.

use super::value_as_id;
use crate::error::AppError;
use crate::response;
use crate::service::{FavoriteService, UserService};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = UserService::list(&state.pool).await?;
    Ok(response::ok(rows))
}

/// All favorites owned by one user. The user id comes from the `user_id`
/// query parameter, falling back to a `user_id` field in a JSON body.
pub async fn favorites(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let raw = params
        .get("user_id")
        .map(|s| Value::String(s.clone()))
        .or_else(|| body.and_then(|Json(v)| v.get("user_id").cloned()))
        .filter(|v| !v.is_null() && v.as_i64() != Some(0))
        .ok_or_else(|| {
            AppError::BadRequest(
                "User ID is required (as query param 'user_id' or in body)".into(),
            )
        })?;
    let user_id = value_as_id(&raw)
        .ok_or_else(|| AppError::BadRequest("User ID must be an integer".into()))?;

    if UserService::get(&state.pool, user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".into()));
    }
    let rows = FavoriteService::list_for_user(&state.pool, user_id).await?;
    Ok(response::ok(rows))
}
