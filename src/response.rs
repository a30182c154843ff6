//! Response helpers: bare entity payloads plus a confirmation body for deletes.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Confirmation {
    pub msg: String,
}

/// 201 with the created entity as the body.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// 200 with the entity (or array of entities) as the body.
pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// 200 with a `{"msg": ...}` confirmation body.
pub fn confirmation(msg: impl Into<String>) -> (StatusCode, Json<Confirmation>) {
    (StatusCode::OK, Json(Confirmation { msg: msg.into() }))
}
