#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use holocron::{api_routes, AppState};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Fresh in-memory store plus the resource router mounted on it.
pub async fn setup() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    holocron::init_schema(&pool).await.expect("init schema");
    let app = api_routes(AppState { pool: pool.clone() });
    (app, pool)
}

/// Users have no create endpoint; insert directly through the pool.
pub async fn seed_user(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query_as::<_, (i64,)>(
        "INSERT INTO users (username, firstname, lastname, email) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(username)
    .bind("Leia")
    .bind("Organa")
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .expect("seed user")
    .0
}

pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not json")
    };
    (status, json)
}

pub fn error_message(body: &Value) -> &str {
    body["error"]["message"]
        .as_str()
        .expect("missing error message")
}

/// A planet create body with every required field present.
pub fn planet_payload() -> Value {
    json!({
        "name": "Tatooine",
        "climate": "arid",
        "surface_water": 1.0,
        "diameter": 10465.0,
        "rotation_period": 23.0,
        "terrain": "desert",
        "gravity": 1.0,
        "orbital_period": 304.0,
        "population": 200000,
        "url": "https://swapi.dev/api/planets/1/",
        "description": "Desert world with twin suns"
    })
}
