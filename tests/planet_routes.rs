mod common;

use common::{error_message, planet_payload, request, setup};
use axum::http::StatusCode;
use serde_json::json;

const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "climate",
    "surface_water",
    "diameter",
    "rotation_period",
    "terrain",
    "gravity",
    "orbital_period",
    "population",
    "url",
    "description",
];

fn label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    let first = chars.next().unwrap();
    first.to_uppercase().collect::<String>() + chars.as_str()
}

#[tokio::test]
async fn create_missing_any_required_field_names_that_field() {
    let (app, _pool) = setup().await;

    for field in REQUIRED_FIELDS {
        let mut body = planet_payload();
        body.as_object_mut().unwrap().remove(*field);
        let (status, resp) = request(&app, "POST", "/planets", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(error_message(&resp), format!("{} is required", label(field)));
    }
}

#[tokio::test]
async fn create_with_null_required_field_names_that_field() {
    let (app, _pool) = setup().await;

    let mut body = planet_payload();
    body["surface_water"] = json!(null);
    let (status, resp) = request(&app, "POST", "/planets", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&resp), "Surface water is required");
}

#[tokio::test]
async fn create_with_full_payload_round_trips() {
    let (app, _pool) = setup().await;

    let (status, created) = request(&app, "POST", "/planets", Some(planet_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("id assigned");
    assert!(id > 0);
    assert_eq!(created["name"], "Tatooine");
    assert_eq!(created["population"], 200000);
    assert_eq!(created["surface_water"], 1.0);

    let (status, fetched) = request(&app, "GET", &format!("/planets/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = request(&app, "GET", "/planets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn partial_update_changes_only_supplied_fields() {
    let (app, _pool) = setup().await;

    let (_, created) = request(&app, "POST", "/planets", Some(planet_payload())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/planets/{id}"),
        Some(json!({"climate": "temperate", "population": 500})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["climate"], "temperate");
    assert_eq!(updated["population"], 500);
    assert_eq!(updated["name"], "Tatooine");
    assert_eq!(updated["terrain"], "desert");
    assert_eq!(updated["diameter"], 10465.0);
}

#[tokio::test]
async fn update_and_delete_validate_id_and_existence() {
    let (app, _pool) = setup().await;

    let (status, resp) =
        request(&app, "PUT", "/planets/abc", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&resp), "Invalid Planet ID");

    let (status, resp) = request(&app, "PUT", "/planets/9", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&resp), "Planet not found");

    let (status, resp) = request(&app, "DELETE", "/planets/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&resp), "Planet not found");

    let (status, resp) = request(&app, "GET", "/planets/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&resp), "Invalid ID");
}

#[tokio::test]
async fn delete_removes_the_row() {
    let (app, _pool) = setup().await;

    let (_, created) = request(&app, "POST", "/planets", Some(planet_payload())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, resp) = request(&app, "DELETE", &format!("/planets/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["msg"], "Planet deleted successfully");

    let (status, _) = request(&app, "GET", &format!("/planets/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
