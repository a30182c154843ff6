//! Resource routes. Ids are taken as raw path strings so handlers can apply
//! the parse-and-reject rule with the contract's own messages.

use crate::handlers::{favorites, people, planets, users};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn people_routes(state: AppState) -> Router {
    Router::new()
        .route("/people", get(people::list).post(people::create))
        .route(
            "/people/:id",
            get(people::read).put(people::update).delete(people::remove),
        )
        .with_state(state)
}

pub fn planet_routes(state: AppState) -> Router {
    Router::new()
        .route("/planets", get(planets::list).post(planets::create))
        .route(
            "/planets/:id",
            get(planets::read)
                .put(planets::update)
                .delete(planets::remove),
        )
        .with_state(state)
}

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list))
        .route("/users/favorites", get(users::favorites))
        .with_state(state)
}

pub fn favorite_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/favorite/people/:id",
            post(favorites::add_people).delete(favorites::remove_people),
        )
        .route(
            "/favorite/planet/:id",
            post(favorites::add_planet).delete(favorites::remove_planet),
        )
        .with_state(state)
}

/// All resource routes merged into one router.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(people_routes(state.clone()))
        .merge(planet_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(favorite_routes(state))
}
