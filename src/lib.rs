//! Holocron: REST CRUD backend for a Star Wars dataset (people, planets,
//! users, and per-user favorites).

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::{api_routes, common_routes_with_ready};
pub use state::AppState;
pub use store::{connect, init_schema};
