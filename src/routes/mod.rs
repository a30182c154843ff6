//! Route tables.

mod common;
mod entities;

pub use common::common_routes_with_ready;
pub use entities::{api_routes, favorite_routes, people_routes, planet_routes, user_routes};
