//! Per-resource query services and request validation.

mod favorites;
mod people;
mod planets;
mod users;
mod validation;

pub use favorites::FavoriteService;
pub use people::PeopleService;
pub use planets::PlanetService;
pub use users::UserService;
pub use validation::RequestValidator;
