//! Typed entities and request payloads.
//!
//! Patch payloads use `Option<T>` per field: a key that is absent and a key
//! that is explicitly `null` both deserialize to `None` and leave the stored
//! value untouched.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct People {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub skin_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<f64>,
    pub eye_color: Option<String>,
    pub mass: Option<f64>,
    pub homeworld: Option<String>,
    pub birth_year: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PeopleCreate {
    pub name: String,
    pub gender: Option<String>,
    pub skin_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<f64>,
    pub eye_color: Option<String>,
    pub mass: Option<f64>,
    pub homeworld: Option<String>,
    pub birth_year: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PeoplePatch {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub skin_color: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<f64>,
    pub eye_color: Option<String>,
    pub mass: Option<f64>,
    pub homeworld: Option<String>,
    pub birth_year: Option<String>,
    pub url: Option<String>,
}

impl People {
    /// Overwrite the fields the patch supplies; leave the rest unchanged.
    pub fn apply(&mut self, patch: PeoplePatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.gender {
            self.gender = Some(v);
        }
        if let Some(v) = patch.skin_color {
            self.skin_color = Some(v);
        }
        if let Some(v) = patch.hair_color {
            self.hair_color = Some(v);
        }
        if let Some(v) = patch.height {
            self.height = Some(v);
        }
        if let Some(v) = patch.eye_color {
            self.eye_color = Some(v);
        }
        if let Some(v) = patch.mass {
            self.mass = Some(v);
        }
        if let Some(v) = patch.homeworld {
            self.homeworld = Some(v);
        }
        if let Some(v) = patch.birth_year {
            self.birth_year = Some(v);
        }
        if let Some(v) = patch.url {
            self.url = Some(v);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub surface_water: f64,
    pub diameter: f64,
    pub rotation_period: f64,
    pub terrain: String,
    pub gravity: f64,
    pub orbital_period: f64,
    pub population: i64,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct PlanetCreate {
    pub name: String,
    pub climate: String,
    pub surface_water: f64,
    pub diameter: f64,
    pub rotation_period: f64,
    pub terrain: String,
    pub gravity: f64,
    pub orbital_period: f64,
    pub population: i64,
    pub url: String,
    pub description: String,
}

impl PlanetCreate {
    /// Create-time required fields, in the order they are reported missing.
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
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
}

#[derive(Debug, Default, Deserialize)]
pub struct PlanetPatch {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub surface_water: Option<f64>,
    pub diameter: Option<f64>,
    pub rotation_period: Option<f64>,
    pub terrain: Option<String>,
    pub gravity: Option<f64>,
    pub orbital_period: Option<f64>,
    pub population: Option<i64>,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl Planet {
    pub fn apply(&mut self, patch: PlanetPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.climate {
            self.climate = v;
        }
        if let Some(v) = patch.surface_water {
            self.surface_water = v;
        }
        if let Some(v) = patch.diameter {
            self.diameter = v;
        }
        if let Some(v) = patch.rotation_period {
            self.rotation_period = v;
        }
        if let Some(v) = patch.terrain {
            self.terrain = v;
        }
        if let Some(v) = patch.gravity {
            self.gravity = v;
        }
        if let Some(v) = patch.orbital_period {
            self.orbital_period = v;
        }
        if let Some(v) = patch.population {
            self.population = v;
        }
        if let Some(v) = patch.url {
            self.url = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
    }
}

/// A user's bookmark of exactly one People or Planet row. The unset target
/// column serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
}

/// Which entity kind a favorite points at. Carries the wording used in
/// favorite-related messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    People,
    Planet,
}

impl FavoriteKind {
    /// Capitalized form: "People" / "Planet".
    pub fn label(self) -> &'static str {
        match self {
            FavoriteKind::People => "People",
            FavoriteKind::Planet => "Planet",
        }
    }

    /// Lowercase form used mid-sentence: "people" / "planet".
    pub fn noun(self) -> &'static str {
        match self {
            FavoriteKind::People => "people",
            FavoriteKind::Planet => "planet",
        }
    }

    /// Column in `favorites` holding the target id.
    pub fn column(self) -> &'static str {
        match self {
            FavoriteKind::People => "people_id",
            FavoriteKind::Planet => "planet_id",
        }
    }
}
