//! Pool construction and initial-schema DDL.
//!
//! The schema is fixed: four tables created once at startup. Uniqueness on
//! `users.username`, `users.email` and the favorite (user, target) pairs is
//! enforced here rather than with application-level locking. The favorite
//! CHECK constraint guarantees exactly one of `people_id`/`planet_id` is set.
//! Foreign keys are declarative only: deleting a referenced row does not
//! cascade into `favorites`.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    firstname TEXT NOT NULL,
    lastname TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    gender TEXT,
    skin_color TEXT,
    hair_color TEXT,
    height REAL,
    eye_color TEXT,
    mass REAL,
    homeworld TEXT,
    birth_year TEXT,
    url TEXT
);

CREATE TABLE IF NOT EXISTS planets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    climate TEXT NOT NULL,
    surface_water REAL NOT NULL,
    diameter REAL NOT NULL,
    rotation_period REAL NOT NULL,
    terrain TEXT NOT NULL,
    gravity REAL NOT NULL,
    orbital_period REAL NOT NULL,
    population INTEGER NOT NULL,
    url TEXT NOT NULL,
    description TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS favorites (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users (id),
    planet_id INTEGER REFERENCES planets (id),
    people_id INTEGER REFERENCES people (id),
    UNIQUE (user_id, people_id),
    UNIQUE (user_id, planet_id),
    CHECK ((people_id IS NULL) <> (planet_id IS NULL))
);
"#;

/// Open a pool on `database_url`, creating the SQLite file if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(AppError::Db)?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the tables if they do not exist. sqlx executes one statement per
/// query, so the bundled DDL is split on ';'.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for stmt in SCHEMA.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    tracing::debug!("schema ensured");
    Ok(())
}
