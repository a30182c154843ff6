//! Planet CRUD against the store.

use crate::error::AppError;
use crate::models::{Planet, PlanetCreate, PlanetPatch};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, climate, surface_water, diameter, rotation_period, \
                       terrain, gravity, orbital_period, population, url, description";

pub struct PlanetService;

impl PlanetService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Planet>, AppError> {
        let rows = sqlx::query_as::<_, Planet>(&format!(
            "SELECT {} FROM planets ORDER BY id",
            COLUMNS
        ))
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Planet>, AppError> {
        let row = sqlx::query_as::<_, Planet>(&format!(
            "SELECT {} FROM planets WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn create(pool: &SqlitePool, body: &PlanetCreate) -> Result<Planet, AppError> {
        let row = sqlx::query_as::<_, Planet>(&format!(
            "INSERT INTO planets (name, climate, surface_water, diameter, rotation_period, \
             terrain, gravity, orbital_period, population, url, description) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            COLUMNS
        ))
        .bind(&body.name)
        .bind(&body.climate)
        .bind(body.surface_water)
        .bind(body.diameter)
        .bind(body.rotation_period)
        .bind(&body.terrain)
        .bind(body.gravity)
        .bind(body.orbital_period)
        .bind(body.population)
        .bind(&body.url)
        .bind(&body.description)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Read-modify-write partial update. Returns None when no row matches.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: PlanetPatch,
    ) -> Result<Option<Planet>, AppError> {
        let Some(mut planet) = Self::get(pool, id).await? else {
            return Ok(None);
        };
        planet.apply(patch);
        sqlx::query(
            "UPDATE planets SET name = ?, climate = ?, surface_water = ?, diameter = ?, \
             rotation_period = ?, terrain = ?, gravity = ?, orbital_period = ?, \
             population = ?, url = ?, description = ? WHERE id = ?",
        )
        .bind(&planet.name)
        .bind(&planet.climate)
        .bind(planet.surface_water)
        .bind(planet.diameter)
        .bind(planet.rotation_period)
        .bind(&planet.terrain)
        .bind(planet.gravity)
        .bind(planet.orbital_period)
        .bind(planet.population)
        .bind(&planet.url)
        .bind(&planet.description)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(Some(planet))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
