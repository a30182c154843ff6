//! People CRUD against the store.

use crate::error::AppError;
use crate::models::{People, PeopleCreate, PeoplePatch};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, gender, skin_color, hair_color, height, \
                       eye_color, mass, homeworld, birth_year, url";

pub struct PeopleService;

impl PeopleService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<People>, AppError> {
        let rows = sqlx::query_as::<_, People>(&format!(
            "SELECT {} FROM people ORDER BY id",
            COLUMNS
        ))
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<People>, AppError> {
        let row = sqlx::query_as::<_, People>(&format!(
            "SELECT {} FROM people WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Insert one row; the store assigns the id. Returns the created row.
    pub async fn create(pool: &SqlitePool, body: &PeopleCreate) -> Result<People, AppError> {
        let row = sqlx::query_as::<_, People>(&format!(
            "INSERT INTO people (name, gender, skin_color, hair_color, height, \
             eye_color, mass, homeworld, birth_year, url) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            COLUMNS
        ))
        .bind(&body.name)
        .bind(&body.gender)
        .bind(&body.skin_color)
        .bind(&body.hair_color)
        .bind(body.height)
        .bind(&body.eye_color)
        .bind(body.mass)
        .bind(&body.homeworld)
        .bind(&body.birth_year)
        .bind(&body.url)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Read-modify-write partial update. Returns None when no row matches.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: PeoplePatch,
    ) -> Result<Option<People>, AppError> {
        let Some(mut person) = Self::get(pool, id).await? else {
            return Ok(None);
        };
        person.apply(patch);
        sqlx::query(
            "UPDATE people SET name = ?, gender = ?, skin_color = ?, hair_color = ?, \
             height = ?, eye_color = ?, mass = ?, homeworld = ?, birth_year = ?, url = ? \
             WHERE id = ?",
        )
        .bind(&person.name)
        .bind(&person.gender)
        .bind(&person.skin_color)
        .bind(&person.hair_color)
        .bind(person.height)
        .bind(&person.eye_color)
        .bind(person.mass)
        .bind(&person.homeworld)
        .bind(&person.birth_year)
        .bind(&person.url)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(Some(person))
    }

    /// Returns false when no row matched.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM people WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
