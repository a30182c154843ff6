//! Favorite rows: a user's bookmarks of people or planets.
//!
//! Column names come from [`FavoriteKind`], a closed enum; values are always
//! bound as parameters.

use crate::error::AppError;
use crate::models::{Favorite, FavoriteKind};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, user_id, planet_id, people_id";

pub struct FavoriteService;

impl FavoriteService {
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<Favorite>, AppError> {
        let rows = sqlx::query_as::<_, Favorite>(&format!(
            "SELECT {} FROM favorites WHERE user_id = ? ORDER BY id",
            COLUMNS
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// The favorite for (user, target), if any.
    pub async fn find(
        pool: &SqlitePool,
        kind: FavoriteKind,
        user_id: i64,
        target_id: i64,
    ) -> Result<Option<Favorite>, AppError> {
        let row = sqlx::query_as::<_, Favorite>(&format!(
            "SELECT {} FROM favorites WHERE user_id = ? AND {} = ?",
            COLUMNS,
            kind.column()
        ))
        .bind(user_id)
        .bind(target_id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn add(
        pool: &SqlitePool,
        kind: FavoriteKind,
        user_id: i64,
        target_id: i64,
    ) -> Result<Favorite, AppError> {
        let row = sqlx::query_as::<_, Favorite>(&format!(
            "INSERT INTO favorites (user_id, {}) VALUES (?, ?) RETURNING {}",
            kind.column(),
            COLUMNS
        ))
        .bind(user_id)
        .bind(target_id)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Returns false when no favorite matched the (user, target) pair.
    pub async fn remove(
        pool: &SqlitePool,
        kind: FavoriteKind,
        user_id: i64,
        target_id: i64,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(&format!(
            "DELETE FROM favorites WHERE user_id = ? AND {} = ?",
            kind.column()
        ))
        .bind(user_id)
        .bind(target_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
