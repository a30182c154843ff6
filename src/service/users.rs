//! User reads. Users have no create/update/delete surface; rows are seeded
//! out of band.

use crate::error::AppError;
use crate::models::User;
use sqlx::SqlitePool;

pub struct UserService;

impl UserService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT id, username, firstname, lastname, email FROM users ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, username, firstname, lastname, email FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }
}
