//! Person and private-info repository.

use sqlx::PgPool;
use uuid::Uuid;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::person::{Person, PrivateInfo};

/// Repository for person records and their confidential HR data.
#[derive(Debug, Clone)]
pub struct PersonRepository {
    pool: PgPool,
}

impl PersonRepository {
    /// Create a new person repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a person by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Person>> {
        sqlx::query_as::<_, Person>("SELECT * FROM people WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find person", e))
    }

    /// Find the person linked to a user account, if any.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Person>> {
        sqlx::query_as::<_, Person>("SELECT * FROM people WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find person by user", e)
            })
    }

    /// Find the private-info record for a person, if one exists.
    pub async fn find_private_info(&self, person_id: Uuid) -> AppResult<Option<PrivateInfo>> {
        sqlx::query_as::<_, PrivateInfo>("SELECT * FROM private_info WHERE person_id = $1")
            .bind(person_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find private info", e)
            })
    }
}
