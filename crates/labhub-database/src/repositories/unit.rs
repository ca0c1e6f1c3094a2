//! Research unit repository.

use sqlx::PgPool;
use uuid::Uuid;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::unit::ResearchUnit;

/// Read-only repository over externally maintained research units.
#[derive(Debug, Clone)]
pub struct ResearchUnitRepository {
    pool: PgPool,
}

impl ResearchUnitRepository {
    /// Create a new research unit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a unit by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ResearchUnit>> {
        sqlx::query_as::<_, ResearchUnit>("SELECT * FROM research_units WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find unit", e))
    }

    /// All units, ordered by identifier ascending.
    pub async fn find_all(&self) -> AppResult<Vec<ResearchUnit>> {
        sqlx::query_as::<_, ResearchUnit>("SELECT * FROM research_units ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list units", e))
    }
}
