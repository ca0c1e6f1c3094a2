//! Ranked group link repository.

use sqlx::PgPool;
use uuid::Uuid;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::permission::RankedGroupLink;

/// Repository for the (group, unit, rank) association table.
#[derive(Debug, Clone)]
pub struct RankedLinkRepository {
    pool: PgPool,
}

impl RankedLinkRepository {
    /// Create a new ranked link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a link. The synchronizer calls this exactly once per
    /// (group, unit) pair; the unique constraint backs the invariant.
    pub async fn create(
        &self,
        group_id: Uuid,
        unit_id: Option<Uuid>,
        rank: i16,
    ) -> AppResult<RankedGroupLink> {
        sqlx::query_as::<_, RankedGroupLink>(
            "INSERT INTO ranked_group_links (group_id, unit_id, rank) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(group_id)
        .bind(unit_id)
        .bind(rank)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create ranked link", e))
    }

    /// All links, in the canonical (group, unit, rank) ascending order.
    pub async fn find_all(&self) -> AppResult<Vec<RankedGroupLink>> {
        sqlx::query_as::<_, RankedGroupLink>(
            "SELECT * FROM ranked_group_links ORDER BY group_id, unit_id, rank",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list ranked links", e))
    }

    /// All links scoped to one unit.
    pub async fn find_for_unit(&self, unit_id: Uuid) -> AppResult<Vec<RankedGroupLink>> {
        sqlx::query_as::<_, RankedGroupLink>(
            "SELECT * FROM ranked_group_links WHERE unit_id = $1 \
             ORDER BY group_id, unit_id, rank",
        )
        .bind(unit_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list links for unit", e)
        })
    }

    /// Links whose group both counts the user as a member and holds at
    /// least one of the given capabilities.
    ///
    /// This is the relational join behind authorization filtering; rank
    /// plays no part in the match.
    pub async fn find_granting_user(
        &self,
        user_id: Uuid,
        capability_ids: &[Uuid],
    ) -> AppResult<Vec<RankedGroupLink>> {
        sqlx::query_as::<_, RankedGroupLink>(
            "SELECT DISTINCT l.* FROM ranked_group_links l \
             JOIN user_groups ug ON ug.group_id = l.group_id \
             JOIN group_capabilities gc ON gc.group_id = l.group_id \
             WHERE ug.user_id = $1 AND gc.capability_id = ANY($2) \
             ORDER BY l.group_id, l.unit_id, l.rank",
        )
        .bind(user_id)
        .bind(capability_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find granting links", e)
        })
    }
}
