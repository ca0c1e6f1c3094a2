//! Permission group repository: group identity, memberships, and
//! capability sets.

use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::permission::PermissionGroup;

/// Repository for permission groups, their members, and their
/// capability sets.
#[derive(Debug, Clone)]
pub struct PermissionGroupRepository {
    pool: PgPool,
}

impl PermissionGroupRepository {
    /// Create a new permission group repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a group by its exact name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<PermissionGroup>> {
        sqlx::query_as::<_, PermissionGroup>("SELECT * FROM permission_groups WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find group by name", e)
            })
    }

    /// Find a group by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<PermissionGroup>> {
        sqlx::query_as::<_, PermissionGroup>("SELECT * FROM permission_groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find group by id", e)
            })
    }

    /// Get or create a group by its exact name.
    ///
    /// Returns the group and whether it was created by this call. The
    /// insert races safely with concurrent callers: on a name conflict
    /// the existing row is re-read instead of surfacing the constraint
    /// violation.
    pub async fn get_or_create(&self, name: &str) -> AppResult<(PermissionGroup, bool)> {
        let inserted = sqlx::query_as::<_, PermissionGroup>(
            "INSERT INTO permission_groups (name) VALUES ($1) \
             ON CONFLICT (name) DO NOTHING RETURNING *",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create group", e))?;

        if let Some(group) = inserted {
            return Ok((group, true));
        }

        let existing = self.find_by_name(name).await?.ok_or_else(|| {
            AppError::database(format!("Group '{name}' vanished during get-or-create"))
        })?;
        Ok((existing, false))
    }

    /// Add a user to a group. Idempotent.
    pub async fn add_member(&self, group_id: Uuid, user_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO user_groups (user_id, group_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(group_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add group member", e))?;
        Ok(())
    }

    /// Whether the user belongs to a group with the given exact name.
    pub async fn user_in_group_named(&self, user_id: Uuid, name: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_groups ug \
             JOIN permission_groups g ON g.id = ug.group_id \
             WHERE ug.user_id = $1 AND g.name = $2",
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check group membership", e)
        })?;
        Ok(count > 0)
    }

    /// Return the IDs of the capabilities currently held by a group.
    pub async fn capability_ids(&self, group_id: Uuid) -> AppResult<HashSet<Uuid>> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT capability_id FROM group_capabilities WHERE group_id = $1",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list group capabilities", e)
        })?;
        Ok(ids.into_iter().collect())
    }

    /// Replace the group's capability set with exactly the given
    /// capabilities.
    ///
    /// Runs in a transaction so readers never observe a half-replaced set.
    pub async fn replace_capabilities(
        &self,
        group_id: Uuid,
        capability_ids: &[Uuid],
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM group_capabilities WHERE group_id = $1")
            .bind(group_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear group capabilities", e)
            })?;

        sqlx::query(
            "INSERT INTO group_capabilities (group_id, capability_id) \
             SELECT $1, id FROM capabilities WHERE id = ANY($2)",
        )
        .bind(group_id)
        .bind(capability_ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to assign group capabilities", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit capability replacement", e)
        })?;
        Ok(())
    }
}
