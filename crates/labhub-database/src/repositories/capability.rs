//! Capability catalog repository.

use sqlx::PgPool;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::permission::{Capability, ResourceKind};

/// Read-only repository over the capability reference table.
#[derive(Debug, Clone)]
pub struct CapabilityRepository {
    pool: PgPool,
}

impl CapabilityRepository {
    /// Create a new capability repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a capability by resource kind and fully qualified codename.
    pub async fn find(
        &self,
        resource_kind: ResourceKind,
        codename: &str,
    ) -> AppResult<Option<Capability>> {
        sqlx::query_as::<_, Capability>(
            "SELECT * FROM capabilities WHERE resource_kind = $1 AND codename = $2",
        )
        .bind(resource_kind)
        .bind(codename)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find capability", e))
    }

    /// Find all capabilities registered for a resource kind.
    ///
    /// Rows come back in storage order; display ordering is applied by the
    /// catalog.
    pub async fn find_by_kind(&self, resource_kind: ResourceKind) -> AppResult<Vec<Capability>> {
        sqlx::query_as::<_, Capability>("SELECT * FROM capabilities WHERE resource_kind = $1")
            .bind(resource_kind)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list capabilities", e)
            })
    }
}
