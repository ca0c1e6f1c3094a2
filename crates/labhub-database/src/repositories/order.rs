//! Order file repository.

use sqlx::PgPool;
use uuid::Uuid;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::order::OrderFile;

/// Repository over purchase order attachments.
#[derive(Debug, Clone)]
pub struct OrderFileRepository {
    pool: PgPool,
}

impl OrderFileRepository {
    /// Create a new order file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every order attachment.
    pub async fn find_all(&self) -> AppResult<Vec<OrderFile>> {
        sqlx::query_as::<_, OrderFile>("SELECT * FROM order_files")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list order files", e)
            })
    }

    /// Order attachments uploaded by the given user.
    pub async fn find_created_by(&self, user_id: Uuid) -> AppResult<Vec<OrderFile>> {
        sqlx::query_as::<_, OrderFile>("SELECT * FROM order_files WHERE created_by = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list own order files", e)
            })
    }
}
