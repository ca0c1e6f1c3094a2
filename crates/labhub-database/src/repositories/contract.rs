//! Contract file repository.

use sqlx::PgPool;
use uuid::Uuid;

use labhub_core::error::{AppError, ErrorKind};
use labhub_core::result::AppResult;
use labhub_entity::hr::ContractFile;

/// Repository over contract attachments.
#[derive(Debug, Clone)]
pub struct ContractFileRepository {
    pool: PgPool,
}

impl ContractFileRepository {
    /// Create a new contract file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Files attached to contracts where the person is the contract
    /// subject or the assigned supervisor.
    pub async fn find_for_person(&self, person_id: Uuid) -> AppResult<Vec<ContractFile>> {
        sqlx::query_as::<_, ContractFile>(
            "SELECT cf.* FROM contract_files cf \
             JOIN contracts c ON c.id = cf.contract_id \
             WHERE c.person_id = $1 OR c.supervisor_id = $1",
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list contract files", e)
        })
    }
}
