//! Contract attachment entity model.
//!
//! Contract records themselves are owned by the HR application; the
//! authorization layer only reads their attachments.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A document attached to an employment contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContractFile {
    /// Unique file identifier.
    pub id: Uuid,
    /// The contract this file belongs to.
    pub contract_id: Uuid,
    /// Media path of the stored document.
    pub path: String,
}
