//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user account.
///
/// Accounts are owned by the authentication layer; the authorization
/// layer reads them and adds group memberships.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Whether this account bypasses all document gating.
    pub is_superuser: bool,
    /// Whether this account is active.
    pub is_active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
