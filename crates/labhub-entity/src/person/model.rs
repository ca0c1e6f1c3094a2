//! Person and private-info entity models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A person record in the organization directory.
///
/// A person may be linked to a user account; both directions of the link
/// are used (unit lead → account during sync, account → person during
/// document gating).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    /// Unique person identifier.
    pub id: Uuid,
    /// Full display name.
    pub full_name: String,
    /// Linked user account, if any.
    pub user_id: Option<Uuid>,
    /// Media path of the CV stored on the person record itself.
    pub cv_path: Option<String>,
}

/// Confidential per-person data held by human resources.
///
/// The CV can live both here and on [`Person`]; document gating treats
/// both locations as accessible to the person.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PrivateInfo {
    /// Unique record identifier.
    pub id: Uuid,
    /// The person this record belongs to.
    pub person_id: Uuid,
    /// Media path of the CV stored in the private-info record.
    pub cv_path: Option<String>,
}
