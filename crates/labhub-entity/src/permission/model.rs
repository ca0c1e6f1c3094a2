//! Permission group and ranked group link entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The maximum stored length of a permission group name.
///
/// Derived group names that exceed this limit go through the registered
/// abbreviation table before being rejected as a configuration error.
pub const GROUP_NAME_MAX_LEN: usize = 150;

/// A named permission group holding a set of capabilities and a set of
/// member users.
///
/// Profile groups are created by the synchronizer; administrators may also
/// create ad hoc groups. Groups are never deleted by the authorization
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PermissionGroup {
    /// Unique group identifier.
    pub id: Uuid,
    /// Unique group name, e.g. "PROFILE: Group Admin: Imaging".
    pub name: String,
    /// When the group was created.
    pub created_at: DateTime<Utc>,
}

/// The association between a permission group and a research unit,
/// carrying a numeric rank.
///
/// `unit_id` is optional: a link with no unit represents a permission
/// group not tied to any organizational scope. Rank is informational and
/// never used to short-circuit authorization decisions.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RankedGroupLink {
    /// Unique link identifier.
    pub id: Uuid,
    /// The permission group.
    pub group_id: Uuid,
    /// The research unit this link scopes, if any.
    pub unit_id: Option<Uuid>,
    /// Numeric rank; higher means higher authority among links for the
    /// same unit.
    pub rank: i16,
}
