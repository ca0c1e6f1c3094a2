//! Research unit entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// The kind of a research unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "unit_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// An ordinary research unit.
    Research,
    /// A core facility platform. Platforms additionally receive a
    /// coordinator profile during synchronization.
    Platform,
}

impl UnitKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Platform => "platform",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An organizational unit (research group or platform).
///
/// Units are created and maintained outside the authorization layer;
/// synchronization reads them and binds profile groups to them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResearchUnit {
    /// Unique unit identifier.
    pub id: Uuid,
    /// Display name, e.g. "Imaging".
    pub name: String,
    /// Unit kind.
    pub kind: UnitKind,
    /// The designated unit lead, if one is assigned.
    pub lead_person_id: Option<Uuid>,
    /// When the unit was created.
    pub created_at: DateTime<Utc>,
}

impl ResearchUnit {
    /// Whether this unit is a core facility platform.
    pub fn is_platform(&self) -> bool {
        self.kind == UnitKind::Platform
    }
}
