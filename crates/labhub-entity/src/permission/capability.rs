//! Capability catalog entities.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The kinds of protected resources known to the authorization layer.
///
/// This is a closed enumeration; adding a kind requires a migration that
/// seeds its capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resource_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A person record.
    Person,
    /// An employment contract.
    Contract,
    /// A contract proposal.
    ContractProposal,
    /// A purchase order.
    Order,
    /// A scientific publication.
    Publication,
}

impl ResourceKind {
    /// All resource kinds, in catalog order.
    pub const ALL: [ResourceKind; 5] = [
        Self::Person,
        Self::Contract,
        Self::ContractProposal,
        Self::Order,
        Self::Publication,
    ];

    /// Return the kind as its lowercase storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Contract => "contract",
            Self::ContractProposal => "contractproposal",
            Self::Order => "order",
            Self::Publication => "publication",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = labhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "person" => Ok(Self::Person),
            "contract" => Ok(Self::Contract),
            "contractproposal" => Ok(Self::ContractProposal),
            "order" => Ok(Self::Order),
            "publication" => Ok(Self::Publication),
            _ => Err(labhub_core::AppError::validation(format!(
                "Invalid resource kind: '{s}'"
            ))),
        }
    }
}

/// The four standard actions every resource kind carries.
///
/// The declaration order (view, add, change, delete) is a presentation
/// contract: capability listings show standard actions in exactly this
/// order, before any custom capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardAction {
    /// Read access.
    View,
    /// Create access.
    Add,
    /// Update access.
    Change,
    /// Delete access.
    Delete,
}

impl StandardAction {
    /// All standard actions in presentation order.
    pub const ALL: [StandardAction; 4] = [Self::View, Self::Add, Self::Change, Self::Delete];

    /// Return the action as its lowercase codename stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Add => "add",
            Self::Change => "change",
            Self::Delete => "delete",
        }
    }

    /// Parse a bare action name, returning `None` for custom codenames.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "view" => Some(Self::View),
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for StandardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An atomic capability: one action on one resource kind.
///
/// Immutable reference data; rows are seeded by migrations and never
/// mutated by the authorization layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Capability {
    /// Unique capability identifier.
    pub id: Uuid,
    /// The resource kind this capability applies to.
    pub resource_kind: ResourceKind,
    /// Resource-qualified codename, e.g. `view_contract` or
    /// `app_access_orders`.
    pub codename: String,
    /// Human-readable display name, e.g. "Can view contract".
    pub name: String,
}

impl Capability {
    /// Whether this capability is one of the four standard actions for
    /// its resource kind.
    pub fn is_standard(&self) -> bool {
        StandardAction::ALL
            .iter()
            .any(|a| self.codename == format!("{}_{}", a.as_str(), self.resource_kind.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_kind_round_trip() {
        assert_eq!(
            "contractproposal".parse::<ResourceKind>().unwrap(),
            ResourceKind::ContractProposal
        );
        assert_eq!(ResourceKind::Order.as_str(), "order");
        assert!("budget".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_standard_action_order() {
        let names: Vec<&str> = StandardAction::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, ["view", "add", "change", "delete"]);
    }

    #[test]
    fn test_is_standard() {
        let cap = Capability {
            id: Uuid::new_v4(),
            resource_kind: ResourceKind::Order,
            codename: "view_order".to_string(),
            name: "Can view order".to_string(),
        };
        assert!(cap.is_standard());

        let custom = Capability {
            id: Uuid::new_v4(),
            resource_kind: ResourceKind::Order,
            codename: "app_access_orders".to_string(),
            name: "Can access the orders app".to_string(),
        };
        assert!(!custom.is_standard());
    }
}
