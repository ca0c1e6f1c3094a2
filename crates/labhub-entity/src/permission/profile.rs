//! Profile role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The roles a profile group can represent for a research unit.
///
/// Each role carries a fixed numeric rank used for reporting precedence:
/// Coordinator (300) > Admin (200) > Manager (100). Ranks are part of the
/// stored contract and must not be renumbered without a migration plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRole {
    /// Platform coordinator. Only configured for Platform units.
    Coordinator,
    /// Unit administrator. The unit lead is always bound to this profile.
    Admin,
    /// Unit manager.
    Manager,
}

impl ProfileRole {
    /// All roles in synchronization order.
    pub const ALL: [ProfileRole; 3] = [Self::Coordinator, Self::Admin, Self::Manager];

    /// Return the numeric rank attached to ranked group links for this
    /// role. Higher means higher authority in reports.
    pub fn rank(&self) -> i16 {
        match self {
            Self::Coordinator => 300,
            Self::Admin => 200,
            Self::Manager => 100,
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coordinator => "coordinator",
            Self::Admin => "admin",
            Self::Manager => "manager",
        }
    }

    /// Return the title-cased display name used in derived group names.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Coordinator => "Coordinator",
            Self::Admin => "Admin",
            Self::Manager => "Manager",
        }
    }
}

impl fmt::Display for ProfileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProfileRole {
    type Err = labhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coordinator" => Ok(Self::Coordinator),
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            _ => Err(labhub_core::AppError::validation(format!(
                "Invalid profile role: '{s}'. Expected one of: coordinator, admin, manager"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(ProfileRole::Coordinator.rank() > ProfileRole::Admin.rank());
        assert!(ProfileRole::Admin.rank() > ProfileRole::Manager.rank());
        assert_eq!(ProfileRole::Manager.rank(), 100);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "coordinator".parse::<ProfileRole>().unwrap(),
            ProfileRole::Coordinator
        );
        assert_eq!("ADMIN".parse::<ProfileRole>().unwrap(), ProfileRole::Admin);
        assert!("head".parse::<ProfileRole>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ProfileRole::Coordinator.display_name(), "Coordinator");
        assert_eq!(ProfileRole::Manager.to_string(), "manager");
    }
}
