//! Canonical per-role capability baselines.
//!
//! Each profile role carries its own baseline table. The three tables are
//! configured independently even though they currently hold the same
//! entries; drift detection and forced resets always consult the table
//! keyed by the role being synchronized.

use std::collections::{HashMap, HashSet};

use tracing::warn;
use uuid::Uuid;

use labhub_core::error::ErrorKind;
use labhub_core::result::AppResult;
use labhub_entity::permission::{Capability, ProfileRole, ResourceKind};

use crate::catalog::CapabilityCatalog;

/// One baseline entry: an action on a resource kind.
pub type BaselineEntry = (ResourceKind, &'static str);

const COORDINATOR_BASELINE: &[BaselineEntry] = &[
    (ResourceKind::Person, "view"),
    (ResourceKind::Person, "change"),
    (ResourceKind::Person, "app_access_people"),
    (ResourceKind::ContractProposal, "add"),
    (ResourceKind::ContractProposal, "view"),
    (ResourceKind::ContractProposal, "change"),
    (ResourceKind::Contract, "view"),
    (ResourceKind::Order, "add"),
    (ResourceKind::Order, "view"),
    (ResourceKind::Order, "change"),
    (ResourceKind::Order, "delete"),
    (ResourceKind::Order, "app_access_orders"),
];

const ADMIN_BASELINE: &[BaselineEntry] = &[
    (ResourceKind::Person, "view"),
    (ResourceKind::Person, "change"),
    (ResourceKind::Person, "app_access_people"),
    (ResourceKind::ContractProposal, "add"),
    (ResourceKind::ContractProposal, "view"),
    (ResourceKind::ContractProposal, "change"),
    (ResourceKind::Contract, "view"),
    (ResourceKind::Order, "add"),
    (ResourceKind::Order, "view"),
    (ResourceKind::Order, "change"),
    (ResourceKind::Order, "delete"),
    (ResourceKind::Order, "app_access_orders"),
];

const MANAGER_BASELINE: &[BaselineEntry] = &[
    (ResourceKind::Person, "view"),
    (ResourceKind::Person, "change"),
    (ResourceKind::Person, "app_access_people"),
    (ResourceKind::ContractProposal, "add"),
    (ResourceKind::ContractProposal, "view"),
    (ResourceKind::ContractProposal, "change"),
    (ResourceKind::Contract, "view"),
    (ResourceKind::Order, "add"),
    (ResourceKind::Order, "view"),
    (ResourceKind::Order, "change"),
    (ResourceKind::Order, "delete"),
    (ResourceKind::Order, "app_access_orders"),
];

/// The configured baseline entries for a role.
pub fn baseline_entries(role: ProfileRole) -> &'static [BaselineEntry] {
    match role {
        ProfileRole::Coordinator => COORDINATOR_BASELINE,
        ProfileRole::Admin => ADMIN_BASELINE,
        ProfileRole::Manager => MANAGER_BASELINE,
    }
}

/// The per-role baselines resolved against the capability catalog.
///
/// Resolution happens once at startup. Baseline entries whose capability
/// is not registered in the deployment are skipped with a warning rather
/// than failing synchronization.
#[derive(Debug, Clone)]
pub struct ProfileBaselines {
    resolved: HashMap<ProfileRole, Vec<Capability>>,
}

impl ProfileBaselines {
    /// Resolve all baseline tables through the catalog.
    pub async fn resolve(catalog: &CapabilityCatalog) -> AppResult<Self> {
        let mut resolved = HashMap::new();

        for role in ProfileRole::ALL {
            let mut capabilities = Vec::new();
            for &(kind, action) in baseline_entries(role) {
                match catalog.resolve(kind, action).await {
                    Ok(capability) => capabilities.push(capability),
                    Err(e) if e.kind == ErrorKind::NotFound => {
                        warn!(
                            role = %role,
                            resource_kind = %kind,
                            action,
                            "Skipping baseline entry: capability not registered"
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
            resolved.insert(role, capabilities);
        }

        Ok(Self { resolved })
    }

    /// The resolved baseline capabilities for a role.
    pub fn capabilities(&self, role: ProfileRole) -> &[Capability] {
        self.resolved
            .get(&role)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The resolved baseline capability IDs for a role.
    pub fn capability_ids(&self, role: ProfileRole) -> HashSet<Uuid> {
        self.capabilities(role).iter().map(|c| c.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_baseline() {
        for role in ProfileRole::ALL {
            assert!(!baseline_entries(role).is_empty());
        }
    }

    #[test]
    fn test_baselines_grant_full_order_control() {
        for role in ProfileRole::ALL {
            let entries = baseline_entries(role);
            for action in ["add", "view", "change", "delete", "app_access_orders"] {
                assert!(
                    entries.contains(&(ResourceKind::Order, action)),
                    "{role} baseline is missing order/{action}"
                );
            }
        }
    }

    #[test]
    fn test_baselines_never_grant_person_delete() {
        for role in ProfileRole::ALL {
            assert!(!baseline_entries(role).contains(&(ResourceKind::Person, "delete")));
        }
    }
}
