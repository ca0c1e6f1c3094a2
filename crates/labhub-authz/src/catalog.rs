//! Capability catalog — resolution and display ordering over the
//! capability reference table.

use std::sync::Arc;

use labhub_core::error::AppError;
use labhub_core::result::AppResult;
use labhub_database::repositories::capability::CapabilityRepository;
use labhub_entity::permission::{Capability, ResourceKind, StandardAction};

/// Expand a bare action name into its resource-qualified codename.
///
/// The four standard actions become `{action}_{resource_kind}`; custom
/// codenames such as `app_access_orders` pass through unchanged.
pub fn qualify_codename(resource_kind: ResourceKind, action: &str) -> String {
    match StandardAction::parse(action) {
        Some(standard) => format!("{}_{}", standard.as_str(), resource_kind.as_str()),
        None => action.to_string(),
    }
}

/// Read-only access to the set of registered capabilities.
#[derive(Debug, Clone)]
pub struct CapabilityCatalog {
    /// Capability repository.
    repo: Arc<CapabilityRepository>,
}

impl CapabilityCatalog {
    /// Create a new capability catalog.
    pub fn new(repo: Arc<CapabilityRepository>) -> Self {
        Self { repo }
    }

    /// Resolve an action on a resource kind to its registered capability.
    ///
    /// Returns a not-found error when no such capability exists for the
    /// resource kind.
    pub async fn resolve(
        &self,
        resource_kind: ResourceKind,
        action: &str,
    ) -> AppResult<Capability> {
        let codename = qualify_codename(resource_kind, action);
        self.repo
            .find(resource_kind, &codename)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "No capability '{codename}' registered for resource kind '{resource_kind}'"
                ))
            })
    }

    /// All capabilities for a resource kind, in display order: the four
    /// standard actions first (view, add, change, delete), then custom
    /// capabilities alphabetically by display name.
    pub async fn list_by_kind(&self, resource_kind: ResourceKind) -> AppResult<Vec<Capability>> {
        let capabilities = self.repo.find_by_kind(resource_kind).await?;
        Ok(order_for_display(resource_kind, capabilities))
    }
}

/// Apply the capability display ordering contract.
fn order_for_display(resource_kind: ResourceKind, capabilities: Vec<Capability>) -> Vec<Capability> {
    let mut remaining = capabilities;
    let mut ordered = Vec::with_capacity(remaining.len());

    for action in StandardAction::ALL {
        let codename = qualify_codename(resource_kind, action.as_str());
        if let Some(pos) = remaining.iter().position(|c| c.codename == codename) {
            ordered.push(remaining.remove(pos));
        }
    }

    remaining.sort_by(|a, b| a.name.cmp(&b.name));
    ordered.extend(remaining);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn cap(kind: ResourceKind, codename: &str, name: &str) -> Capability {
        Capability {
            id: Uuid::new_v4(),
            resource_kind: kind,
            codename: codename.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_qualify_codename_expands_standard_actions() {
        assert_eq!(
            qualify_codename(ResourceKind::Order, "view"),
            "view_order"
        );
        assert_eq!(
            qualify_codename(ResourceKind::ContractProposal, "delete"),
            "delete_contractproposal"
        );
    }

    #[test]
    fn test_qualify_codename_passes_custom_through() {
        assert_eq!(
            qualify_codename(ResourceKind::Order, "app_access_orders"),
            "app_access_orders"
        );
    }

    #[test]
    fn test_display_order_standard_first_then_custom_by_name() {
        let caps = vec![
            cap(ResourceKind::Order, "app_access_orders", "Can access the orders app"),
            cap(ResourceKind::Order, "delete_order", "Can delete order"),
            cap(ResourceKind::Order, "view_order", "Can view order"),
            cap(ResourceKind::Order, "approve_order", "Can approve order"),
            cap(ResourceKind::Order, "add_order", "Can add order"),
            cap(ResourceKind::Order, "change_order", "Can change order"),
        ];

        let ordered = order_for_display(ResourceKind::Order, caps);
        let codenames: Vec<&str> = ordered.iter().map(|c| c.codename.as_str()).collect();
        assert_eq!(
            codenames,
            [
                "view_order",
                "add_order",
                "change_order",
                "delete_order",
                "app_access_orders",
                "approve_order",
            ]
        );
    }
}
