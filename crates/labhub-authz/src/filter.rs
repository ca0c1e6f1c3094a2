//! Group-scoped query filtering.
//!
//! The filter computes which ranked group links entitle a user to act on
//! a resource kind, and restricts caller-supplied rows to those owned by
//! an entitled group. It is read-only: an empty result means "no access",
//! never an error.

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use labhub_core::result::AppResult;
use labhub_database::repositories::ranked_link::RankedLinkRepository;
use labhub_entity::permission::{RankedGroupLink, ResourceKind};

use crate::catalog::CapabilityCatalog;

/// A row that is owned by a permission group.
///
/// The association between a row and its owning group is resource-kind
/// specific; implementing this trait is how a caller supplies it.
pub trait GroupScoped {
    /// The owning permission group, if the row has one.
    fn owning_group(&self) -> Option<Uuid>;
}

impl GroupScoped for RankedGroupLink {
    fn owning_group(&self) -> Option<Uuid> {
        Some(self.group_id)
    }
}

/// Computes a user's entitled ranked links and scopes row collections to
/// them.
#[derive(Debug, Clone)]
pub struct AuthorizationFilter {
    /// Ranked link repository.
    links: Arc<RankedLinkRepository>,
    /// Capability catalog.
    catalog: Arc<CapabilityCatalog>,
}

impl AuthorizationFilter {
    /// Create a new authorization filter.
    pub fn new(links: Arc<RankedLinkRepository>, catalog: Arc<CapabilityCatalog>) -> Self {
        Self { links, catalog }
    }

    /// The ranked links whose group both counts the user as a member and
    /// holds at least one of the requested actions on the resource kind.
    ///
    /// Rank is carried for reporting; it never decides the match.
    pub async fn granting_links(
        &self,
        user_id: Uuid,
        resource_kind: ResourceKind,
        actions: &[&str],
    ) -> AppResult<Vec<RankedGroupLink>> {
        let mut capability_ids = Vec::with_capacity(actions.len());
        for action in actions {
            let capability = self.catalog.resolve(resource_kind, action).await?;
            capability_ids.push(capability.id);
        }

        if capability_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.links.find_granting_user(user_id, &capability_ids).await
    }

    /// The IDs of permission groups entitling the user, for SQL-side
    /// scoping (`owning_group_id = ANY(...)`).
    pub async fn permitted_groups(
        &self,
        user_id: Uuid,
        resource_kind: ResourceKind,
        actions: &[&str],
    ) -> AppResult<HashSet<Uuid>> {
        let links = self.granting_links(user_id, resource_kind, actions).await?;
        Ok(links.into_iter().map(|l| l.group_id).collect())
    }

    /// Restrict `rows` to those owned by a group entitling the user.
    ///
    /// The result is always a subset of `rows`, and empty when the user
    /// holds no matching capability.
    pub async fn scope<T: GroupScoped>(
        &self,
        user_id: Uuid,
        resource_kind: ResourceKind,
        actions: &[&str],
        rows: Vec<T>,
    ) -> AppResult<Vec<T>> {
        let permitted = self
            .permitted_groups(user_id, resource_kind, actions)
            .await?;
        Ok(scope_rows(rows, &permitted))
    }
}

/// Keep only rows whose owning group appears in the permitted set.
fn scope_rows<T: GroupScoped>(rows: Vec<T>, permitted: &HashSet<Uuid>) -> Vec<T> {
    rows.into_iter()
        .filter(|row| {
            row.owning_group()
                .map(|group| permitted.contains(&group))
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        group: Option<Uuid>,
        label: &'static str,
    }

    impl GroupScoped for Row {
        fn owning_group(&self) -> Option<Uuid> {
            self.group
        }
    }

    #[test]
    fn test_scope_rows_keeps_only_permitted_groups() {
        let allowed = Uuid::new_v4();
        let other = Uuid::new_v4();
        let permitted: HashSet<Uuid> = [allowed].into_iter().collect();

        let rows = vec![
            Row { group: Some(allowed), label: "mine" },
            Row { group: Some(other), label: "theirs" },
            Row { group: None, label: "orphan" },
        ];

        let scoped = scope_rows(rows, &permitted);
        let labels: Vec<&str> = scoped.iter().map(|r| r.label).collect();
        assert_eq!(labels, ["mine"]);
    }

    #[test]
    fn test_scope_rows_empty_permitted_set_yields_no_rows() {
        let rows = vec![Row { group: Some(Uuid::new_v4()), label: "any" }];
        let scoped = scope_rows(rows, &HashSet::new());
        assert!(scoped.is_empty());
    }
}
