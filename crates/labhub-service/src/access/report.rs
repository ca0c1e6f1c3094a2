//! Per-user access summary: which profile groups grant view access on
//! each resource kind, and which documents the user can reach.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use labhub_authz::filter::AuthorizationFilter;
use labhub_authz::gate::{DocumentAccessGate, DocumentSet};
use labhub_core::error::ErrorKind;
use labhub_core::result::AppResult;
use labhub_database::repositories::group::PermissionGroupRepository;
use labhub_database::repositories::user::UserRepository;
use labhub_entity::permission::ResourceKind;
use labhub_entity::user::User;

/// One granting link in a user's access summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantRow {
    /// The resource kind the grant applies to.
    pub resource_kind: ResourceKind,
    /// The granting group's name.
    pub group_name: String,
    /// The link's rank.
    pub rank: i16,
}

/// The access summary for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccessSummary {
    /// The user's ID.
    pub user_id: Uuid,
    /// The user's login name.
    pub username: String,
    /// Granting links for view access, per resource kind.
    pub grants: Vec<GrantRow>,
    /// The documents the user can reach.
    pub documents: DocumentSet,
}

/// Builds per-user access summaries. Read-only diagnostic.
#[derive(Debug, Clone)]
pub struct UserAccessService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Permission group repository (name lookups).
    groups: Arc<PermissionGroupRepository>,
    /// Authorization filter.
    filter: Arc<AuthorizationFilter>,
    /// Document access gate.
    gate: Arc<DocumentAccessGate>,
}

impl UserAccessService {
    /// Create a new user access service.
    pub fn new(
        users: Arc<UserRepository>,
        groups: Arc<PermissionGroupRepository>,
        filter: Arc<AuthorizationFilter>,
        gate: Arc<DocumentAccessGate>,
    ) -> Self {
        Self {
            users,
            groups,
            filter,
            gate,
        }
    }

    /// Build the access summary for one user.
    pub async fn report_for(&self, user: &User) -> AppResult<UserAccessSummary> {
        let mut grants = Vec::new();

        for kind in ResourceKind::ALL {
            let links = match self.filter.granting_links(user.id, kind, &["view"]).await {
                Ok(links) => links,
                // A deployment without this resource kind installed
                // contributes no grants.
                Err(e) if e.kind == ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            };

            for link in links {
                let group_name = self
                    .groups
                    .find_by_id(link.group_id)
                    .await?
                    .map(|g| g.name)
                    .unwrap_or_else(|| link.group_id.to_string());
                grants.push(GrantRow {
                    resource_kind: kind,
                    group_name,
                    rank: link.rank,
                });
            }
        }

        let documents = self.gate.accessible_documents(user).await?;

        Ok(UserAccessSummary {
            user_id: user.id,
            username: user.username.clone(),
            grants,
            documents,
        })
    }

    /// Build access summaries for every user, ordered by username.
    pub async fn report_all(&self) -> AppResult<Vec<UserAccessSummary>> {
        let users = self.users.find_all().await?;
        let mut summaries = Vec::with_capacity(users.len());
        for user in &users {
            summaries.push(self.report_for(user).await?);
        }
        Ok(summaries)
    }
}
