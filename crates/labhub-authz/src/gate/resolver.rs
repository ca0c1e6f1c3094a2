//! Per-request document access resolution.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use labhub_core::config::AuthzConfig;
use labhub_core::result::AppResult;
use labhub_database::repositories::contract::ContractFileRepository;
use labhub_database::repositories::group::PermissionGroupRepository;
use labhub_database::repositories::order::OrderFileRepository;
use labhub_database::repositories::person::PersonRepository;
use labhub_entity::user::User;

use super::decision::{AccessDecision, DocumentSet, is_public_path};

/// Decides whether a user may read a document path.
///
/// Stateless per request: every decision re-reads memberships and
/// ownership relations from storage.
#[derive(Debug, Clone)]
pub struct DocumentAccessGate {
    /// Public prefixes and special group names.
    config: AuthzConfig,
    /// Permission group repository (membership checks).
    groups: Arc<PermissionGroupRepository>,
    /// Person repository (user → person link, CV locations).
    persons: Arc<PersonRepository>,
    /// Contract file repository.
    contract_files: Arc<ContractFileRepository>,
    /// Order file repository.
    order_files: Arc<OrderFileRepository>,
}

impl DocumentAccessGate {
    /// Create a new document access gate.
    pub fn new(
        config: AuthzConfig,
        groups: Arc<PermissionGroupRepository>,
        persons: Arc<PersonRepository>,
        contract_files: Arc<ContractFileRepository>,
        order_files: Arc<OrderFileRepository>,
    ) -> Self {
        Self {
            config,
            groups,
            persons,
            contract_files,
            order_files,
        }
    }

    /// Decide whether the user may read the document at `path`.
    ///
    /// Public prefixes are granted to any authenticated user; superusers
    /// bypass gating entirely; everyone else is checked against their
    /// accessible document set.
    pub async fn decide(&self, user: &User, path: &str) -> AppResult<AccessDecision> {
        if is_public_path(path, &self.config.public_prefixes) {
            return Ok(AccessDecision::Grant);
        }

        if user.is_superuser {
            return Ok(AccessDecision::Grant);
        }

        let documents = self.accessible_documents(user).await?;

        let decision = if documents.contains(path) {
            AccessDecision::Grant
        } else {
            AccessDecision::Deny
        };

        debug!(
            user = %user.username,
            path,
            granted = decision.is_granted(),
            "Document access decision"
        );

        Ok(decision)
    }

    /// The set of document paths the user can reach.
    ///
    /// Human-resources members get the wildcard set. A user without a
    /// linked person record gets the empty set: gating fails closed.
    /// Lookup failures for optional per-domain data contribute nothing to
    /// the union.
    pub async fn accessible_documents(&self, user: &User) -> AppResult<DocumentSet> {
        if self
            .groups
            .user_in_group_named(user.id, &self.config.human_resources_group)
            .await?
        {
            return Ok(DocumentSet::All);
        }

        let Some(person) = self.persons.find_by_user(user.id).await? else {
            return Ok(DocumentSet::empty());
        };

        let mut paths: HashSet<String> = self
            .contract_files
            .find_for_person(person.id)
            .await?
            .into_iter()
            .map(|file| file.path)
            .collect();

        // The CV can live both in the private-info record and on the
        // person record; both locations are accessible to the person.
        let private_cv = self
            .persons
            .find_private_info(person.id)
            .await?
            .and_then(|info| info.cv_path);
        for cv in [private_cv, person.cv_path] {
            if let Some(cv) = cv {
                if !cv.is_empty() {
                    paths.insert(cv);
                }
            }
        }

        let order_files = if self
            .groups
            .user_in_group_named(user.id, &self.config.all_orders_group)
            .await?
        {
            self.order_files.find_all().await?
        } else {
            self.order_files.find_created_by(user.id).await?
        };
        paths.extend(order_files.into_iter().map(|file| file.path));

        Ok(DocumentSet::Paths(paths))
    }
}
