//! Profile group synchronization service.
//!
//! Brings the profile groups and ranked links for research units into the
//! canonical baseline, binding unit leads to the admin profile and
//! reporting capability drift without overwriting administrator edits
//! unless explicitly forced.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use labhub_authz::baseline::ProfileBaselines;
use labhub_core::error::AppError;
use labhub_core::result::AppResult;
use labhub_database::repositories::group::PermissionGroupRepository;
use labhub_database::repositories::person::PersonRepository;
use labhub_database::repositories::ranked_link::RankedLinkRepository;
use labhub_database::repositories::unit::ResearchUnitRepository;
use labhub_entity::permission::{PermissionGroup, ProfileRole};
use labhub_entity::unit::ResearchUnit;

use super::naming::derive_group_name;

/// The per-profile outcome of a synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// The profile group was created by this pass.
    Created,
    /// The group's capabilities match the role baseline.
    Ok,
    /// The group's capabilities deviate from the role baseline.
    Drift,
}

impl SyncStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Ok => "ok",
            Self::Drift => "drift",
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One (unit, role) row of a synchronization report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSyncReport {
    /// The synchronized unit.
    pub unit_id: Uuid,
    /// The unit's display name.
    pub unit_name: String,
    /// The profile role.
    pub role: ProfileRole,
    /// The derived group name.
    pub group_name: String,
    /// The synchronization outcome.
    pub status: SyncStatus,
}

/// A unit whose synchronization failed. The batch continues past it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSyncFailure {
    /// The failed unit.
    pub unit_id: Uuid,
    /// The unit's display name.
    pub unit_name: String,
    /// The failure message.
    pub message: String,
}

/// The full result of a synchronization batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncReport {
    /// Per-profile outcomes.
    pub profiles: Vec<ProfileSyncReport>,
    /// Units that failed and were skipped.
    pub failures: Vec<UnitSyncFailure>,
}

/// Synchronizes profile groups and ranked links with research units.
#[derive(Debug, Clone)]
pub struct ProfileSyncService {
    /// Research unit repository.
    units: Arc<ResearchUnitRepository>,
    /// Permission group repository.
    groups: Arc<PermissionGroupRepository>,
    /// Ranked link repository.
    links: Arc<RankedLinkRepository>,
    /// Person repository (lead → account lookups).
    persons: Arc<PersonRepository>,
    /// Resolved per-role baselines.
    baselines: Arc<ProfileBaselines>,
}

impl ProfileSyncService {
    /// Create a new profile synchronization service.
    pub fn new(
        units: Arc<ResearchUnitRepository>,
        groups: Arc<PermissionGroupRepository>,
        links: Arc<RankedLinkRepository>,
        persons: Arc<PersonRepository>,
        baselines: Arc<ProfileBaselines>,
    ) -> Self {
        Self {
            units,
            groups,
            links,
            persons,
            baselines,
        }
    }

    /// Synchronize the given units, or every unit when `unit_ids` is
    /// empty.
    ///
    /// Units are processed independently: a failure on one unit is
    /// recorded in the report and the batch continues.
    pub async fn sync(&self, unit_ids: &[Uuid], force_default: bool) -> AppResult<SyncReport> {
        let units = if unit_ids.is_empty() {
            self.units.find_all().await?
        } else {
            let mut selected = Vec::with_capacity(unit_ids.len());
            for id in unit_ids {
                let unit = self
                    .units
                    .find_by_id(*id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Research unit {id} not found")))?;
                selected.push(unit);
            }
            selected
        };

        let mut report = SyncReport::default();
        for unit in units {
            match self.sync_unit(&unit, force_default).await {
                Ok(mut rows) => report.profiles.append(&mut rows),
                Err(e) => {
                    error!(unit = %unit.name, error = %e, "Unit synchronization failed");
                    report.failures.push(UnitSyncFailure {
                        unit_id: unit.id,
                        unit_name: unit.name.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }

    /// All research units, ordered by identifier, for the reporting mode.
    pub async fn list_units(&self) -> AppResult<Vec<ResearchUnit>> {
        self.units.find_all().await
    }

    async fn sync_unit(
        &self,
        unit: &ResearchUnit,
        force_default: bool,
    ) -> AppResult<Vec<ProfileSyncReport>> {
        info!(unit = %unit.name, force_default, "Synchronizing research unit");

        let mut rows = Vec::new();
        for role in applicable_roles(unit) {
            let group_name = derive_group_name(role, &unit.name)?;
            let (group, created) = self.groups.get_or_create(&group_name).await?;

            // Membership must always reflect the current unit lead, not
            // only the lead at creation time.
            if role == ProfileRole::Admin {
                self.bind_lead(unit, &group).await?;
            }

            if created {
                self.links
                    .create(group.id, Some(unit.id), role.rank())
                    .await?;
            }

            let baseline_ids = self.baselines.capability_ids(role);
            if created || force_default {
                let ids: Vec<Uuid> = baseline_ids.iter().copied().collect();
                self.groups.replace_capabilities(group.id, &ids).await?;
            }

            let actual_ids = self.groups.capability_ids(group.id).await?;
            let status = if created {
                SyncStatus::Created
            } else if has_drift(&baseline_ids, &actual_ids) {
                SyncStatus::Drift
            } else {
                SyncStatus::Ok
            };

            info!(group = %group_name, status = %status, "Profile synchronized");
            rows.push(ProfileSyncReport {
                unit_id: unit.id,
                unit_name: unit.name.clone(),
                role,
                group_name,
                status,
            });
        }
        Ok(rows)
    }

    /// Add the unit lead's linked account to the profile group. A unit
    /// without a lead, or a lead without an account, contributes nothing.
    async fn bind_lead(&self, unit: &ResearchUnit, group: &PermissionGroup) -> AppResult<()> {
        let Some(lead_person_id) = unit.lead_person_id else {
            return Ok(());
        };
        let Some(person) = self.persons.find_by_id(lead_person_id).await? else {
            return Ok(());
        };
        let Some(user_id) = person.user_id else {
            return Ok(());
        };
        self.groups.add_member(group.id, user_id).await
    }
}

/// The roles to synchronize for a unit. Coordinator profiles exist only
/// for platforms.
fn applicable_roles(unit: &ResearchUnit) -> impl Iterator<Item = ProfileRole> + '_ {
    ProfileRole::ALL
        .into_iter()
        .filter(|role| *role != ProfileRole::Coordinator || unit.is_platform())
}

/// Whether the actual capability set deviates from the baseline.
fn has_drift(baseline: &HashSet<Uuid>, actual: &HashSet<Uuid>) -> bool {
    baseline.symmetric_difference(actual).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use labhub_entity::unit::UnitKind;

    fn unit(kind: UnitKind) -> ResearchUnit {
        ResearchUnit {
            id: Uuid::new_v4(),
            name: "Imaging".to_string(),
            kind,
            lead_person_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_ordinary_units_never_get_a_coordinator_profile() {
        let roles: Vec<ProfileRole> = applicable_roles(&unit(UnitKind::Research)).collect();
        assert_eq!(roles, [ProfileRole::Admin, ProfileRole::Manager]);
    }

    #[test]
    fn test_platforms_get_all_three_profiles() {
        let roles: Vec<ProfileRole> = applicable_roles(&unit(UnitKind::Platform)).collect();
        assert_eq!(
            roles,
            [
                ProfileRole::Coordinator,
                ProfileRole::Admin,
                ProfileRole::Manager
            ]
        );
    }

    #[test]
    fn test_drift_detection() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let baseline: HashSet<Uuid> = [a, b].into_iter().collect();

        let matching: HashSet<Uuid> = [b, a].into_iter().collect();
        assert!(!has_drift(&baseline, &matching));

        let extra: HashSet<Uuid> = [a, b, Uuid::new_v4()].into_iter().collect();
        assert!(has_drift(&baseline, &extra));

        let missing: HashSet<Uuid> = [a].into_iter().collect();
        assert!(has_drift(&baseline, &missing));
    }
}
