//! Profile synchronization CLI command.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use crate::output::{self, OutputFormat};
use labhub_authz::baseline::ProfileBaselines;
use labhub_authz::catalog::CapabilityCatalog;
use labhub_core::error::AppError;
use labhub_database::repositories::capability::CapabilityRepository;
use labhub_database::repositories::group::PermissionGroupRepository;
use labhub_database::repositories::person::PersonRepository;
use labhub_database::repositories::ranked_link::RankedLinkRepository;
use labhub_database::repositories::unit::ResearchUnitRepository;
use labhub_service::ProfileSyncService;

/// Arguments for the sync command
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Unit IDs to synchronize (all units when omitted)
    pub unit_ids: Vec<Uuid>,

    /// Reset every profile group to its role's default capability set
    #[arg(long)]
    pub default: bool,
}

/// Sync report row for table output
#[derive(Debug, Serialize, Tabled)]
struct SyncRow {
    /// Research unit
    unit: String,
    /// Profile role
    profile: String,
    /// Derived group name
    group: String,
    /// Outcome
    status: String,
}

/// Execute the sync command
pub async fn execute(args: &SyncArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    let catalog = CapabilityCatalog::new(Arc::new(CapabilityRepository::new(pool.clone())));
    let baselines = Arc::new(ProfileBaselines::resolve(&catalog).await?);

    let service = ProfileSyncService::new(
        Arc::new(ResearchUnitRepository::new(pool.clone())),
        Arc::new(PermissionGroupRepository::new(pool.clone())),
        Arc::new(RankedLinkRepository::new(pool.clone())),
        Arc::new(PersonRepository::new(pool)),
        baselines,
    );

    let report = service.sync(&args.unit_ids, args.default).await?;

    let rows: Vec<SyncRow> = report
        .profiles
        .iter()
        .map(|p| SyncRow {
            unit: p.unit_name.clone(),
            profile: p.role.display_name().to_string(),
            group: p.group_name.clone(),
            status: p.status.to_string(),
        })
        .collect();
    output::print_list(&rows, format);

    let drifted = report
        .profiles
        .iter()
        .filter(|p| p.status == labhub_service::sync::SyncStatus::Drift)
        .count();
    if drifted > 0 {
        output::print_warning(&format!(
            "{drifted} profile group(s) deviate from their baseline; rerun with --default to reset"
        ));
    }

    for failure in &report.failures {
        output::print_error(&format!(
            "Unit '{}' failed: {}",
            failure.unit_name, failure.message
        ));
    }

    Ok(())
}
