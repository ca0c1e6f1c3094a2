//! User access inspection CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use sqlx::PgPool;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use labhub_authz::catalog::CapabilityCatalog;
use labhub_authz::filter::AuthorizationFilter;
use labhub_authz::gate::{DocumentAccessGate, DocumentSet};
use labhub_core::error::AppError;
use labhub_database::repositories::capability::CapabilityRepository;
use labhub_database::repositories::contract::ContractFileRepository;
use labhub_database::repositories::group::PermissionGroupRepository;
use labhub_database::repositories::order::OrderFileRepository;
use labhub_database::repositories::person::PersonRepository;
use labhub_database::repositories::ranked_link::RankedLinkRepository;
use labhub_database::repositories::user::UserRepository;
use labhub_service::UserAccessService;
use labhub_service::access::UserAccessSummary;

/// Arguments for access commands
#[derive(Debug, Args)]
pub struct AccessArgs {
    /// Access subcommand
    #[command(subcommand)]
    pub command: AccessCommand,
}

/// Access subcommands
#[derive(Debug, Subcommand)]
pub enum AccessCommand {
    /// Report granting groups and accessible documents per user
    Report {
        /// Restrict the report to one username
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Check whether a user may read a document path
    Check {
        /// Username
        username: String,
        /// Document path relative to the media root
        path: String,
    },
}

/// Grant display row for table output
#[derive(Debug, Serialize, Tabled)]
struct GrantDisplayRow {
    /// Username
    user: String,
    /// Resource kind
    resource: String,
    /// Granting group
    group: String,
    /// Link rank
    rank: i16,
}

/// Execute access commands
pub async fn execute(args: &AccessArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    let users = Arc::new(UserRepository::new(pool.clone()));
    let gate = build_gate(&config, &pool);
    let service = UserAccessService::new(
        users.clone(),
        Arc::new(PermissionGroupRepository::new(pool.clone())),
        Arc::new(build_filter(&pool)),
        Arc::new(gate.clone()),
    );

    match &args.command {
        AccessCommand::Report { username } => {
            let summaries = match username {
                Some(username) => {
                    let user = users.find_by_username(username).await?.ok_or_else(|| {
                        AppError::not_found(format!("User '{username}' not found"))
                    })?;
                    vec![service.report_for(&user).await?]
                }
                None => service.report_all().await?,
            };
            print_summaries(&summaries, format);
        }
        AccessCommand::Check { username, path } => {
            let user = users
                .find_by_username(username)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

            let decision = gate.decide(&user, path).await?;
            if decision.is_granted() {
                output::print_success(&format!("'{username}' may read '{path}'"));
            } else {
                output::print_error(&format!("'{username}' may not read '{path}'"));
                std::process::exit(2);
            }
        }
    }

    Ok(())
}

fn build_filter(pool: &PgPool) -> AuthorizationFilter {
    AuthorizationFilter::new(
        Arc::new(RankedLinkRepository::new(pool.clone())),
        Arc::new(CapabilityCatalog::new(Arc::new(CapabilityRepository::new(
            pool.clone(),
        )))),
    )
}

fn build_gate(config: &labhub_core::config::AppConfig, pool: &PgPool) -> DocumentAccessGate {
    DocumentAccessGate::new(
        config.authz.clone(),
        Arc::new(PermissionGroupRepository::new(pool.clone())),
        Arc::new(PersonRepository::new(pool.clone())),
        Arc::new(ContractFileRepository::new(pool.clone())),
        Arc::new(OrderFileRepository::new(pool.clone())),
    )
}

fn print_summaries(summaries: &[UserAccessSummary], format: OutputFormat) {
    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(summaries).unwrap_or_else(|_| "[]".to_string());
        println!("{}", json);
        return;
    }

    let rows: Vec<GrantDisplayRow> = summaries
        .iter()
        .flat_map(|s| {
            s.grants.iter().map(move |g| GrantDisplayRow {
                user: s.username.clone(),
                resource: g.resource_kind.to_string(),
                group: g.group_name.clone(),
                rank: g.rank,
            })
        })
        .collect();
    output::print_list(&rows, format);

    for summary in summaries {
        match &summary.documents {
            DocumentSet::All => {
                output::print_warning(&format!("{}: all documents accessible", summary.username));
            }
            DocumentSet::Paths(paths) => {
                println!("{}: {} accessible document(s)", summary.username, paths.len());
                let mut sorted: Vec<&String> = paths.iter().collect();
                sorted.sort();
                for path in sorted {
                    println!("  {path}");
                }
            }
        }
    }
}
