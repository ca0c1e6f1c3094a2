//! Database migration CLI commands.

use clap::{Args, Subcommand};
use sqlx::PgPool;

use crate::output;
use labhub_core::error::{AppError, ErrorKind};

/// Arguments for migration commands
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Apply all pending migrations
    Run,
    /// Show applied migrations
    Status,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            run_pending(&pool).await?;
            output::print_success("Migrations applied");
        }
        MigrateCommand::Status => {
            let rows: Vec<(i64, String)> = sqlx::query_as(
                "SELECT version, description FROM _sqlx_migrations ORDER BY version",
            )
            .fetch_all(&pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read migration status", e)
            })?;

            if rows.is_empty() {
                println!("No migrations applied.");
            } else {
                for (version, description) in rows {
                    println!("{version:>4}  {description}");
                }
            }
        }
    }

    Ok(())
}

/// Apply every migration from the workspace `migrations/` directory that
/// the database has not yet recorded.
async fn run_pending(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("../../migrations").run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })
}
