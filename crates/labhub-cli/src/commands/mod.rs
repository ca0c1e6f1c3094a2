//! CLI command definitions and dispatch.

pub mod access;
pub mod migrate;
pub mod sync;
pub mod units;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use labhub_core::error::AppError;

/// LabHub — Research Organization Management Platform
#[derive(Debug, Parser)]
#[command(name = "labhub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/<env>.toml)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Synchronize profile groups with research units
    Sync(sync::SyncArgs),
    /// List research units and their IDs
    Units(units::UnitsArgs),
    /// Inspect user access
    Access(access::AccessArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Sync(args) => sync::execute(args, &self.env, self.format).await,
            Commands::Units(args) => units::execute(args, &self.env, self.format).await,
            Commands::Access(args) => access::execute(args, &self.env, self.format).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
        }
    }
}

/// Helper: load configuration for the selected environment
pub fn load_config(env: &str) -> Result<labhub_core::config::AppConfig, AppError> {
    labhub_core::config::AppConfig::load(env)
}

/// Helper: create database pool from config
pub async fn create_db_pool(
    config: &labhub_core::config::AppConfig,
) -> Result<sqlx::PgPool, AppError> {
    let pool = labhub_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
