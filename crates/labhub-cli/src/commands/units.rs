//! Research unit listing CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use labhub_core::error::AppError;
use labhub_database::repositories::unit::ResearchUnitRepository;

/// Arguments for the units command
#[derive(Debug, Args)]
pub struct UnitsArgs {}

/// Unit display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UnitRow {
    /// Unit ID
    id: String,
    /// Unit name
    name: String,
    /// Unit kind
    kind: String,
}

/// Execute the units command
pub async fn execute(_args: &UnitsArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    let units = ResearchUnitRepository::new(pool).find_all().await?;

    let rows: Vec<UnitRow> = units
        .iter()
        .map(|u| UnitRow {
            id: u.id.to_string(),
            name: u.name.clone(),
            kind: u.kind.to_string(),
        })
        .collect();
    output::print_list(&rows, format);

    Ok(())
}
