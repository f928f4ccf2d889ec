use std::io::Write;

use tracing_subscriber::EnvFilter;

use crate::application::load_records;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::LoaderConfig;
use crate::infrastructure::workbook::{FileGridSource, GridSource};

/// Load the configured roster and print its records as JSON on stdout
pub fn run() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = LoaderConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    tracing::info!(
        workbook = %config.workbook_path.display(),
        sheet = %config.sheet,
        strict = config.strict_no_duplicates,
        "loading roster"
    );

    let grid = FileGridSource.load_grid(&config.workbook_path, &config.sheet)?;
    let report = load_records(&grid, &config.load_options())?;

    tracing::info!(
        records = report.records.len(),
        skipped = report.diagnostics.len(),
        "roster loaded"
    );

    let json = serde_json::to_string_pretty(&report.records)
        .map_err(|e| AppError::Output(format!("failed to serialize records: {}", e)))?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json).map_err(|e| AppError::Output(e.to_string()))?;

    Ok(())
}
