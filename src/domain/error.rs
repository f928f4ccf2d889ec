use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::record::DuplicateKey;

/// Fatal load failures. Recoverable row problems are diagnostics, not errors.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum AppError {
    #[error("Resource unavailable: {location}: {reason}")]
    ResourceUnavailable { location: String, reason: String },

    #[error("Sheet {sheet} is empty")]
    SheetEmpty { sheet: String },

    #[error("Could not identify ID/NAME/TAGS columns in header: [{}]", .header.join(" | "))]
    ColumnResolutionFailed { header: Vec<String> },

    #[error("Row {row}: duplicate {key} detected")]
    DuplicateKeyStrict { row: usize, key: DuplicateKey },

    #[error("No valid rows found, check headers and data")]
    NoValidRows,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl AppError {
    pub fn unavailable(location: impl Into<String>, reason: impl ToString) -> Self {
        AppError::ResourceUnavailable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
