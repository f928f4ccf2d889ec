// ============================================================
// COLUMN RESOLVER
// ============================================================
// Map header labels to identifier / name / tags columns

use crate::application::use_cases::header_aliases::{header_matches, normalize_header, RosterField};
use crate::domain::error::{AppError, Result};
use crate::domain::grid::Cell;
use crate::domain::record::ColumnMap;

/// Resolves the column map from a header row
pub struct ColumnResolver;

impl ColumnResolver {
    /// Resolve all three columns or fail the load.
    ///
    /// Each field takes the leftmost header containing one of its labels.
    /// Identifier and name fall back to columns 0 and 1 when nothing matches;
    /// tags has no fallback. The resolved columns must be distinct and inside
    /// the header.
    pub fn resolve(header: &[Cell]) -> Result<ColumnMap> {
        let labels: Vec<String> = header.iter().map(|c| normalize_header(&c.to_text())).collect();

        let identifier = Self::find_column(&labels, RosterField::Identifier);
        let name = Self::find_column(&labels, RosterField::Name);
        let tags = Self::find_column(&labels, RosterField::Tags);

        let (Some(identifier), Some(name), Some(tags)) = (identifier, name, tags) else {
            return Err(Self::failure(header));
        };

        let columns = ColumnMap {
            identifier,
            name,
            tags,
        };

        if !columns.is_distinct() || columns.max_column() >= header.len() {
            tracing::debug!(?columns, "resolved columns overlap or fall outside the header");
            return Err(Self::failure(header));
        }

        Ok(columns)
    }

    fn find_column(labels: &[String], field: RosterField) -> Option<usize> {
        match labels.iter().position(|label| header_matches(label, field)) {
            Some(index) => Some(index),
            None => {
                let fallback = field.fallback_column();
                if let Some(column) = fallback {
                    tracing::debug!(?field, column, "no header matched, using fallback column");
                }
                fallback
            }
        }
    }

    fn failure(header: &[Cell]) -> AppError {
        AppError::ColumnResolutionFailed {
            header: header.iter().map(Cell::to_clean_text).collect(),
        }
    }
}
