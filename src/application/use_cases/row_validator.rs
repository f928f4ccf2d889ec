// ============================================================
// ROW VALIDATOR
// ============================================================
// Coerce and normalize one raw row into a candidate record

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::diagnostic::{Diagnostic, DiagnosticKind};
use crate::domain::grid::{cell_at, Cell};
use crate::domain::record::{CandidateRecord, ColumnMap};

static WHITESPACE_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Outcome of validating a single row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// All three resolved cells are absent
    Blank,

    Rejected(Diagnostic),

    Accepted(CandidateRecord),
}

/// Per-row validation against a resolved column map
pub struct RowValidator {
    columns: ColumnMap,
}

impl RowValidator {
    pub fn new(columns: ColumnMap) -> Self {
        Self { columns }
    }

    /// Validate one row. `row_number` is the 1-based data row number, used for diagnostics.
    pub fn validate(&self, row: &[Cell], row_number: usize) -> RowOutcome {
        let id_cell = cell_at(row, self.columns.identifier);
        let name_cell = cell_at(row, self.columns.name);
        let tags_cell = cell_at(row, self.columns.tags);

        if id_cell.is_blank() && name_cell.is_blank() && tags_cell.is_blank() {
            return RowOutcome::Blank;
        }

        let reject = |kind| RowOutcome::Rejected(Diagnostic::new(row_number, kind));

        let Some(identifier) = parse_identifier(id_cell) else {
            return reject(DiagnosticKind::InvalidIdentifier {
                raw: id_cell.to_text(),
            });
        };

        let name = name_cell.to_clean_text();
        if name.is_empty() {
            return reject(DiagnosticKind::EmptyName);
        }

        let tags = parse_tags(&tags_cell.to_text());
        if tags.is_empty() {
            return reject(DiagnosticKind::EmptyTags);
        }

        RowOutcome::Accepted(CandidateRecord {
            row_number,
            identifier,
            name,
            tags,
        })
    }
}

/// Finite, strictly positive, integral
pub fn parse_identifier(cell: &Cell) -> Option<u64> {
    let value = cell.to_number();
    if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return None;
    }
    Some(value as u64)
}

/// Trim, lowercase and hyphenate internal whitespace
pub fn normalize_tag(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    WHITESPACE_RUN_PATTERN.replace_all(&lowered, "-").into_owned()
}

/// Split a comma-separated tag list. Empty pieces are dropped and repeats
/// keep their first position.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(normalize_tag) {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
