// ============================================================
// RECORD LOADER USE CASE
// ============================================================
// Orchestrate column resolution, row validation and duplicate policy

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::application::use_cases::column_resolver::ColumnResolver;
use crate::application::use_cases::row_validator::{RowOutcome, RowValidator};
use crate::domain::diagnostic::{CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::domain::error::{AppError, Result};
use crate::domain::grid::Grid;
use crate::domain::load_options::LoadOptions;
use crate::domain::record::{CandidateRecord, DuplicateKey, RosterRecord};

/// Records of a successful load plus the rows that were skipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    pub records: Vec<RosterRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }
}

/// Seen identifiers and names for one load
#[derive(Debug, Default)]
struct DedupState {
    identifiers: HashSet<u64>,
    names: HashSet<String>,
}

impl DedupState {
    /// Identifier collisions take priority over name collisions
    fn collision(&self, candidate: &CandidateRecord) -> Option<DuplicateKey> {
        if self.identifiers.contains(&candidate.identifier) {
            Some(DuplicateKey::Identifier)
        } else if self.names.contains(&candidate.name_key()) {
            Some(DuplicateKey::Name)
        } else {
            None
        }
    }

    fn register(&mut self, candidate: &CandidateRecord) {
        self.identifiers.insert(candidate.identifier);
        self.names.insert(candidate.name_key());
    }
}

/// Turns a grid into validated, deduplicated roster records
pub struct RecordLoader {
    options: LoadOptions,
}

impl RecordLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Load records, reporting skipped rows to `sink`
    pub fn load(&self, grid: &Grid, sink: &mut dyn DiagnosticSink) -> Result<Vec<RosterRecord>> {
        if grid.has_no_content() {
            return Err(AppError::SheetEmpty {
                sheet: grid.sheet.clone(),
            });
        }

        let header_index = self.options.header_row_index;
        let header = grid.row(header_index).unwrap_or(&[]);
        let columns = ColumnResolver::resolve(header)?;
        tracing::debug!(sheet = %grid.sheet, ?columns, "resolved columns");

        let validator = RowValidator::new(columns);
        let mut state = DedupState::default();
        let mut records = Vec::new();

        for (index, row) in grid.rows.iter().enumerate().skip(header_index + 1) {
            let row_number = index - header_index;

            let candidate = match validator.validate(row, row_number) {
                RowOutcome::Blank => {
                    tracing::trace!(row = row_number, "blank row skipped");
                    continue;
                }
                RowOutcome::Rejected(diagnostic) => {
                    sink.report(diagnostic);
                    continue;
                }
                RowOutcome::Accepted(candidate) => candidate,
            };

            if let Some(key) = state.collision(&candidate) {
                if self.options.strict_no_duplicates {
                    return Err(AppError::DuplicateKeyStrict {
                        row: row_number,
                        key,
                    });
                }
                sink.report(Diagnostic::new(row_number, DiagnosticKind::Duplicate { key }));
                continue;
            }

            state.register(&candidate);
            records.push(candidate.into_record());
        }

        if records.is_empty() {
            return Err(AppError::NoValidRows);
        }

        tracing::info!(
            sheet = %grid.sheet,
            records = records.len(),
            "loaded roster records"
        );

        Ok(records)
    }
}

/// Load records and collect the diagnostics into the report
pub fn load_records(grid: &Grid, options: &LoadOptions) -> Result<LoadReport> {
    let mut sink = CollectingSink::default();
    let records = RecordLoader::new(options.clone()).load(grid, &mut sink)?;
    Ok(LoadReport {
        records,
        diagnostics: sink.diagnostics,
    })
}

/// Names of the loaded records, in load order
pub fn load_names(grid: &Grid, options: &LoadOptions) -> Result<Vec<String>> {
    load_records(grid, options).map(|report| report.names())
}
