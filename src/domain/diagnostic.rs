// ============================================================
// LOAD DIAGNOSTICS
// ============================================================
// Row-level problems that skip a row without failing the load

use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::DuplicateKey;

/// Why a row was skipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Identifier is not a finite positive integer
    InvalidIdentifier { raw: String },

    /// Name is empty after trimming
    EmptyName,

    /// No tag survived normalization
    EmptyTags,

    /// Identifier or name already taken by an earlier row
    Duplicate { key: DuplicateKey },
}

/// A skipped row and the reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based data row number, counting from the row after the header
    pub row: usize,

    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(row: usize, kind: DiagnosticKind) -> Self {
        Self { row, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::InvalidIdentifier { raw } => {
                write!(f, "Row {}: invalid identifier ({}), skipped", self.row, raw)
            }
            DiagnosticKind::EmptyName => write!(f, "Row {}: empty name, skipped", self.row),
            DiagnosticKind::EmptyTags => write!(f, "Row {}: empty tag list, skipped", self.row),
            DiagnosticKind::Duplicate { key } => {
                write!(f, "Row {}: duplicate {} detected, skipped", self.row, key)
            }
        }
    }
}

/// Receives diagnostics while a load runs
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards every diagnostic to `tracing` as a warning
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(row = diagnostic.row, "{}", diagnostic);
    }
}

/// Collects diagnostics and also logs them
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        TracingSink.report(diagnostic.clone());
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_row_and_key() {
        let d = Diagnostic::new(3, DiagnosticKind::Duplicate { key: DuplicateKey::Identifier });
        assert_eq!(d.to_string(), "Row 3: duplicate identifier detected, skipped");
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::new(2, DiagnosticKind::EmptyName));
        sink.report(Diagnostic::new(4, DiagnosticKind::EmptyTags));
        assert_eq!(sink.iter().map(|d| d.row).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let d = Diagnostic::new(
            5,
            DiagnosticKind::InvalidIdentifier { raw: "abc".to_string() },
        );
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["row"], 5);
        assert_eq!(json["kind"], "invalid_identifier");
        assert_eq!(json["raw"], "abc");
    }
}
