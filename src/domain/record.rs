// ============================================================
// RECORD TYPES
// ============================================================
// Column positions, per-row candidates and final roster records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based grid columns of the three semantic fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub identifier: usize,
    pub name: usize,
    pub tags: usize,
}

impl ColumnMap {
    /// All three positions differ
    pub fn is_distinct(&self) -> bool {
        self.identifier != self.name && self.identifier != self.tags && self.name != self.tags
    }

    /// Rightmost resolved position
    pub fn max_column(&self) -> usize {
        self.identifier.max(self.name).max(self.tags)
    }
}

/// A row that passed validation but not yet the uniqueness checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// 1-based data row number, counting from the row after the header
    pub row_number: usize,
    pub identifier: u64,
    pub name: String,
    pub tags: Vec<String>,
}

impl CandidateRecord {
    /// Lowercased name used as the name uniqueness key
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn into_record(self) -> RosterRecord {
        RosterRecord {
            identifier: self.identifier,
            name: self.name,
            tags: self.tags,
        }
    }
}

/// Validated, deduplicated output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    #[serde(rename = "id")]
    pub identifier: u64,
    pub name: String,
    pub tags: Vec<String>,
}

/// Which uniqueness key collided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateKey {
    Identifier,
    Name,
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateKey::Identifier => write!(f, "identifier"),
            DuplicateKey::Name => write!(f, "name"),
        }
    }
}
