use serde::{Deserialize, Serialize};

/// Options for one record load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Zero-based row holding the column headers (default: 0)
    #[serde(default)]
    pub header_row_index: usize,

    /// Abort on the first duplicate identifier or name instead of skipping it
    #[serde(default)]
    pub strict_no_duplicates: bool,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self {
            strict_no_duplicates: true,
            ..Default::default()
        }
    }

    pub fn with_header_row(mut self, index: usize) -> Self {
        self.header_row_index = index;
        self
    }
}
