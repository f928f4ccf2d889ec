// ============================================================
// GRID TYPES
// ============================================================
// Raw sheet snapshot handed over by a grid source

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single untyped cell value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// Absent, or text that is only whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::Bool(_) => false,
        }
    }

    /// Render the cell as text the way a spreadsheet shows it.
    /// Integral numbers drop their fractional part (`25.0` -> `"25"`).
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Bool(b) => b.to_string(),
            Cell::Number(n) => format_number(*n),
        }
    }

    /// Trimmed text rendering
    pub fn to_clean_text(&self) -> String {
        self.to_text().trim().to_string()
    }

    /// Numeric coercion. Blank text coerces to zero, unparseable text to NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Cell::Empty => 0.0,
            Cell::Number(n) => *n,
            Cell::Bool(true) => 1.0,
            Cell::Bool(false) => 0.0,
            Cell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value)
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// One row of cells. Rows may be ragged.
pub type Row = Vec<Cell>;

/// 2-D snapshot of one sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Sheet label, used in diagnostics and error messages
    pub sheet: String,

    pub rows: Vec<Row>,
}

impl Grid {
    pub fn new(sheet: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            sheet: sheet.into(),
            rows,
        }
    }

    /// Create a grid from rows of anything convertible into cells
    pub fn from_rows<R, C>(sheet: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::new(sheet, rows)
    }

    /// No rows at all, or every row holds only blank cells
    pub fn has_no_content(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(Cell::is_blank))
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}

/// Cell at `column`, reading past the end of a ragged row as empty
pub fn cell_at(row: &[Cell], column: usize) -> &Cell {
    static EMPTY: Cell = Cell::Empty;
    row.get(column).unwrap_or(&EMPTY)
}

/// Which sheet of a workbook to read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Index(i) => write!(f, "#{}", i),
            SheetSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}
