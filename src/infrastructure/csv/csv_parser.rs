// ============================================================
// CSV PARSER
// ============================================================
// Parse delimited text into a raw grid with encoding detection

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use encoding_rs::WINDOWS_1252;

use crate::domain::error::{AppError, Result};
use crate::domain::grid::{Cell, Grid, Row};

/// Delimiters tried by auto-detection
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// CSV parser producing untyped grid rows
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parse content into a grid. Every line from the first record on is a
    /// row, the header included; empty lines become empty rows.
    pub fn parse_content(&self, sheet: &str, content: &str) -> Result<Grid> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .has_headers(false)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let mut rows: Vec<Row> = Vec::new();
        let mut first_line: Option<u64> = None;
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::unavailable(sheet, format!("failed to parse CSV line {}: {}", index + 1, e))
            })?;

            // The reader skips empty lines; pad them back in after the first record
            if let Some(line) = record.position().map(|p| p.line()) {
                let first = *first_line.get_or_insert(line);
                let target = (line - first) as usize;
                if rows.len() < target {
                    rows.resize(target, Vec::new());
                }
            }

            rows.push(record.iter().map(Cell::from).collect());
        }

        Ok(Grid::new(sheet, rows))
    }

    /// Parse a file, detecting the delimiter from its first lines
    pub fn parse_file_auto_detect(path: &Path, sheet: &str) -> Result<Grid> {
        let content = read_with_encoding_detection(path)?;
        let delimiter = Self::detect_delimiter(&content);
        Self::new().with_delimiter(delimiter).parse_content(sheet, &content)
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let sample_lines: Vec<&str> = content.lines().take(10).collect();
        if sample_lines.is_empty() {
            return b',';
        }

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &CANDIDATE_DELIMITERS {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

/// Read a text file as UTF-8, falling back to Windows-1252
pub fn read_with_encoding_detection(path: &Path) -> Result<String> {
    let location = path.display().to_string();

    let mut file = File::open(path).map_err(|e| AppError::unavailable(&location, e))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| AppError::unavailable(&location, e))?;

    let content = match String::from_utf8(buffer) {
        Ok(content) => content,
        Err(err) => {
            tracing::debug!(path = %location, "file is not UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = WINDOWS_1252.decode(err.as_bytes());
            decoded.into_owned()
        }
    };

    Ok(content.trim_start_matches('\u{feff}').to_string())
}
