// ============================================================
// GRID SOURCES
// ============================================================
// Resolve a workbook location and read one sheet into a grid

mod workbook_source;

use std::path::{Path, PathBuf};

use crate::domain::error::{AppError, Result};
use crate::domain::grid::{Grid, SheetSelector};
use crate::infrastructure::csv::CsvParser;

pub use workbook_source::WorkbookSource;

/// Supplies the raw grid of one sheet
pub trait GridSource {
    fn load_grid(&self, location: &Path, sheet: &SheetSelector) -> Result<Grid>;
}

/// Resolve `location` against the working directory and check it exists
pub fn resolve_location(location: &Path) -> Result<PathBuf> {
    let absolute = if location.is_absolute() {
        location.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| AppError::unavailable(location.display().to_string(), e))?
            .join(location)
    };

    if !absolute.is_file() {
        return Err(AppError::unavailable(
            absolute.display().to_string(),
            "file does not exist",
        ));
    }

    Ok(absolute)
}

/// Single-sheet delimited text files
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvSource;

impl GridSource for CsvSource {
    fn load_grid(&self, location: &Path, sheet: &SheetSelector) -> Result<Grid> {
        let path = resolve_location(location)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let matches = match sheet {
            SheetSelector::Index(index) => *index == 0,
            SheetSelector::Name(name) => name.eq_ignore_ascii_case(&stem),
        };
        if !matches {
            return Err(AppError::unavailable(
                path.display().to_string(),
                format!("sheet {} does not exist", sheet),
            ));
        }

        let grid = CsvParser::parse_file_auto_detect(&path, &stem)?;
        if grid.has_no_content() {
            return Err(AppError::SheetEmpty { sheet: stem });
        }
        Ok(grid)
    }
}

/// Picks the CSV or workbook reader by file extension
#[derive(Debug, Default, Clone, Copy)]
pub struct FileGridSource;

impl FileGridSource {
    fn is_delimited(location: &Path) -> bool {
        location
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "csv" | "tsv"))
            .unwrap_or(false)
    }
}

impl GridSource for FileGridSource {
    fn load_grid(&self, location: &Path, sheet: &SheetSelector) -> Result<Grid> {
        if Self::is_delimited(location) {
            CsvSource.load_grid(location, sheet)
        } else {
            WorkbookSource.load_grid(location, sheet)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = resolve_location(Path::new("no/such/roster.xlsx")).unwrap_err();
        match err {
            AppError::ResourceUnavailable { location, .. } => {
                assert!(Path::new(&location).is_absolute());
                assert!(location.ends_with("roster.xlsx"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_csv_source_reads_first_sheet() {
        let file = csv_file("ID,Name,Abilities\n1,Pikachu,Static\n");
        let grid = FileGridSource
            .load_grid(file.path(), &SheetSelector::default())
            .unwrap();
        assert_eq!(grid.rows.len(), 2);
    }

    #[test]
    fn test_csv_source_rejects_other_sheets() {
        let file = csv_file("ID,Name,Abilities\n1,Pikachu,Static\n");
        let err = CsvSource
            .load_grid(file.path(), &SheetSelector::Index(1))
            .unwrap_err();
        assert!(matches!(err, AppError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_csv_source_accepts_stem_as_sheet_name() {
        let file = csv_file("ID,Name,Abilities\n1,Pikachu,Static\n");
        let stem = file.path().file_stem().unwrap().to_string_lossy().into_owned();
        let grid = CsvSource
            .load_grid(file.path(), &SheetSelector::Name(stem.clone()))
            .unwrap();
        assert_eq!(grid.sheet, stem);
    }

    #[test]
    fn test_blank_csv_is_sheet_empty() {
        let file = csv_file("\n,,\n");
        let err = CsvSource
            .load_grid(file.path(), &SheetSelector::default())
            .unwrap_err();
        assert!(matches!(err, AppError::SheetEmpty { .. }));
    }

    #[test]
    fn test_csv_file_loads_roster_records() {
        use crate::application::load_records;
        use crate::domain::load_options::LoadOptions;

        let file = csv_file(
            "ID;Name;Abilities\n1;Pikachu;Static, Lightning Rod\n;;\n2;Bulbasaur;Overgrow\n1;Raichu;Static\n",
        );
        let grid = FileGridSource
            .load_grid(file.path(), &SheetSelector::default())
            .unwrap();
        let report = load_records(&grid, &LoadOptions::default()).unwrap();

        assert_eq!(report.names(), vec!["Pikachu", "Bulbasaur"]);
        assert_eq!(report.records[0].identifier, 1);
        assert_eq!(report.records[0].tags, vec!["static", "lightning-rod"]);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].row, 4);
    }

    #[test]
    fn test_extension_dispatch() {
        assert!(FileGridSource::is_delimited(Path::new("roster.CSV")));
        assert!(FileGridSource::is_delimited(Path::new("roster.tsv")));
        assert!(!FileGridSource::is_delimited(Path::new("roster.txt")));
        assert!(!FileGridSource::is_delimited(Path::new("roster.xlsx")));
        assert!(!FileGridSource::is_delimited(Path::new("roster")));
    }
}
