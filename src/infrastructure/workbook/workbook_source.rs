use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use super::{resolve_location, GridSource};
use crate::domain::error::{AppError, Result};
use crate::domain::grid::{Cell, Grid, Row, SheetSelector};

/// Spreadsheet workbooks (xlsx, xlsm, xls, ods) read through calamine
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkbookSource;

impl GridSource for WorkbookSource {
    fn load_grid(&self, location: &Path, sheet: &SheetSelector) -> Result<Grid> {
        let path = resolve_location(location)?;
        let file = path.display().to_string();

        // The workbook handle is dropped when this scope ends, on every path.
        let mut workbook = open_workbook_auto(&path).map_err(|e| {
            tracing::error!(path = %file, "failed to open workbook: {}", e);
            AppError::unavailable(&file, format!("failed to open workbook: {}", e))
        })?;

        let names = workbook.sheet_names();
        let index = find_sheet(&names, sheet).ok_or_else(|| {
            AppError::unavailable(&file, format!("sheet {} does not exist", sheet))
        })?;
        let sheet_name = names[index].clone();

        let range = workbook
            .worksheet_range_at(index)
            .ok_or_else(|| AppError::unavailable(&file, format!("sheet {} does not exist", sheet)))?
            .map_err(|e| {
                AppError::unavailable(&file, format!("failed to read sheet \"{}\": {}", sheet_name, e))
            })?;

        let grid = range_to_grid(&sheet_name, &range);
        if grid.has_no_content() {
            return Err(AppError::SheetEmpty { sheet: sheet_name });
        }

        tracing::info!(path = %file, sheet = %sheet_name, rows = grid.rows.len(), "read worksheet");
        Ok(grid)
    }
}

/// Sheet position for a selector. Names match exactly first, then ignoring case.
fn find_sheet(names: &[String], sheet: &SheetSelector) -> Option<usize> {
    match sheet {
        SheetSelector::Index(index) => (*index < names.len()).then_some(*index),
        SheetSelector::Name(name) => names
            .iter()
            .position(|n| n == name)
            .or_else(|| names.iter().position(|n| n.eq_ignore_ascii_case(name))),
    }
}

/// Convert a calamine range. Grid coordinates start at the top-left of
/// the used range, so leading blank rows and columns are not kept.
fn range_to_grid(sheet: &str, range: &Range<Data>) -> Grid {
    let rows: Vec<Row> = range
        .rows()
        .map(|data_row| data_row.iter().map(data_to_cell).collect())
        .collect();

    Grid::new(sheet, rows)
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) => Cell::from(s.as_str()),
        other => Cell::from(other.to_string()),
    }
}
