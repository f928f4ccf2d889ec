pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use app::run;
pub use application::{load_names, load_records, LoadReport, RecordLoader};
pub use domain::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
pub use domain::error::{AppError, Result};
pub use domain::grid::{Cell, Grid, SheetSelector};
pub use domain::load_options::LoadOptions;
pub use domain::record::{ColumnMap, DuplicateKey, RosterRecord};
pub use infrastructure::config::LoaderConfig;
pub use infrastructure::workbook::{CsvSource, FileGridSource, GridSource, WorkbookSource};
