pub mod use_cases;

pub use use_cases::column_resolver::ColumnResolver;
pub use use_cases::record_loader::{load_names, load_records, LoadReport, RecordLoader};
pub use use_cases::row_validator::{RowOutcome, RowValidator};
