// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Delimited text parsing and encoding detection

mod csv_parser;

pub use csv_parser::{read_with_encoding_detection, CsvParser};
