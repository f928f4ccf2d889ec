pub mod diagnostic;
pub mod error;
pub mod grid;
pub mod load_options;
pub mod record;
