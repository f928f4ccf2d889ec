pub mod column_resolver;
pub mod header_aliases;
pub mod record_loader;
pub mod row_validator;
