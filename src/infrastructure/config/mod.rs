use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::grid::SheetSelector;
use crate::domain::load_options::LoadOptions;

pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";
pub const ENV_PREFIX: &str = "ROSTER_";
pub const DEFAULT_WORKBOOK_FILE: &str = "data/roster.xlsx";

/// Settings for the roster loader binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Workbook or CSV file, relative to the working directory
    pub workbook_path: PathBuf,

    /// Sheet index or name
    pub sheet: SheetSelector,

    /// Zero-based header row
    pub header_row: usize,

    pub strict_no_duplicates: bool,

    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            workbook_path: PathBuf::from(DEFAULT_WORKBOOK_FILE),
            sheet: SheetSelector::default(),
            header_row: 0,
            strict_no_duplicates: false,
            log_filter: "info".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Defaults, then `roster.toml`, then `ROSTER_*` environment variables
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        Self::from_figment(
            Figment::from(Serialized::defaults(LoaderConfig::default()))
                .merge(Toml::file(config_file))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let config: LoaderConfig = figment
            .extract()
            .map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.workbook_path.as_os_str().is_empty() {
            return Err(AppError::Config("workbook_path must not be empty".to_string()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(AppError::Config("log_filter must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            header_row_index: self.header_row,
            strict_no_duplicates: self.strict_no_duplicates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = LoaderConfig::load().expect("defaults load");
            assert_eq!(config, LoaderConfig::default());
            assert_eq!(config.load_options(), LoadOptions::default());
            Ok(())
        });
    }

    #[test]
    fn test_toml_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                    workbook_path = "fixtures/pokemon.xlsx"
                    sheet = "Pokemon"
                    header_row = 2
                "#,
            )?;
            jail.set_env("ROSTER_STRICT_NO_DUPLICATES", "true");
            jail.set_env("ROSTER_HEADER_ROW", "1");

            let config = LoaderConfig::load().expect("config loads");
            assert_eq!(config.workbook_path, PathBuf::from("fixtures/pokemon.xlsx"));
            assert_eq!(config.sheet, SheetSelector::Name("Pokemon".to_string()));
            assert_eq!(
                config.load_options(),
                LoadOptions {
                    header_row_index: 1,
                    strict_no_duplicates: true,
                }
            );
            Ok(())
        });
    }

    #[test]
    fn test_sheet_index_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("ROSTER_SHEET", "2");
            let config = LoaderConfig::load().expect("config loads");
            assert_eq!(config.sheet, SheetSelector::Index(2));
            Ok(())
        });
    }

    #[test]
    fn test_empty_workbook_path_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("ROSTER_WORKBOOK_PATH", "");
            assert!(matches!(LoaderConfig::load(), Err(AppError::Config(_))));
            Ok(())
        });
    }
}
