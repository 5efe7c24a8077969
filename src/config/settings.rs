//! User settings for ledger-statement
//!
//! Manages presentation preferences and the choice of category taxonomy.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{Taxonomy, TaxonomyScheme};
use crate::storage::file_io::{read_json_optional, write_json_atomic};

/// User settings for ledger-statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in table headings and amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Built-in category table; ignored when `taxonomy.json` exists
    #[serde(default)]
    pub taxonomy: TaxonomyScheme,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            taxonomy: TaxonomyScheme::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject settings that would fail later, at render time
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.date_format.trim().is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(LedgerError::Config(format!(
                "Invalid date format: {:?}",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// The active category taxonomy
    ///
    /// A `taxonomy.json` next to the settings file takes precedence over the
    /// built-in scheme.
    pub fn load_taxonomy(&self, paths: &LedgerPaths) -> Result<Taxonomy, LedgerError> {
        match read_json_optional::<Taxonomy, _>(paths.taxonomy_file())? {
            Some(taxonomy) => {
                taxonomy.validate().map_err(|e| {
                    LedgerError::Config(format!("Invalid taxonomy file: {}", e))
                })?;
                tracing::debug!(categories = taxonomy.len(), "loaded custom taxonomy");
                Ok(taxonomy)
            }
            None => Ok(self.taxonomy.taxonomy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryDef, CategoryKind, StatementLine};
    use tempfile::TempDir;

    fn temp_paths() -> (TempDir, LedgerPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.taxonomy, TaxonomyScheme::Granular);
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, paths) = temp_paths();

        let settings = Settings {
            currency_symbol: "$".into(),
            taxonomy: TaxonomyScheme::Broad,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_date_format_is_config_error() {
        let (_temp_dir, paths) = temp_paths();
        std::fs::write(paths.settings_file(), r#"{"date_format":"%Q-%"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_validate_accepts_common_formats() {
        for format in ["%Y-%m-%d", "%d/%m/%Y", "%b %e, %Y"] {
            let settings = Settings {
                date_format: format.into(),
                ..Settings::default()
            };
            assert!(settings.validate().is_ok(), "{}", format);
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"taxonomy":"broad"}"#).unwrap();
        assert_eq!(settings.taxonomy, TaxonomyScheme::Broad);
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_taxonomy_from_scheme() {
        let (_temp_dir, paths) = temp_paths();
        let settings = Settings {
            taxonomy: TaxonomyScheme::Broad,
            ..Settings::default()
        };
        assert_eq!(settings.load_taxonomy(&paths).unwrap(), Taxonomy::broad());
    }

    #[test]
    fn test_custom_taxonomy_file_wins() {
        let (_temp_dir, paths) = temp_paths();
        let custom = Taxonomy {
            categories: vec![CategoryDef::new(
                "Consulting Fees",
                CategoryKind::Revenue,
                Some(StatementLine::Revenue),
            )],
        };
        write_json_atomic(paths.taxonomy_file(), &custom).unwrap();

        let taxonomy = Settings::default().load_taxonomy(&paths).unwrap();
        assert_eq!(taxonomy, custom);
    }

    #[test]
    fn test_invalid_taxonomy_file_is_config_error() {
        let (_temp_dir, paths) = temp_paths();
        let custom = Taxonomy {
            categories: vec![
                CategoryDef::new("Fees", CategoryKind::Revenue, None),
                CategoryDef::new("fees", CategoryKind::Revenue, None),
            ],
        };
        write_json_atomic(paths.taxonomy_file(), &custom).unwrap();

        let err = Settings::default().load_taxonomy(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
