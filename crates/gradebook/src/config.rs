//! CLI configuration file support.
//!
//! A small optional TOML file supplies defaults the command line does
//! not override: the roster file path and the export ordering.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::roster::StudentOrder;

/// Roster file used when neither `--file` nor the config names one.
pub const DEFAULT_ROSTER_FILE: &str = "roster.txt";

/// Settings loaded from `gradebook.toml`.
///
/// Every field is optional in the file; missing fields take the
/// defaults below. CLI flags override whatever the file says.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub roster: RosterConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Roster file used when `--file` is not given.
    pub file: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            file: DEFAULT_ROSTER_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Ordering used when `export --sort` is not given.
    pub sort: StudentOrder,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[roster]
file = "class-of-2026.txt"

[export]
sort = "average"
"#;
        let config: Config = toml::from_str(content).unwrap();

        assert_eq!(config.roster.file, "class-of-2026.txt");
        assert_eq!(config.export.sort, StudentOrder::Average);
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let content = r#"
[roster]
file = "custom.txt"
"#;
        let config: Config = toml::from_str(content).unwrap();

        assert_eq!(config.roster.file, "custom.txt");
        assert_eq!(config.export.sort, StudentOrder::Name);
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.roster.file, DEFAULT_ROSTER_FILE);
        assert_eq!(config.export.sort, StudentOrder::Name);
    }

    #[test]
    fn test_unknown_sort_value_is_an_error() {
        let result = toml::from_str::<Config>("[export]\nsort = \"height\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(temp_dir.path().join("absent.toml")).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gradebook.toml");
        std::fs::write(&path, "not toml at all [[[").unwrap();

        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, Error::ConfigParseError(_)));
    }
}
