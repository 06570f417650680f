//! Tracker configuration
//!
//! Loaded from `seatbook.toml` in the platform config directory, or from an
//! explicit path. A missing file means defaults.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::Seat;

/// Seats at a full-ring table
pub const DEFAULT_TABLE_SIZE: u32 = 9;

const CONFIG_FILE: &str = "seatbook.toml";

/// Configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of seats, numbered from 1
    #[serde(default = "default_table_size")]
    pub table_size: u32,
    /// Database file; defaults to `seatbook.db` in the data directory
    #[serde(default)]
    pub database: Option<PathBuf>,
}

fn default_table_size() -> u32 {
    DEFAULT_TABLE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            database: None,
        }
    }
}

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Table size must be between 2 and 10, got {0}")]
    InvalidTableSize(u32),
}

impl Config {
    /// Load from `path`, using defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if !(2..=10).contains(&config.table_size) {
            return Err(ConfigError::InvalidTableSize(config.table_size));
        }
        Ok(config)
    }

    /// Default config file location for this platform
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "seatbook", "seatbook")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Database path, resolved against the data directory
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        match &self.database {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => data_dir.join("seatbook.db"),
        }
    }

    /// Valid seat numbers for the presentation layer
    pub fn seats(&self) -> RangeInclusive<Seat> {
        1..=Seat::from(self.table_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.seats(), 1..=9);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
table_size = 6
database = "tracker.db"
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.table_size, 6);
        assert_eq!(
            config.database_path(Path::new("/data")),
            PathBuf::from("/data/tracker.db")
        );
    }

    #[test]
    fn test_reject_bad_table_size() {
        let err = Config::from_toml("table_size = 1").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTableSize(1)));
        assert!(Config::from_toml("table_size = \"nine\"").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("seatbook.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seatbook.toml");
        std::fs::write(&path, "table_size = 10\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.table_size, 10);
        assert_eq!(
            config.database_path(dir.path()),
            dir.path().join("seatbook.db")
        );
    }
}
