//! Configuration schema definitions.
//!
//! All types derive Serde traits so a configuration can come from a file as
//! well as from the functional options in [`crate::config::options`]. Every
//! field has a default, allowing minimal configs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::record::Fields;

/// Root configuration for the logger.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Console sink settings.
    pub console: ConsoleSinkConfig,

    /// Rotating-file sink settings.
    pub file: FileSinkConfig,

    /// Fields attached to every record emitted by the built logger.
    pub global_fields: Fields,

    /// Overrides for the well-known record key names.
    pub field_keys: FieldKeys,
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleSinkConfig {
    /// Enable the console sink.
    pub enabled: bool,

    /// Emit JSON lines instead of human-readable text.
    pub json: bool,

    /// Minimum severity the sink emits.
    pub level: Level,
}

impl Default for ConsoleSinkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            json: false,
            level: Level::Info,
        }
    }
}

/// Rotating-file sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FileSinkConfig {
    /// Enable the file sink.
    pub enabled: bool,

    /// Emit JSON lines instead of human-readable text.
    pub json: bool,

    /// Minimum severity the sink emits.
    pub level: Level,

    /// Log file location, including the file name.
    pub path: PathBuf,

    /// Size of a single log file in MB before it is rotated.
    pub max_size_mb: u64,

    /// Days a rotated log file is retained.
    pub max_age_days: usize,

    /// Compress rotated files.
    pub compress: bool,
}

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            json: true,
            level: Level::Info,
            path: PathBuf::from("./log.log"),
            max_size_mb: 256,
            max_age_days: 30,
            compress: true,
        }
    }
}

/// Caller-chosen names for the well-known record keys.
///
/// An empty string keeps the default name. Applied once when a sink's encoder
/// is constructed; immutable afterwards.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FieldKeys {
    pub level: String,
    pub time: String,
    pub caller: String,
    pub message: String,
    pub stacktrace: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.console.enabled);
        assert!(!config.console.json);
        assert_eq!(config.console.level, Level::Info);

        assert!(config.file.enabled);
        assert!(config.file.json);
        assert_eq!(config.file.level, Level::Info);
        assert_eq!(config.file.path, PathBuf::from("./log.log"));
        assert_eq!(config.file.max_size_mb, 256);
        assert_eq!(config.file.max_age_days, 30);
        assert!(config.file.compress);

        assert!(config.global_fields.is_empty());
        assert!(config.field_keys.time.is_empty());
    }

    #[test]
    fn test_minimal_toml() {
        let config: Config = toml::from_str(
            r#"
            [console]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(config.console.enabled);
        assert_eq!(config.console.level, Level::Debug);
        // Untouched sections keep their defaults.
        assert!(config.file.enabled);
        assert_eq!(config.file.max_size_mb, 256);
    }
}
