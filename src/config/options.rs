//! Functional options applied, in caller order, to a configuration draft.

use std::path::PathBuf;

use crate::config::schema::{Config, FieldKeys};
use crate::level::Level;
use crate::record::Fields;

/// A single deferred edit to a [`Config`] draft.
pub struct ConfigOption(Box<dyn FnOnce(&mut Config) + Send>);

impl ConfigOption {
    fn new(edit: impl FnOnce(&mut Config) + Send + 'static) -> Self {
        Self(Box::new(edit))
    }

    pub(crate) fn apply(self, config: &mut Config) {
        (self.0)(config);
    }
}

/// Enable console output. Not recommended for production.
pub fn with_console_stdout() -> ConfigOption {
    ConfigOption::new(|c| c.console.enabled = true)
}

/// Set the console sink's severity threshold.
pub fn with_console_level(level: Level) -> ConfigOption {
    ConfigOption::new(move |c| c.console.level = level)
}

/// Switch the console sink to JSON output.
pub fn with_console_json() -> ConfigOption {
    ConfigOption::new(|c| c.console.json = true)
}

/// Set the file sink's severity threshold. This is the default level setter.
pub fn with_level(level: Level) -> ConfigOption {
    ConfigOption::new(move |c| c.file.level = level)
}

/// Set the log file location, including the file name.
pub fn with_file_path(path: impl Into<PathBuf>) -> ConfigOption {
    let path = path.into();
    ConfigOption::new(move |c| c.file.path = path)
}

/// Set the size of a single log file in MB before rotation.
pub fn with_file_max_size_mb(max_size_mb: u64) -> ConfigOption {
    ConfigOption::new(move |c| c.file.max_size_mb = max_size_mb)
}

/// Set how many days rotated log files are retained.
pub fn with_file_max_age_days(max_age_days: usize) -> ConfigOption {
    ConfigOption::new(move |c| c.file.max_age_days = max_age_days)
}

/// Keep rotated files uncompressed.
pub fn without_compression() -> ConfigOption {
    ConfigOption::new(|c| c.file.compress = false)
}

/// Attach fields to every record the built logger emits, e.g. service name,
/// environment, or container id.
pub fn with_global_fields(fields: Fields) -> ConfigOption {
    ConfigOption::new(move |c| c.global_fields = fields)
}

/// Override the default names of the well-known record keys.
pub fn with_field_keys(keys: FieldKeys) -> ConfigOption {
    ConfigOption::new(move |c| c.field_keys = keys)
}
