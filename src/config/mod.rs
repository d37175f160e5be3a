//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! functional options (ordered)      config file (TOML)
//!     → Config draft (defaults)         → loader.rs (parse & deserialize)
//!     → Logger::build                   → Logger::build
//! ```
//!
//! # Design Decisions
//! - Every field has a default so a minimal set of options (or none) works
//! - Options are applied in caller-supplied order by mutating a draft
//! - No semantic validation: an unusable value surfaces through the sink
//!   that consumes it

pub mod loader;
pub mod options;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use options::{
    with_console_json, with_console_level, with_console_stdout, with_field_keys, with_file_max_age_days,
    with_file_max_size_mb, with_file_path, with_global_fields, with_level, without_compression,
    ConfigOption,
};
pub use schema::{Config, ConsoleSinkConfig, FieldKeys, FileSinkConfig};
