//! Multi-sink structured-logging facade.
//!
//! One process-wide logger fans every record out to the configured sinks —
//! console and rotating file — each with its own format and its own severity
//! threshold, adjustable at runtime. Loggers are immutable views: attaching
//! fields (directly or by binding a request context) derives a new view that
//! shares sinks and thresholds with its parent.
//!
//! ```text
//!  caller ──▶ context binder ──▶ logger core ──▶ console sink (text/json, threshold)
//!                                          └───▶ file sink    (json/text, threshold, rotation)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use fanlog::{Fields, Level, RequestContext, TRACE_ID_KEY};
//! use serde_json::json;
//!
//! fn main() -> Result<(), fanlog::InitError> {
//!     fanlog::init(vec![
//!         fanlog::with_level(Level::Info),
//!         fanlog::with_file_path("app.log"),
//!         fanlog::with_global_fields(Fields::from([("service".into(), json!("api"))])),
//!     ])?;
//!
//!     let ctx = RequestContext::new().with_value(TRACE_ID_KEY, "12345");
//!     fanlog::info(&ctx, "request accepted");
//!     fanlog::infof!(&ctx, "processed in {} ms", 42);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod encode;
pub mod global;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;

mod macros;

pub use config::{
    load_config, with_console_json, with_console_level, with_console_stdout, with_field_keys,
    with_file_max_age_days, with_file_max_size_mb, with_file_path, with_global_fields, with_level,
    without_compression, Config, ConfigError, ConfigOption, FieldKeys,
};
pub use context::{RequestContext, TRACE_ID_KEY};
pub use global::{
    debug, debugf, error, errorf, fatal, fatalf, flush, info, info_with_fields, infof, init,
    is_debug_enabled, log_with_fields, logger, panic, panicf, set_console_level, set_file_level,
    warn, warnf, with_context,
};
pub use level::Level;
pub use logger::{InitError, Logger};
pub use record::Fields;
