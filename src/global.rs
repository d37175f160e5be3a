//! Process-wide logger lifecycle and the module-level logging API.
//!
//! # Lifecycle
//! ```text
//! process start
//!     → default console logger (text, info)
//!     → init(options)            // at most once, concurrent-safe
//!     → configured multi-sink logger
//! ```
//!
//! # Design Decisions
//! - The only mutable global is one swappable slot holding the current
//!   logger; readers take a cheap atomic snapshot per call
//! - `init` is guarded by a one-shot: racing callers block until the winner
//!   has stored the configured logger, then return without reapplying their
//!   options

use std::fmt;
use std::sync::{Arc, LazyLock, Once};

use arc_swap::ArcSwap;

use crate::config::options::ConfigOption;
use crate::config::schema::Config;
use crate::context::RequestContext;
use crate::level::Level;
use crate::logger::{InitError, Logger};
use crate::record::Fields;

static GLOBAL: LazyLock<ArcSwap<Logger>> =
    LazyLock::new(|| ArcSwap::from_pointee(Logger::console_default()));
static INIT: Once = Once::new();

/// Initialize the process-wide logger.
///
/// Options are applied to a default configuration draft in the given order.
/// Only the first call (across all threads) builds and installs a logger;
/// every later call returns `Ok(())` without effect. The error covers the
/// single fallible step, opening the file sink — in that case the default
/// console logger stays in place.
pub fn init(options: impl IntoIterator<Item = ConfigOption>) -> Result<(), InitError> {
    let mut result = Ok(());
    INIT.call_once(|| {
        let mut config = Config::default();
        for option in options {
            option.apply(&mut config);
        }
        match Logger::build(config) {
            Ok(logger) => GLOBAL.store(Arc::new(logger)),
            Err(e) => result = Err(e),
        }
    });
    result
}

/// A handle to the current process-wide logger.
pub fn logger() -> Arc<Logger> {
    GLOBAL.load_full()
}

/// A logger view with the context's trace id bound, when the context carries
/// one; otherwise the global view unchanged.
pub fn with_context(ctx: &RequestContext) -> Logger {
    GLOBAL.load().with_context(ctx)
}

/// Whether debug records currently pass the representative sink.
pub fn is_debug_enabled() -> bool {
    GLOBAL.load().is_debug_enabled()
}

/// Change the console sink's threshold. No-op when the sink is disabled.
pub fn set_console_level(level: Level) {
    GLOBAL.load().set_console_level(level);
}

/// Change the file sink's threshold. No-op when the sink is disabled.
pub fn set_file_level(level: Level) {
    GLOBAL.load().set_file_level(level);
}

/// Flush every sink of the current logger.
pub fn flush() {
    GLOBAL.load().flush();
}

#[track_caller]
pub fn debug(ctx: &RequestContext, msg: &str) {
    with_context(ctx).debug(msg);
}

#[track_caller]
pub fn info(ctx: &RequestContext, msg: &str) {
    with_context(ctx).info(msg);
}

#[track_caller]
pub fn warn(ctx: &RequestContext, msg: &str) {
    with_context(ctx).warn(msg);
}

#[track_caller]
pub fn error(ctx: &RequestContext, msg: &str) {
    with_context(ctx).error(msg);
}

/// Log at `fatal` and terminate the process after flushing.
#[track_caller]
pub fn fatal(ctx: &RequestContext, msg: &str) -> ! {
    with_context(ctx).fatal(msg);
}

/// Log at `fatal` and panic after flushing.
#[track_caller]
pub fn panic(ctx: &RequestContext, msg: &str) -> ! {
    with_context(ctx).panic(msg);
}

#[track_caller]
pub fn debugf(ctx: &RequestContext, args: fmt::Arguments<'_>) {
    with_context(ctx).debugf(args);
}

#[track_caller]
pub fn infof(ctx: &RequestContext, args: fmt::Arguments<'_>) {
    with_context(ctx).infof(args);
}

#[track_caller]
pub fn warnf(ctx: &RequestContext, args: fmt::Arguments<'_>) {
    with_context(ctx).warnf(args);
}

#[track_caller]
pub fn errorf(ctx: &RequestContext, args: fmt::Arguments<'_>) {
    with_context(ctx).errorf(args);
}

/// Formatted [`fatal`].
#[track_caller]
pub fn fatalf(ctx: &RequestContext, args: fmt::Arguments<'_>) -> ! {
    with_context(ctx).fatalf(args);
}

/// Formatted [`panic`].
#[track_caller]
pub fn panicf(ctx: &RequestContext, args: fmt::Arguments<'_>) -> ! {
    with_context(ctx).panicf(args);
}

/// Log with per-call fields; call-supplied keys win on collision.
#[track_caller]
pub fn log_with_fields(ctx: &RequestContext, level: Level, fields: Fields, msg: &str) {
    with_context(ctx).log_with_fields(level, fields, msg);
}

/// [`log_with_fields`] at `info`.
#[track_caller]
pub fn info_with_fields(ctx: &RequestContext, fields: Fields, msg: &str) {
    with_context(ctx).info_with_fields(fields, msg);
}
