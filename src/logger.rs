//! Logger core.
//!
//! # Responsibilities
//! - Build the configured sinks, console before file
//! - Fan each record out to every sink for an independent threshold check
//! - Derive field-carrying views that share sinks and thresholds
//!
//! # Design Decisions
//! - A `Logger` is a view: two shared handles (sink core, field chain).
//!   Cloning or deriving one allocates at most a field-chain node and never
//!   touches shared state
//! - Every entry point is `#[track_caller]`, so the location that reaches an
//!   encoder is the original call site rather than a wrapper frame
//! - A stack trace is captured once per record at `error` and above

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::process;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Map;
use thiserror::Error;

use crate::config::schema::Config;
use crate::context::{RequestContext, TRACE_ID_KEY};
use crate::encode::{Encoder, ResolvedKeys};
use crate::level::Level;
use crate::record::{FieldChain, Fields, Record};
use crate::sink::console::ConsoleWriter;
use crate::sink::file::RotatingFileWriter;
use crate::sink::{Sink, SinkKind};

/// Error surfaced when logger construction fails.
#[derive(Debug, Error)]
pub enum InitError {
    /// The rotating-file writer could not be opened.
    #[error("failed to open file sink: {0}")]
    FileSink(#[from] flexi_logger::FlexiLoggerError),
}

/// Sinks shared by a logger and every view derived from it.
struct Core {
    sinks: Vec<Sink>,
}

/// A handle for emitting structured log records.
///
/// Cheap to clone; clones and derived views share sinks and thresholds.
#[derive(Clone)]
pub struct Logger {
    core: Arc<Core>,
    fields: Option<Arc<FieldChain>>,
}

impl Logger {
    /// Build a logger from `config`, constructing each enabled sink.
    ///
    /// Opening the log file is the only fallible step; with both sinks
    /// disabled the logger silently discards every record.
    pub fn build(config: Config) -> Result<Self, InitError> {
        let keys = ResolvedKeys::resolve(&config.field_keys);
        let mut sinks = Vec::new();

        if config.console.enabled {
            let encoder = if config.console.json {
                Encoder::Json(keys.clone())
            } else {
                Encoder::Text
            };
            sinks.push(Sink::new(
                SinkKind::Console,
                config.console.level,
                encoder,
                Box::new(ConsoleWriter),
            ));
        }

        if config.file.enabled {
            let encoder = if config.file.json {
                Encoder::Json(keys.clone())
            } else {
                Encoder::Text
            };
            let writer = RotatingFileWriter::open(&config.file)?;
            sinks.push(Sink::new(
                SinkKind::File,
                config.file.level,
                encoder,
                Box::new(writer),
            ));
        }

        Ok(Self::from_sinks(sinks, FieldChain::root(config.global_fields)))
    }

    /// The pre-initialization logger: console only, text format, `info`.
    pub fn console_default() -> Self {
        Self::from_sinks(
            vec![Sink::new(
                SinkKind::Console,
                Level::Info,
                Encoder::Text,
                Box::new(ConsoleWriter),
            )],
            None,
        )
    }

    pub(crate) fn from_sinks(sinks: Vec<Sink>, fields: Option<Arc<FieldChain>>) -> Self {
        Self {
            core: Arc::new(Core { sinks }),
            fields,
        }
    }

    fn sink(&self, kind: SinkKind) -> Option<&Sink> {
        self.core.sinks.iter().find(|s| s.kind() == kind)
    }

    // --- Dynamic level control ---

    /// Change the console sink's threshold. No-op when the sink is disabled.
    pub fn set_console_level(&self, level: Level) {
        if let Some(sink) = self.sink(SinkKind::Console) {
            sink.threshold().set(level);
        }
    }

    /// Change the file sink's threshold. No-op when the sink is disabled.
    pub fn set_file_level(&self, level: Level) {
        if let Some(sink) = self.sink(SinkKind::File) {
            sink.threshold().set(level);
        }
    }

    /// The console sink's current threshold, if the sink exists.
    pub fn console_level(&self) -> Option<Level> {
        self.sink(SinkKind::Console).map(|s| s.threshold().get())
    }

    /// The file sink's current threshold, if the sink exists.
    pub fn file_level(&self) -> Option<Level> {
        self.sink(SinkKind::File).map(|s| s.threshold().get())
    }

    /// Whether debug records currently pass the representative sink: the file
    /// sink when one exists, otherwise the console sink. Callers use this to
    /// guard expensive debug-only work.
    pub fn is_debug_enabled(&self) -> bool {
        self.sink(SinkKind::File)
            .or_else(|| self.sink(SinkKind::Console))
            .map(|s| s.threshold().get() == Level::Debug)
            .unwrap_or(false)
    }

    // --- Derivation ---

    /// A new view carrying `fields` in addition to this logger's fields.
    /// The receiver is never changed; both views share sinks and thresholds.
    pub fn with_fields(&self, fields: Fields) -> Logger {
        Logger {
            core: self.core.clone(),
            fields: FieldChain::extend(&self.fields, fields),
        }
    }

    /// Bind the trace id from `ctx`, if present. A context without one
    /// yields a view identical to the receiver.
    pub fn with_context(&self, ctx: &RequestContext) -> Logger {
        match ctx.value(TRACE_ID_KEY) {
            Some(trace_id) => {
                self.with_fields(Fields::from([(TRACE_ID_KEY.to_string(), trace_id.clone())]))
            }
            None => self.clone(),
        }
    }

    // --- Leveled logging ---

    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.dispatch(Level::Debug, None, msg);
    }

    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.dispatch(Level::Info, None, msg);
    }

    #[track_caller]
    pub fn warn(&self, msg: &str) {
        self.dispatch(Level::Warn, None, msg);
    }

    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.dispatch(Level::Error, None, msg);
    }

    /// Log at `fatal`, flush every sink, then terminate the process.
    #[track_caller]
    pub fn fatal(&self, msg: &str) -> ! {
        self.dispatch(Level::Fatal, None, msg);
        self.flush();
        process::exit(1);
    }

    /// Log at `fatal`, flush every sink, then panic with the message. Unlike
    /// [`Logger::fatal`] this unwinds instead of exiting the process.
    #[track_caller]
    pub fn panic(&self, msg: &str) -> ! {
        self.dispatch(Level::Fatal, None, msg);
        self.flush();
        panic!("{msg}");
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Level::Debug, None, &args.to_string());
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Level::Info, None, &args.to_string());
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Level::Warn, None, &args.to_string());
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Level::Error, None, &args.to_string());
    }

    /// Formatted [`Logger::fatal`].
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.dispatch(Level::Fatal, None, &args.to_string());
        self.flush();
        process::exit(1);
    }

    /// Formatted [`Logger::panic`].
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let msg = args.to_string();
        self.dispatch(Level::Fatal, None, &msg);
        self.flush();
        panic!("{msg}");
    }

    /// Log with per-call fields. On a key collision, the call-supplied value
    /// wins over attached fields. An empty map attaches nothing.
    #[track_caller]
    pub fn log_with_fields(&self, level: Level, fields: Fields, msg: &str) {
        self.dispatch(level, Some(fields), msg);
    }

    /// [`Logger::log_with_fields`] at `info`.
    #[track_caller]
    pub fn info_with_fields(&self, fields: Fields, msg: &str) {
        self.dispatch(Level::Info, Some(fields), msg);
    }

    /// Flush every sink's physical writer.
    pub fn flush(&self) {
        for sink in &self.core.sinks {
            sink.flush();
        }
    }

    #[track_caller]
    fn dispatch(&self, level: Level, call_fields: Option<Fields>, message: &str) {
        if self.core.sinks.is_empty() {
            return;
        }

        let mut fields = Map::new();
        if let Some(chain) = &self.fields {
            chain.resolve_into(&mut fields);
        }
        if let Some(call_fields) = call_fields {
            for (key, value) in call_fields {
                fields.insert(key, value);
            }
        }

        let record = Record {
            level,
            message,
            time: Utc::now(),
            caller: Location::caller(),
            fields,
            stacktrace: (level >= Level::Error).then(|| Backtrace::force_capture().to_string()),
        };

        for sink in &self.core.sinks {
            sink.submit(&record);
        }
    }
}
