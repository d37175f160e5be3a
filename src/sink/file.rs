//! Rotating-file sink writer.
//!
//! The physical write path is `flexi_logger`'s `FileLogWriter`: it owns
//! rotation, compression, and pruning of old files. This module only
//! translates the sink configuration into the writer's terms and feeds it
//! pre-encoded lines.

use std::io::{self};
use std::path::Path;

use flexi_logger::writers::{FileLogWriter, LogWriter};
use flexi_logger::{Age, Cleanup, Criterion, DeferredNow, FileSpec, FlexiLoggerError, Naming};

use crate::config::schema::FileSinkConfig;
use crate::level::Level;
use crate::sink::LineWriter;

/// File sink backed by a size/age-rotating writer.
pub struct RotatingFileWriter {
    inner: FileLogWriter,
}

impl RotatingFileWriter {
    /// Open (creating directories and the file as needed) the rotating writer
    /// described by `config`. This is the only fallible step of logger
    /// construction.
    pub fn open(config: &FileSinkConfig) -> Result<Self, FlexiLoggerError> {
        // Rotation triggers at the size bound or daily, whichever comes
        // first; keeping one rotated file per retained day bounds retention
        // to the configured age.
        let criterion = Criterion::AgeOrSize(Age::Day, config.max_size_mb * 1024 * 1024);
        let cleanup = if config.compress {
            Cleanup::KeepCompressedFiles(config.max_age_days)
        } else {
            Cleanup::KeepLogFiles(config.max_age_days)
        };
        let inner = FileLogWriter::builder(file_spec(&config.path))
            .append()
            .format(passthrough_format)
            .rotate(criterion, Naming::Numbers, cleanup)
            .try_build()?;
        Ok(Self { inner })
    }
}

impl LineWriter for RotatingFileWriter {
    fn write_line(&self, level: Level, line: &str) -> io::Result<()> {
        self.inner.write(
            &mut DeferredNow::new(),
            &log::Record::builder()
                .level(to_log_level(level))
                .target("fanlog")
                .args(format_args!("{line}"))
                .build(),
        )
    }

    fn flush(&self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Split a configured file path into the writer's directory/basename/suffix
/// form. The writer marks the active file with its `_rCURRENT` infix and
/// renames it to a numbered sibling at rotation.
fn file_spec(path: &Path) -> FileSpec {
    let mut spec = FileSpec::default().suppress_timestamp();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            spec = spec.directory(dir);
        }
    }
    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
        spec = spec.basename(stem);
    }
    if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
        spec = spec.suffix(ext);
    }
    spec
}

/// The writer's own level type; `fatal` has no counterpart there.
fn to_log_level(level: Level) -> log::Level {
    match level {
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error | Level::Fatal => log::Level::Error,
    }
}

/// The line arriving here is already encoded; pass it through untouched.
fn passthrough_format(
    w: &mut dyn io::Write,
    _now: &mut DeferredNow,
    record: &log::Record,
) -> io::Result<()> {
    write!(w, "{}", record.args())
}
