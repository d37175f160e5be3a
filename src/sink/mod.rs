//! Output sinks and the fan-out write path.
//!
//! # Responsibilities
//! - Pair a physical writer with an encoder and a mutable severity threshold
//! - Gate each record on the sink's current threshold at submission time
//!
//! # Design Decisions
//! - Writers are best-effort: a failed write is swallowed, logging never
//!   reports errors back to the calling code
//! - Thresholds are atomic cells shared by every logger view over the sink

pub mod console;
pub mod file;

use crate::encode::Encoder;
use crate::level::{Level, LevelCell};
use crate::record::Record;

/// A physical line-oriented output, shared across threads.
pub trait LineWriter: Send + Sync {
    /// Write one encoded record. The severity is passed through for writers
    /// that keep their own per-level bookkeeping.
    fn write_line(&self, level: Level, line: &str) -> std::io::Result<()>;

    fn flush(&self) -> std::io::Result<()>;
}

/// Identifies which configured output a sink belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    File,
}

/// One independent output path: encoder, writer, and runtime threshold.
pub struct Sink {
    kind: SinkKind,
    threshold: LevelCell,
    encoder: Encoder,
    writer: Box<dyn LineWriter>,
}

impl Sink {
    pub(crate) fn new(
        kind: SinkKind,
        threshold: Level,
        encoder: Encoder,
        writer: Box<dyn LineWriter>,
    ) -> Self {
        Self {
            kind,
            threshold: LevelCell::new(threshold),
            encoder,
            writer,
        }
    }

    pub(crate) fn kind(&self) -> SinkKind {
        self.kind
    }

    pub(crate) fn threshold(&self) -> &LevelCell {
        &self.threshold
    }

    /// Encode and write the record if it clears the current threshold.
    pub(crate) fn submit(&self, record: &Record<'_>) {
        if record.level < self.threshold.get() {
            return;
        }
        let line = self.encoder.encode(record);
        let _ = self.writer.write_line(record.level, &line);
    }

    pub(crate) fn flush(&self) {
        let _ = self.writer.flush();
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::CaptureWriter;
    use super::*;
    use crate::config::schema::FieldKeys;
    use crate::encode::ResolvedKeys;
    use chrono::Utc;
    use serde_json::Map;
    use std::panic::Location;

    fn record(level: Level) -> Record<'static> {
        Record {
            level,
            message: "ping",
            time: Utc::now(),
            caller: Location::caller(),
            fields: Map::new(),
            stacktrace: None,
        }
    }

    #[test]
    fn test_threshold_gates_submission() {
        let writer = CaptureWriter::default();
        let lines = writer.lines.clone();
        let sink = Sink::new(
            SinkKind::Console,
            Level::Warn,
            Encoder::Json(ResolvedKeys::resolve(&FieldKeys::default())),
            Box::new(writer),
        );

        sink.submit(&record(Level::Info));
        assert!(lines.lock().unwrap().is_empty());

        sink.submit(&record(Level::Warn));
        sink.submit(&record(Level::Error));
        assert_eq!(lines.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_threshold_change_applies_to_next_submission() {
        let writer = CaptureWriter::default();
        let lines = writer.lines.clone();
        let sink = Sink::new(
            SinkKind::File,
            Level::Info,
            Encoder::Text,
            Box::new(writer),
        );

        sink.submit(&record(Level::Debug));
        assert!(lines.lock().unwrap().is_empty());

        sink.threshold().set(Level::Debug);
        sink.submit(&record(Level::Debug));
        assert_eq!(lines.lock().unwrap().len(), 1);
    }
}
