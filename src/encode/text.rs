//! Human-readable line encoding with a colored level tag.

use chrono::SecondsFormat;
use serde_json::Value;

use crate::level::Level;
use crate::record::Record;

const RESET: &str = "\x1b[0m";

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Debug => "\x1b[35m",
        Level::Info => "\x1b[34m",
        Level::Warn => "\x1b[33m",
        Level::Error | Level::Fatal => "\x1b[31m",
    }
}

pub(crate) fn encode(record: &Record<'_>) -> String {
    let mut line = String::with_capacity(64 + record.message.len());
    line.push_str(&record.time.to_rfc3339_opts(SecondsFormat::Millis, true));
    line.push('\t');
    line.push_str(level_color(record.level));
    line.push_str(record.level.as_str());
    line.push_str(RESET);
    line.push('\t');
    line.push_str(&format!("{}:{}", record.caller.file(), record.caller.line()));
    line.push('\t');
    line.push_str(record.message);
    if !record.fields.is_empty() {
        line.push('\t');
        line.push_str(&Value::Object(record.fields.clone()).to_string());
    }
    if let Some(stacktrace) = &record.stacktrace {
        line.push('\n');
        line.push_str(stacktrace);
    }
    line
}
