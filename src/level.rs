//! Severity levels and the atomic threshold cell.
//!
//! # Responsibilities
//! - Define the ordered set of severities a record can carry
//! - Parse textual tags, falling back to `info` for anything unknown
//! - Provide a thread-safe, runtime-mutable threshold cell for sinks

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Log severity, ordered from least to most severe.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Level {
    /// The lowercase textual tag for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tags map to `Info` rather than failing.
impl From<&str> for Level {
    fn from(tag: &str) -> Self {
        match tag {
            "debug" => Level::Debug,
            "info" => Level::Info,
            "warn" => Level::Warn,
            "error" => Level::Error,
            "fatal" => Level::Fatal,
            _ => Level::Info,
        }
    }
}

impl From<u8> for Level {
    fn from(val: u8) -> Self {
        match val {
            0 => Level::Debug,
            2 => Level::Warn,
            3 => Level::Error,
            4 => Level::Fatal,
            _ => Level::Info,
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Level::from(tag.as_str()))
    }
}

/// A sink's severity threshold, readable and writable while logging continues.
#[derive(Debug)]
pub struct LevelCell(AtomicU8);

impl LevelCell {
    pub fn new(level: Level) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    pub fn get(&self) -> Level {
        Level::from(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_unknown_tag_defaults_to_info() {
        assert_eq!(Level::from("verbose"), Level::Info);
        assert_eq!(Level::from(""), Level::Info);
        assert_eq!(Level::from("warn"), Level::Warn);
    }

    #[test]
    fn test_level_cell_roundtrip() {
        let cell = LevelCell::new(Level::Info);
        assert_eq!(cell.get(), Level::Info);
        cell.set(Level::Debug);
        assert_eq!(cell.get(), Level::Debug);
    }

    #[test]
    fn test_serde_tags() {
        let level: Level = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(level, Level::Error);
        let level: Level = serde_json::from_str("\"nonsense\"").unwrap();
        assert_eq!(level, Level::Info);
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"warn\"");
    }
}
