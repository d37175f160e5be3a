//! Record encoders.
//!
//! # Responsibilities
//! - Render a resolved record to one output line (JSON or colored text)
//! - Fix the names of the well-known record keys at construction time
//!
//! # Design Decisions
//! - Each sink owns its encoder, so fan-out can mix formats per sink
//! - Key overrides are resolved exactly once; encoding never consults the
//!   configuration again

mod json;
mod text;

use crate::config::schema::FieldKeys;
use crate::record::Record;

/// Default names for the well-known record keys.
const DEFAULT_LEVEL_KEY: &str = "level";
const DEFAULT_TIME_KEY: &str = "time";
const DEFAULT_CALLER_KEY: &str = "caller";
const DEFAULT_MESSAGE_KEY: &str = "msg";
const DEFAULT_STACKTRACE_KEY: &str = "stacktrace";

/// Key names in effect for one encoder, overrides already applied.
#[derive(Debug, Clone)]
pub struct ResolvedKeys {
    pub level: String,
    pub time: String,
    pub caller: String,
    pub message: String,
    pub stacktrace: String,
}

impl ResolvedKeys {
    /// Apply `overrides` on top of the default names; empty strings keep the default.
    pub fn resolve(overrides: &FieldKeys) -> Self {
        fn pick(over: &str, default: &str) -> String {
            if over.is_empty() {
                default.to_string()
            } else {
                over.to_string()
            }
        }
        Self {
            level: pick(&overrides.level, DEFAULT_LEVEL_KEY),
            time: pick(&overrides.time, DEFAULT_TIME_KEY),
            caller: pick(&overrides.caller, DEFAULT_CALLER_KEY),
            message: pick(&overrides.message, DEFAULT_MESSAGE_KEY),
            stacktrace: pick(&overrides.stacktrace, DEFAULT_STACKTRACE_KEY),
        }
    }
}

/// A sink's line encoder.
#[derive(Debug)]
pub enum Encoder {
    /// One JSON object per line.
    Json(ResolvedKeys),
    /// Tab-separated human-readable line with a colored level tag. The layout
    /// is positional, so key names do not apply.
    Text,
}

impl Encoder {
    pub fn encode(&self, record: &Record<'_>) -> String {
        match self {
            Encoder::Json(keys) => json::encode(keys, record),
            Encoder::Text => text::encode(record),
        }
    }
}
