//! Request-scoped context values.
//!
//! A [`RequestContext`] is an opaque key-value bag carried alongside a
//! request. The logger recognizes exactly one key, [`TRACE_ID_KEY`]; binding
//! a context that carries it yields a derived logger whose records include
//! the trace id.

use std::collections::HashMap;

use serde_json::Value;

/// The context key the logger extracts when binding a context.
pub const TRACE_ID_KEY: &str = "trace_id";

/// Opaque per-request key-value store.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    values: HashMap<String, Value>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a value by key. Absence is not an error.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}
