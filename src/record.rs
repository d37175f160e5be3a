//! Log records and attached structured fields.
//!
//! # Design Decisions
//! - Attached fields form an immutable chain: derivation appends a node that
//!   points back at its parent, so siblings share storage and no derivation
//!   ever copies or mutates what it inherited
//! - Duplicate keys may coexist in the chain; they are resolved only when a
//!   record is rendered, later occurrences winning

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::level::Level;

/// Structured fields supplied by callers, keyed by field name.
pub type Fields = HashMap<String, Value>;

/// One link in a logger's attached-field chain.
#[derive(Debug)]
pub(crate) struct FieldChain {
    entries: Vec<(String, Value)>,
    parent: Option<Arc<FieldChain>>,
}

impl FieldChain {
    /// Chain holding the given fields with no parent. Empty input means no chain.
    pub(crate) fn root(fields: Fields) -> Option<Arc<FieldChain>> {
        Self::extend(&None, fields)
    }

    /// Append a node carrying `fields` on top of `parent`.
    pub(crate) fn extend(
        parent: &Option<Arc<FieldChain>>,
        fields: Fields,
    ) -> Option<Arc<FieldChain>> {
        if fields.is_empty() {
            return parent.clone();
        }
        Some(Arc::new(FieldChain {
            entries: fields.into_iter().collect(),
            parent: parent.clone(),
        }))
    }

    /// Flatten the chain into `out`, oldest node first so newer keys win.
    pub(crate) fn resolve_into(&self, out: &mut Map<String, Value>) {
        let mut nodes = Vec::new();
        let mut cursor = Some(self);
        while let Some(node) = cursor {
            nodes.push(node);
            cursor = node.parent.as_deref();
        }
        for node in nodes.iter().rev() {
            for (key, value) in &node.entries {
                out.insert(key.clone(), value.clone());
            }
        }
    }
}

/// A fully resolved log record, ready for encoding.
#[derive(Debug)]
pub struct Record<'a> {
    pub level: Level,
    pub message: &'a str,
    pub time: DateTime<Utc>,
    pub caller: &'static Location<'static>,
    pub fields: Map<String, Value>,
    pub stacktrace: Option<String>,
}
