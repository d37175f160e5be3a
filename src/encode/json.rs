//! JSON line encoding.

use chrono::SecondsFormat;
use serde_json::{Map, Value};

use crate::encode::ResolvedKeys;
use crate::record::Record;

pub(crate) fn encode(keys: &ResolvedKeys, record: &Record<'_>) -> String {
    let mut object = Map::new();
    object.insert(
        keys.level.clone(),
        Value::String(record.level.as_str().to_string()),
    );
    object.insert(
        keys.time.clone(),
        Value::String(record.time.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    object.insert(
        keys.caller.clone(),
        Value::String(format!("{}:{}", record.caller.file(), record.caller.line())),
    );
    object.insert(keys.message.clone(), Value::String(record.message.to_string()));
    if let Some(stacktrace) = &record.stacktrace {
        object.insert(keys.stacktrace.clone(), Value::String(stacktrace.clone()));
    }
    for (key, value) in &record.fields {
        object.insert(key.clone(), value.clone());
    }
    Value::Object(object).to_string()
}
