//! File-sink integration tests exercising the full dispatch path through the
//! rotating writer into real files.

use std::fs;
use std::path::{Path, PathBuf};

use fanlog::config::{Config, FieldKeys};
use fanlog::{Fields, Level, Logger, RequestContext, TRACE_ID_KEY};
use serde_json::{json, Value};

fn config_for(path: &Path) -> Config {
    let mut config = Config::default();
    config.file.path = path.to_path_buf();
    config.file.compress = false;
    config
}

/// The rotating writer keeps the active file under an `_rCURRENT` infix.
fn current_file(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap().to_str().unwrap();
    path.with_file_name(format!("{stem}_rCURRENT.log"))
}

fn read_records(path: &Path) -> Vec<Value> {
    let Ok(content) = fs::read_to_string(current_file(path)) else {
        return Vec::new();
    };
    content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_emits_json_with_global_fields_and_call_site() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");

    let mut config = config_for(&path);
    config
        .global_fields
        .insert("service".into(), json!("billing"));
    let logger = Logger::build(config).unwrap();

    logger.info("request accepted");
    logger.flush();

    let records = read_records(&path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["msg"], json!("request accepted"));
    assert_eq!(records[0]["level"], json!("info"));
    assert_eq!(records[0]["service"], json!("billing"));
    assert!(records[0]["time"].as_str().unwrap().contains('T'));
    assert!(records[0]["caller"]
        .as_str()
        .unwrap()
        .contains("file_sink.rs"));
}

#[test]
fn test_threshold_gating_and_dynamic_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gate.log");
    let logger = Logger::build(config_for(&path)).unwrap();

    logger.debug("dropped");
    logger.flush();
    assert!(read_records(&path).is_empty());

    logger.set_file_level(Level::Debug);
    logger.debug("emitted");
    logger.set_file_level(Level::Error);
    logger.warn("dropped again");
    logger.error("emitted too");
    logger.flush();

    let records = read_records(&path);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["msg"], json!("emitted"));
    assert_eq!(records[1]["msg"], json!("emitted too"));
}

#[test]
fn test_key_overrides_rename_well_known_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keys.log");

    let mut config = config_for(&path);
    config.field_keys = FieldKeys {
        time: "timestamp".into(),
        caller: "label".into(),
        message: "message".into(),
        stacktrace: "stack".into(),
        ..FieldKeys::default()
    };
    let logger = Logger::build(config).unwrap();

    logger.error("boom");
    logger.flush();

    let records = read_records(&path);
    assert_eq!(records[0]["message"], json!("boom"));
    assert!(records[0].get("msg").is_none());
    assert!(records[0]["timestamp"].as_str().is_some());
    assert!(records[0]["label"].as_str().unwrap().contains("file_sink.rs"));
    assert!(records[0]["stack"].as_str().is_some());
}

#[test]
fn test_context_binding_and_derivation_isolation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("derive.log");
    let logger = Logger::build(config_for(&path)).unwrap();

    let ctx = RequestContext::new().with_value(TRACE_ID_KEY, "12345");
    logger.with_context(&ctx).info("traced");

    let request_logger = logger
        .with_fields(Fields::from([("shard".into(), json!("a"))]))
        .with_fields(Fields::from([("shard".into(), json!("b"))]));
    request_logger.info("sharded");

    logger.info("plain");
    logger.flush();

    let records = read_records(&path);
    assert_eq!(records[0]["trace_id"], json!("12345"));
    assert_eq!(records[1]["shard"], json!("b"));
    assert!(records[2].get("trace_id").is_none());
    assert!(records[2].get("shard").is_none());
}

#[test]
fn test_context_without_trace_id_adds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notrace.log");
    let logger = Logger::build(config_for(&path)).unwrap();

    let ctx = RequestContext::new().with_value("user", "alice");
    logger.with_context(&ctx).info("hello");
    logger.flush();

    let records = read_records(&path);
    assert!(records[0].get("trace_id").is_none());
    assert!(records[0].get("user").is_none());
}

#[test]
fn test_disabled_sinks_make_logging_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.log");

    let mut config = config_for(&path);
    config.file.enabled = false;
    let logger = Logger::build(config).unwrap();

    logger.info("nowhere");
    logger.error("also nowhere");
    logger.flush();

    assert!(!path.exists());
    assert!(!current_file(&path).exists());
}
