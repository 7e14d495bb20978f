//! No-mock logger tests writing through real files.
//!
//! Validates the `user_data` logger end to end:
//! - Rendered lines follow the `[HOLBERTON] <name> <LEVEL> <ts>: <msg>` template
//! - PII values are redacted before they reach disk
//! - Repeated `get_logger_with_writer` calls keep exactly one sink

use pd_redact::{get_logger_with_writer, plain_root, LoggerRegistry};
use std::fs::{self, File};

#[test]
fn test_user_data_logger_writes_redacted_lines_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_data.log");
    let file = File::create(&path).unwrap();

    let mut registry = LoggerRegistry::new();
    let logger = get_logger_with_writer(&mut registry, file);

    logger.info("name=Bob;email=bob@dylan.com;ssn=000-123-0000;password=bobbycool;ip=10.0.0.1;");
    logger.debug("name=dropped;");
    logger.warning("phone=555-0100;");

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected output: {contents}");

    assert!(lines[0].starts_with("[HOLBERTON] user_data INFO "));
    assert!(lines[0].ends_with(": name=***;email=***;ssn=***;password=***;ip=10.0.0.1;"));
    assert!(lines[1].starts_with("[HOLBERTON] user_data WARNING "));
    assert!(lines[1].ends_with(": phone=***;"));

    for secret in ["Bob", "bob@dylan.com", "000-123-0000", "bobbycool", "555-0100", "dropped"] {
        assert!(!contents.contains(secret), "{secret} leaked: {contents}");
    }
}

#[test]
fn test_repeated_get_logger_does_not_duplicate_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_data.log");

    let mut registry = LoggerRegistry::new();
    let first = get_logger_with_writer(&mut registry, File::create(&path).unwrap());
    // The second writer is never attached.
    let second = get_logger_with_writer(&mut registry, std::io::sink());

    second.info("ssn=1;");
    first.info("ssn=2;");

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert_eq!(first.sink_count(), 1);
}

#[test]
fn test_root_sink_sees_nothing_from_user_data() {
    let dir = tempfile::tempdir().unwrap();
    let root_path = dir.path().join("root.log");

    let mut registry = LoggerRegistry::with_root(plain_root(File::create(&root_path).unwrap()));
    let logger = get_logger_with_writer(&mut registry, std::io::sink());
    logger.critical("password=hunter2;");

    assert_eq!(fs::read_to_string(&root_path).unwrap(), "");
}
