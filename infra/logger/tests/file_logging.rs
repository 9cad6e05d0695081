use maison_logger::{LevelFilter, Logger, Rotation};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_layer_writes_rotating_logs() {
    let tmp_dir = tempdir().expect("temp dir");
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("integration-file")
        .console(false)
        .path(&log_dir)
        .rotation(Rotation::NEVER)
        .max_files(2)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!(event = "boot", "file logging smoke entry");
    std::thread::sleep(Duration::from_millis(20));
    logger.flush();
    drop(logger);

    let wrote_log = std::fs::read_dir(&log_dir)
        .expect("log dir should exist")
        .flatten()
        .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));
    assert!(wrote_log, "expected a rolling log file on disk");
}
