use std::fs;
use std::time::Duration;
use syd_domain::config::LoggingSettings;
use syd_logger::Logger;
use tempfile::tempdir;

#[test]
fn settings_with_directory_write_json_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let settings = LoggingSettings {
        console: false,
        level: "info".to_owned(),
        json: true,
        directory: Some(log_dir.clone()),
        filter: Some("info".to_owned()),
        ..LoggingSettings::default()
    };

    let logger = Logger::from_settings("integration-file-logging", &settings, 0)?;
    assert!(logger.guard().is_some());

    tracing::info!(flag = "PRACTICE_ADOPTION", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("\"flag\":\"PRACTICE_ADOPTION\""), "json fields expected: {contents}");

    Ok(())
}
