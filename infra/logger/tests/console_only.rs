use syd_domain::config::LoggingSettings;
use syd_logger::Logger;

#[test]
fn settings_without_directory_log_to_console_only() {
    let settings =
        LoggingSettings { console: true, directory: None, ..LoggingSettings::default() };

    let logger = Logger::from_settings("integration-console-only", &settings, 2)
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "no directory means no file writer guard");
    tracing::debug!(flag = "PRACTICE_ADOPTION", "console logging is live");
}
