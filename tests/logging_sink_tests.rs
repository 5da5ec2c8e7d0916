// The global subscriber can only be installed once per process, so this
// binary holds a single test.

use fileman::FileManager;
use fileman::app::config::LoggingConfig;
use fileman::util::logging;
use std::fs;
use std::io::Write;

fn error_lines(text: &str) -> usize {
    text.lines().filter(|line| line.contains(" ERROR ")).count()
}

#[test]
fn test_log_file_keeps_errors_only_and_appends() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        directory: temp_dir.path().join("logs"),
        ..LoggingConfig::default()
    };
    let log_path = config.directory.join(&config.file_name);

    // Step 1: install the logger and emit one info and one error record
    let guard = logging::init(&config, false).unwrap();
    tracing::info!("info-line");
    let missing = temp_dir.path().join("nope.csv");
    assert!(FileManager::new(&missing).unwrap_err().is_not_found());
    drop(guard);

    let first = fs::read_to_string(&log_path).unwrap();
    assert_eq!(error_lines(&first), 1);
    assert!(!first.contains(" INFO "));
    assert!(!first.contains("info-line"));
    assert!(first.contains("nope.csv"));
    assert!(first.contains("operation=\"new\""));
    assert!(first.contains("file_manager{path="));

    // Step 2: a second init is refused but must not truncate the file
    assert!(logging::init(&config, false).is_err());
    assert_eq!(fs::read_to_string(&log_path).unwrap(), first);

    // Step 3: reopening the sink appends after the existing records
    let mut appender = logging::open_log_file(&config).unwrap();
    writeln!(appender, "second run").unwrap();
    appender.flush().unwrap();

    let second = fs::read_to_string(&log_path).unwrap();
    assert!(second.starts_with(&first));
    assert_eq!(second.lines().count(), first.lines().count() + 1);
    assert!(second.ends_with("second run\n"));
}
