use std::fs;

use log::LevelFilter;
use scout_logging::{initialize, scout_info, LogDestination};
use tempfile::TempDir;

// The global logger can be set once per process, so this file holds a single test.
#[test]
fn both_destinations_write_to_the_log_file() {
    let temp = TempDir::new().unwrap();
    let log_file = temp.path().join("lead-scout.log");

    initialize(LogDestination::Both, LevelFilter::Info, &log_file);
    scout_info!("combined logger ready");

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("combined logger ready"));
}
