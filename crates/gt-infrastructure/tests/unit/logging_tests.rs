//! Logging setup tests

use gt_infrastructure::config::LoggingConfig;
use gt_infrastructure::logging::{init_logging, log_health_check, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };

    assert!(init_logging(&config).is_err());
}

#[test]
fn test_second_initialization_fails_instead_of_panicking() {
    let config = LoggingConfig::default();

    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());

    log_health_check("cache", true, None);
    log_health_check("cache", false, Some("connection refused"));
}
