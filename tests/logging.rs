//! Integration test for installing the global logging subscriber.

use testresult::TestResult;

use checkout::logging::{LogFormat, LoggingConfig, LoggingError, init_subscriber};

#[test]
fn init_subscriber_installs_once() -> TestResult {
    let config = LoggingConfig {
        log_level: "debug".to_string(),
        log_format: LogFormat::Compact,
    };

    init_subscriber(&config)?;

    let second = init_subscriber(&LoggingConfig {
        log_level: "info".to_string(),
        log_format: LogFormat::Json,
    });

    assert!(matches!(second, Err(LoggingError::Init(_))));

    Ok(())
}
