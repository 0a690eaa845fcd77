use super::*;
use tracing::Level;

#[test]
fn test_parse_levels() {
    for (raw, expected) in [
        ("trace", Level::TRACE),
        ("DEBUG", Level::DEBUG),
        (" info ", Level::INFO),
        ("warning", Level::WARN),
        ("error", Level::ERROR),
    ] {
        let config = LoggerConfig::default().with_level(raw);
        assert_eq!(config.parse_level().unwrap(), expected, "level {raw}");
    }
}

#[test]
fn test_invalid_level_rejected() {
    let result = LoggerConfig::new(ConsoleConfig::default(), "loud".to_string());
    assert!(result.is_err());
}

#[test]
fn test_new_trims_level() {
    let config = LoggerConfig::new(ConsoleConfig::default(), "  warn\t".to_string()).unwrap();
    assert_eq!(config.level, "warn");
    assert_eq!(config.parse_level().unwrap(), Level::WARN);
}

#[test]
fn test_directive_accepted() {
    let config = LoggerConfig::new(
        ConsoleConfig::default(),
        "vuowma_forwarder=trace,reqwest=info".to_string(),
    );
    assert!(config.is_ok());
}

#[test]
fn test_log_format_from_str() {
    assert_eq!("full".parse::<LogFormat>().unwrap(), LogFormat::Full);
    assert_eq!("Compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert!("yaml".parse::<LogFormat>().is_err());
}

#[test]
fn test_console_defaults() {
    let console = ConsoleConfig::default();
    assert!(console.colored);
    assert_eq!(console.format, LogFormat::Full);
}

#[test]
fn test_build_filter_plain_level() {
    assert_eq!(build_filter("debug").to_string(), "debug");
}
