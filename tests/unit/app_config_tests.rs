/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use subtext::app_config::{CacheConfig, Config, LogLevel};
use subtext::converter::OutputKind;

/// Test default configuration values
#[test]
fn test_default_config_withNoOverrides_shouldUseExpectedValues() {
    let config = Config::default();

    assert_eq!(config.language, "en");
    assert_eq!(config.format, OutputKind::Transcript);
    assert_eq!(config.cache.directory, "subtitle_cache");
    assert_eq!(config.cache.retention_hours, 24);
    assert_eq!(config.cache.max_cached_files, 100);
    assert!(config.cache.auto_cleanup);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default configuration validates
#[test]
fn test_validate_withDefaultConfig_shouldSucceed() -> Result<()> {
    Config::default().validate()
}

/// Test validation failures on bad values
#[test]
fn test_validate_withBadValues_shouldFail() {
    let mut config = Config::default();
    config.language = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.cache.directory = String::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.cache.retention_hours = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.cache.max_cached_files = 0;
    assert!(config.validate().is_err());
}

/// Test deserializing a config with every field present
#[test]
fn test_deserialize_withFullJson_shouldLoadAllFields() -> Result<()> {
    let json = r#"{
        "language": "vi",
        "format": "reading",
        "cache": {
            "directory": "converted",
            "retention_hours": 48,
            "max_cached_files": 10,
            "auto_cleanup": false
        },
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json)?;
    assert_eq!(config.language, "vi");
    assert_eq!(config.format, OutputKind::Reading);
    assert_eq!(config.cache.directory, "converted");
    assert_eq!(config.cache.retention_hours, 48);
    assert_eq!(config.cache.max_cached_files, 10);
    assert!(!config.cache.auto_cleanup);
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test that omitted fields fall back to defaults
#[test]
fn test_deserialize_withEmptyJson_shouldUseDefaults() -> Result<()> {
    let config: Config = serde_json::from_str("{}")?;

    assert_eq!(config.language, "en");
    assert_eq!(config.format, OutputKind::Transcript);
    assert_eq!(config.cache.retention_hours, 24);
    Ok(())
}

/// Test config serialization round-trip
#[test]
fn test_serialize_withModifiedConfig_shouldRoundTrip() -> Result<()> {
    let config = Config {
        language: "fr".to_string(),
        format: OutputKind::Reading,
        cache: CacheConfig {
            directory: "cache".to_string(),
            retention_hours: 12,
            max_cached_files: 5,
            auto_cleanup: false,
        },
        log_level: LogLevel::Warn,
    };

    let json = serde_json::to_string_pretty(&config)?;
    let restored: Config = serde_json::from_str(&json)?;

    assert_eq!(restored.language, "fr");
    assert_eq!(restored.format, OutputKind::Reading);
    assert_eq!(restored.cache.retention_hours, 12);
    assert_eq!(restored.log_level, LogLevel::Warn);
    Ok(())
}
