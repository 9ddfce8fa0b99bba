/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::str::FromStr;
use vocab_tr::app_config::{Config, LogLevel, OutputFormat};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.output.path, "vocab_tr.csv");
    assert_eq!(config.output.format, OutputFormat::Csv);
    assert!(!config.output.unique);
    assert_eq!(config.input_extension, "docx");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.output.path = "  ".to_string();
    assert!(config.validate().is_err());
    config.output.path = "out/vocab.tsv".to_string();

    config.input_extension = ".".to_string();
    assert!(config.validate().is_err());
    config.input_extension = "docx".to_string();

    // Mismatched extension is only a warning
    config.output.format = OutputFormat::Csv;
    assert!(config.validate().is_ok());
}

#[test]
fn test_outputFormat_shouldMapToDelimiters() {
    assert_eq!(OutputFormat::Csv.delimiter(), b',');
    assert_eq!(OutputFormat::Tsv.delimiter(), b'\t');
    assert_eq!(OutputFormat::Tsv.to_string(), "tsv");
}

#[test]
fn test_outputFormat_fromStr_shouldParseKnownNames() {
    assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
    assert_eq!(OutputFormat::from_str("tab").unwrap(), OutputFormat::Tsv);
    assert!(OutputFormat::from_str("xlsx").is_err());
}

#[test]
fn test_logLevel_shouldConvertToLevelFilter() {
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
}

#[test]
fn test_fromFile_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "vocab.json",
        r#"{ "output": { "format": "tsv", "unique": true }, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.output.format, OutputFormat::Tsv);
    assert!(config.output.unique);
    assert_eq!(config.output.path, "vocab_tr.csv");
    assert_eq!(config.input_extension, "docx");
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

#[test]
fn test_fromFile_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "vocab.json", "{ output: ")?;
    assert!(Config::from_file(&path).is_err());
    Ok(())
}

#[test]
fn test_loadOrDefault_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let config = Config::load_or_default("no_such_config_12345.json")?;
    assert_eq!(config.output.path, "vocab_tr.csv");
    Ok(())
}

#[test]
fn test_config_serialization_shouldRoundTripThroughJson() -> Result<()> {
    let mut config = Config::default();
    config.output.format = OutputFormat::Tsv;

    let json = serde_json::to_string(&config)?;
    assert!(json.contains("\"tsv\""));

    let parsed: Config = serde_json::from_str(&json)?;
    assert_eq!(parsed.output.format, OutputFormat::Tsv);
    Ok(())
}
