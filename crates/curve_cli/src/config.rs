//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use curve_core::curve::{DEFAULT_SAMPLE_COUNT, MIN_SAMPLE_COUNT};
use curve_core::sampling::DEFAULT_SENSITIVITY;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable for the log level.
pub const ENV_LOG_LEVEL: &str = "CURVE_LOG_LEVEL";
/// Environment variable for the fixed-grid sample count.
pub const ENV_SAMPLE_COUNT: &str = "CURVE_SAMPLE_COUNT";
/// Environment variable for the adaptive sampler sensitivity.
pub const ENV_SENSITIVITY: &str = "CURVE_SENSITIVITY";
/// Environment variable for the output format.
pub const ENV_OUTPUT_FORMAT: &str = "CURVE_OUTPUT_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: json, table")]
    InvalidOutputFormat(String),

    #[error("Invalid sample count: {0}. Must be at least {min}", min = MIN_SAMPLE_COUNT)]
    InvalidSampleCount(usize),

    #[error("Invalid sensitivity: {0}. Must be a positive finite number")]
    InvalidSensitivity(f64),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Verbosity accepted by `--log-level` and `CURVE_LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Every level, most verbose first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Directive handed to `EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_filter_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

impl OutputFormat {
    /// Every format.
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::Table];

    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidOutputFormat(s.to_string()))
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Fixed-grid sample count
    pub sample_count: usize,
    /// Adaptive sampler sensitivity
    pub sensitivity: f64,
    /// Output format
    pub output_format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            sample_count: DEFAULT_SAMPLE_COUNT,
            sensitivity: DEFAULT_SENSITIVITY,
            output_format: OutputFormat::Json,
        }
    }
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count < MIN_SAMPLE_COUNT {
            return Err(ConfigError::InvalidSampleCount(self.sample_count));
        }
        if !(self.sensitivity.is_finite() && self.sensitivity > 0.0) {
            return Err(ConfigError::InvalidSensitivity(self.sensitivity));
        }
        Ok(())
    }

    /// Override fields whose environment variable is set
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(log_level) = std::env::var(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Ok(count) = std::env::var(ENV_SAMPLE_COUNT) {
            self.sample_count = count
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={}", ENV_SAMPLE_COUNT, count)))?;
        }

        if let Ok(sensitivity) = std::env::var(ENV_SENSITIVITY) {
            self.sensitivity = sensitivity.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{}={}", ENV_SENSITIVITY, sensitivity))
            })?;
        }

        if let Ok(format) = std::env::var(ENV_OUTPUT_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(count) = cli.sample_count {
            self.sample_count = count;
        }
        if let Some(sensitivity) = cli.sensitivity {
            self.sensitivity = sensitivity;
        }
        if let Some(format) = &cli.output_format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Sample count override
    pub sample_count: Option<usize>,
    /// Sensitivity override
    pub sensitivity: Option<f64>,
    /// Output format override
    pub output_format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.sample_count, 200);
        assert_eq!(config.sensitivity, 1.0);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_names_parse_back() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
        assert_eq!(LogLevel::from_str(" info ").unwrap(), LogLevel::Info);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("csv"),
            Err(ConfigError::InvalidOutputFormat(_))
        ));
    }

    #[test]
    fn test_validate_sample_count() {
        let mut config = CliConfig::default();
        config.sample_count = 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSampleCount(1))
        ));

        config.sample_count = 2;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_sensitivity() {
        let mut config = CliConfig::default();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            config.sensitivity = bad;
            assert!(config.validate().is_err());
        }

        config.sensitivity = 0.25;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LogLevel::Debug), "debug");
        assert_eq!(format!("{}", OutputFormat::Table), "table");
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("debug".to_string()),
            sample_count: Some(50),
            sensitivity: Some(10.0),
            output_format: Some("table".to_string()),
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.sample_count, 50);
        assert_eq!(config.sensitivity, 10.0);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_cli_args_merge_rejects_bad_format() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            output_format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert!(config.merge_with_cli(&cli).is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            sample_count = 64
            sensitivity = 5.0
            output_format = "table"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.sample_count, 64);
        assert_eq!(config.sensitivity, 5.0);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            sensitivity = 20.0
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.sample_count, 200);
        assert_eq!(config.sensitivity, 20.0);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_toml_rejects_bad_level() {
        let result: Result<CliConfig, _> = toml::from_str(r#"log_level = "loud""#);
        assert!(result.is_err());

        let result: Result<CliConfig, _> = toml::from_str(r#"output_format = "csv""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("curvectl-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "sample_count = 12").unwrap();
        drop(file);

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.sample_count, 12);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing() {
        let result = CliConfig::from_file(Path::new("/nonexistent/curvectl.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_build_config_with_defaults() {
        // Clear any environment variables that might interfere
        std::env::remove_var(ENV_LOG_LEVEL);
        std::env::remove_var(ENV_SAMPLE_COUNT);
        std::env::remove_var(ENV_SENSITIVITY);
        std::env::remove_var(ENV_OUTPUT_FORMAT);

        let config = build_config(&CliArgs::default()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_build_config_cli_validated() {
        let cli = CliArgs {
            sample_count: Some(0),
            ..Default::default()
        };
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidSampleCount(1);
        assert!(err.to_string().contains("at least 2"));

        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::InvalidSensitivity(-1.0);
        assert!(err.to_string().contains("sensitivity"));
    }
}
