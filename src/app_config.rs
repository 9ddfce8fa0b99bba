use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and overriding configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Output table settings
    #[serde(default)]
    pub output: OutputConfig,

    /// File extension picked up when an input path is a directory
    #[serde(default = "default_input_extension")]
    pub input_extension: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Delimited output format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Comma separated
    #[default]
    Csv,
    // @format: Tab separated
    Tsv,
}

impl OutputFormat {
    // @returns: Field delimiter byte for the csv writer
    pub fn delimiter(&self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }

    // @returns: Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" | "tab" => Ok(Self::Tsv),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Output table configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Output file path
    #[serde(default = "default_output_path")]
    pub path: String,

    /// Comma or tab delimited
    #[serde(default)]
    pub format: OutputFormat,

    /// Keep only the first row per term
    #[serde(default)]
    pub unique: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: OutputFormat::default(),
            unique: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the `log` crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_path() -> String {
    "vocab_tr.csv".to_string()
}

fn default_input_extension() -> String {
    "docx".to_string()
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load the configuration file if it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.output.path.trim().is_empty() {
            return Err(anyhow!("Output path must not be empty"));
        }

        if self.input_extension.trim_start_matches('.').is_empty() {
            return Err(anyhow!("Input extension must not be empty"));
        }

        // A mismatched extension still gets written, the user may want it that way
        let declared = Path::new(&self.output.path)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());
        if let Some(ext) = declared {
            if (ext == "csv" || ext == "tsv") && ext != self.output.format.extension() {
                warn!(
                    "Output path '{}' does not match the {} format",
                    self.output.path, self.output.format
                );
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
            input_extension: default_input_extension(),
            log_level: LogLevel::default(),
        }
    }
}
