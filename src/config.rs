#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::str::FromStr;

use tracing::Level;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "SIGSPLIT_LOG_LEVEL";
/// Environment variable holding the output format.
pub const OUTPUT_VAR: &str = "SIGSPLIT_OUTPUT";
/// Environment variable holding the default delimiter characters.
pub const DELIMITERS_VAR: &str = "SIGSPLIT_DELIMITERS";

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The output format is neither `json` nor `table`.
    #[error("Unknown output format `{0}` (expected `json` or `table`)")]
    InvalidOutputFormat(String),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// How the command line prints results.
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Human readable tables.
    Table,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// Parses the optional log level value, defaulting to `Level::INFO` when
/// unset or unrecognised.
fn parse_log_level(val: Option<String>) -> Level {
    match val
        .map(|s| s.trim().to_ascii_lowercase())
        .as_deref()
        .unwrap_or("info")
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Runtime settings for the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Most verbose level that gets logged.
    log_level:          Level,
    /// Format used to print results.
    output:             OutputFormat,
    /// Delimiters used by `split` when none are passed explicitly.
    default_delimiters: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level:          Level::INFO,
            output:             OutputFormat::Json,
            default_delimiters: vec![" ".to_string()],
        }
    }
}

impl Config {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = parse_log_level(lookup(LOG_LEVEL_VAR));
        let output = match lookup(OUTPUT_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => defaults.output,
        };
        let default_delimiters = match lookup(DELIMITERS_VAR) {
            Some(value) if !value.is_empty() => value.chars().map(String::from).collect(),
            _ => defaults.default_delimiters,
        };

        Ok(Self {
            log_level,
            output,
            default_delimiters,
        })
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Returns the configured output format.
    pub fn output(&self) -> OutputFormat {
        self.output
    }

    /// Returns the delimiters `split` falls back to.
    pub fn default_delimiters(&self) -> &[String] {
        self.default_delimiters.as_slice()
    }
}
