//! Subscriber setup for structured logs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
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
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// One step more verbose per `-v`.
    pub fn raised_by(self, steps: u8) -> Self {
        const LADDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = LADDER.iter().position(|l| *l == self).unwrap_or(1);
        LADDER[(current + steps as usize).min(LADDER.len() - 1)]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ObservabilityError::InvalidLevel(other.to_string())),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines, for log aggregation.
    Json,
    /// Human-readable, for terminals.
    #[default]
    Human,
}

#[derive(Error, Debug)]
pub enum ObservabilityError {
    #[error("Unknown log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Logging already initialised: {0}")]
    AlreadyInitialized(String),
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Extra `target=level` directives appended to the filter.
    pub directives: Vec<String>,
    /// Let `RUST_LOG` replace the configured filter.
    pub respect_env: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            directives: Vec::new(),
            respect_env: true,
        }
    }
}

impl LogConfig {
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// The filter string handed to the subscriber.
    pub fn filter_directives(&self) -> String {
        std::iter::once(self.level.as_str().to_string())
            .chain(self.directives.iter().map(|d| d.trim().to_string()))
            .filter(|d| !d.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn env_filter(&self) -> Result<EnvFilter, ObservabilityError> {
        if self.respect_env {
            if let Ok(filter) = EnvFilter::try_from_default_env() {
                return Ok(filter);
            }
        }
        EnvFilter::try_new(self.filter_directives())
            .map_err(|e| ObservabilityError::InvalidFilter(e.to_string()))
    }
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
pub fn init_logging(config: &LogConfig) -> Result<(), ObservabilityError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
        LogFormat::Human => builder.compact().with_target(false).try_init(),
    };
    result.map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_verbosity_ladder() {
        assert_eq!(LogLevel::Warn.raised_by(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised_by(1), LogLevel::Info);
        assert_eq!(LogLevel::Warn.raised_by(2), LogLevel::Debug);
        assert_eq!(LogLevel::Warn.raised_by(9), LogLevel::Trace);
    }

    #[test]
    fn test_filter_directives() {
        let config = LogConfig {
            directives: vec!["turbo_store=trace".to_string(), " ".to_string()],
            ..LogConfig::default().with_level(LogLevel::Info)
        };
        assert_eq!(config.filter_directives(), "info,turbo_store=trace");
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: LogConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, LogLevel::Warn);
        assert!(config.respect_env);
    }

    #[test]
    fn test_bad_directive_is_error() {
        let config = LogConfig {
            directives: vec!["turbo_store=loudest".to_string()],
            respect_env: false,
            ..LogConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(ObservabilityError::InvalidFilter(_))
        ));
    }
}
