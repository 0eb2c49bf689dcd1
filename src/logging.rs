//! Logging bootstrap.
//!
//! Provides a one-shot structured-logging initialization driven by an
//! explicit [`LoggingConfig`]. The only environment lookup happens in
//! [`LoggingConfig::from_env`], at configuration time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logging level
///
/// Parses from keywords ("debug", "info", ...) and from the classic
/// numeric severity codes (10, 20, 30, 40, 50).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Verbose diagnostics
    Debug,
    /// Normal operation
    Info,
    /// Recoverable problems
    Warn,
    /// Failures
    Error,
    /// Unrecoverable failures
    Critical,
}

impl Level {
    /// Look up a level by its numeric severity code
    pub fn from_severity(code: u32) -> Option<Self> {
        match code {
            10 => Some(Self::Debug),
            20 => Some(Self::Info),
            30 => Some(Self::Warn),
            40 => Some(Self::Error),
            50 => Some(Self::Critical),
            _ => None,
        }
    }

    /// The numeric severity code of this level
    pub fn severity(self) -> u32 {
        match self {
            Self::Debug => 10,
            Self::Info => 20,
            Self::Warn => 30,
            Self::Error => 40,
            Self::Critical => 50,
        }
    }

    fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            // tracing has no level above ERROR
            Self::Error | Self::Critical => tracing::Level::ERROR,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u32>() {
            return Self::from_severity(code).ok_or_else(|| format!("Unknown severity: {}", code));
        }
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err(format!("Unknown logging level: {}", s)),
        }
    }
}

/// Configuration for the logging bootstrap
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default severity level.
    pub level: Level,
    /// Whether to include the event's module path.
    pub with_target: bool,
    /// Whether to include source line numbers.
    pub with_line_number: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            with_target: true,
            with_line_number: true,
        }
    }
}

impl LoggingConfig {
    /// Create a configuration with the given default level
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Build a configuration with the default level taken from `var`
    ///
    /// The variable is read exactly once, here. An unset or unparseable
    /// value falls back to [`Level::Info`].
    pub fn from_env(var: &str) -> Self {
        let level = std::env::var(var)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        Self::new(level)
    }
}

/// Initialize logging from the given configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support on top of the configured level
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(config.level.as_tracing().into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(config.with_target)
        .with_level(true)
        .with_line_number(config.with_line_number)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_keyword_parsing() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Critical".parse::<Level>().unwrap(), Level::Critical);
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_numeric_parsing() {
        assert_eq!("10".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("40".parse::<Level>().unwrap(), Level::Error);
        assert!("15".parse::<Level>().is_err());
    }

    #[test]
    fn test_severity_round_trip() {
        for level in [
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Critical,
        ] {
            assert_eq!(Level::from_severity(level.severity()), Some(level));
        }
    }

    #[test]
    fn test_level_serde_uses_keywords() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"warn\"");
        let level: Level = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(level, Level::Critical);
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("SIGKIT_TEST_LEVEL_SET", "debug");
        assert_eq!(
            LoggingConfig::from_env("SIGKIT_TEST_LEVEL_SET").level,
            Level::Debug
        );

        std::env::set_var("SIGKIT_TEST_LEVEL_BAD", "loud");
        assert_eq!(
            LoggingConfig::from_env("SIGKIT_TEST_LEVEL_BAD").level,
            Level::Info
        );

        assert_eq!(
            LoggingConfig::from_env("SIGKIT_TEST_LEVEL_UNSET").level,
            Level::Info
        );
    }
}
