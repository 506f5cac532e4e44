// Serializable curl logging settings

use crate::{ConfigError, Result};
use curlify_core::{CurlConfig, TracingLogger};
use serde::{Deserialize, Serialize};

/// Level the curl command is logged at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, case-insensitively.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::ParseError(format!(
                "Unknown log level: {}",
                other
            ))),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Curl logging settings as stored in configuration files.
///
/// ```toml
/// excluded_headers = ["Authorization"]
/// masked_headers = ["Cookie"]
/// log_level = "info"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurlSettings {
    pub excluded_headers: Vec<String>,
    pub masked_headers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

impl CurlSettings {
    /// Overlay another set of settings on top of this one.
    ///
    /// Header lists are unioned and the other log level wins when set.
    pub fn merge(&mut self, other: CurlSettings) {
        for name in other.excluded_headers {
            if !self.excluded_headers.contains(&name) {
                self.excluded_headers.push(name);
            }
        }
        for name in other.masked_headers {
            if !self.masked_headers.contains(&name) {
                self.masked_headers.push(name);
            }
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }

    /// Build a [`CurlConfig`] that logs through `tracing` at the configured level.
    pub fn into_config(self) -> CurlConfig {
        CurlConfig::builder()
            .logger(TracingLogger::with_level(self.log_level.unwrap_or_default().into()))
            .excluded_headers(self.excluded_headers)
            .masked_headers(self.masked_headers)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("INFO").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::parse("warning").unwrap(), LogLevel::Warn);
        assert!(LogLevel::parse("loud").is_err());
    }

    #[test]
    fn test_merge_unions_headers() {
        let mut base = CurlSettings {
            excluded_headers: vec!["Authorization".into()],
            masked_headers: vec!["Cookie".into()],
            log_level: Some(LogLevel::Debug),
        };
        base.merge(CurlSettings {
            excluded_headers: vec!["Authorization".into(), "X-Trace".into()],
            masked_headers: vec![],
            log_level: Some(LogLevel::Info),
        });

        assert_eq!(base.excluded_headers, vec!["Authorization", "X-Trace"]);
        assert_eq!(base.masked_headers, vec!["Cookie"]);
        assert_eq!(base.log_level, Some(LogLevel::Info));

        base.merge(CurlSettings::default());
        assert_eq!(base.log_level, Some(LogLevel::Info));
    }

    #[test]
    fn test_into_config() {
        let config = CurlSettings {
            excluded_headers: vec!["Authorization".into()],
            masked_headers: vec!["Cookie".into()],
            log_level: Some(LogLevel::Warn),
        }
        .into_config();

        assert!(config.excluded_headers().contains("Authorization"));
        assert!(config.masked_headers().contains("Cookie"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let settings: CurlSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CurlSettings::default());
        assert_eq!(settings.log_level, None);
        assert_eq!(settings.log_level.unwrap_or_default(), LogLevel::Debug);
    }
}
