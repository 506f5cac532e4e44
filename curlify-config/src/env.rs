// Environment variable loading

use crate::{ConfigError, CurlSettings, LogLevel, Result};
use std::env;

/// Default variable prefix.
pub const DEFAULT_PREFIX: &str = "CURLIFY";

/// Reads curl settings from `<PREFIX>_EXCLUDED_HEADERS`,
/// `<PREFIX>_MASKED_HEADERS` (comma-separated) and `<PREFIX>_LOG_LEVEL`.
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load settings from the process environment
    ///
    /// Variables that are not valid unicode are skipped.
    pub fn load(&self) -> Result<CurlSettings> {
        self.load_from(
            env::vars_os()
                .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?))),
        )
    }

    /// Load settings from an explicit set of variables
    pub fn load_from<I, K, V>(&self, vars: I) -> Result<CurlSettings>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = CurlSettings::default();

        for (key, value) in vars {
            let Some(name) = self.strip_prefix(key.as_ref()) else {
                continue;
            };
            let value = value.as_ref();

            match name.as_str() {
                "EXCLUDED_HEADERS" => settings.excluded_headers = split_list(value),
                "MASKED_HEADERS" => settings.masked_headers = split_list(value),
                "LOG_LEVEL" => settings.log_level = Some(LogLevel::parse(value)?),
                _ => {}
            }
        }

        Ok(settings)
    }

    /// Load a specific environment variable
    pub fn load_var(&self, key: &str) -> Result<String> {
        let full_key = format!("{}_{}", self.prefix, key.to_uppercase());
        env::var(&full_key).map_err(ConfigError::EnvError)
    }

    fn strip_prefix(&self, key: &str) -> Option<String> {
        let key = key.to_uppercase();
        key.strip_prefix(&self.prefix.to_uppercase())
            .and_then(|rest| rest.strip_prefix('_'))
            .map(str::to_string)
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
