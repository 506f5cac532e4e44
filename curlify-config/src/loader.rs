// Configuration file loaders

use crate::{ConfigError, CurlSettings, EnvLoader, Result};
use std::fs;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Json,
    Toml,
    Env,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "env" => Some(FileFormat::Env),
            _ => None,
        }
    }
}

/// Configuration file loader
pub struct ConfigLoader {
    format: FileFormat,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    /// Auto-detect format from file extension
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .or_else(|| {
                // `.env` has no extension, only a file name
                path.file_name()
                    .and_then(|s| s.to_str())
                    .and_then(|name| name.strip_prefix('.'))
            })
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?;

        let format = FileFormat::from_extension(ext)
            .ok_or_else(|| ConfigError::LoadError(format!("Unsupported format: {}", ext)))?;

        Ok(Self::new(format))
    }

    /// Load settings from file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<CurlSettings> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), format = ?self.format, "Loading curl settings");
        self.parse(&content)
    }

    /// Parse settings from string
    pub fn parse(&self, content: &str) -> Result<CurlSettings> {
        match self.format {
            FileFormat::Json => self.parse_json(content),
            FileFormat::Toml => self.parse_toml(content),
            FileFormat::Env => self.parse_env(content),
        }
    }

    fn parse_json(&self, content: &str) -> Result<CurlSettings> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))
    }

    fn parse_toml(&self, content: &str) -> Result<CurlSettings> {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))
    }

    fn parse_env(&self, content: &str) -> Result<CurlSettings> {
        let vars = dotenvy::from_read_iter(content.as_bytes())
            .collect::<std::result::Result<Vec<(String, String)>, _>>()
            .map_err(|e| ConfigError::ParseError(format!("Env parse error: {}", e)))?;

        EnvLoader::default().load_from(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogLevel;

    #[test]
    fn test_parse_json() {
        let loader = ConfigLoader::new(FileFormat::Json);
        let json = r#"{"excluded_headers": ["Authorization"], "log_level": "warn"}"#;

        let settings = loader.parse(json).unwrap();
        assert_eq!(settings.excluded_headers, vec!["Authorization"]);
        assert!(settings.masked_headers.is_empty());
        assert_eq!(settings.log_level, Some(LogLevel::Warn));
    }

    #[test]
    fn test_parse_toml() {
        let loader = ConfigLoader::new(FileFormat::Toml);
        let toml = r#"
            excluded_headers = ["Authorization"]
            masked_headers = ["Cookie", "X-Api-Key"]
        "#;

        let settings = loader.parse(toml).unwrap();
        assert_eq!(settings.masked_headers, vec!["Cookie", "X-Api-Key"]);
        assert_eq!(settings.log_level, None);
    }

    #[test]
    fn test_parse_env() {
        let loader = ConfigLoader::new(FileFormat::Env);
        let env = r#"
# Comment
CURLIFY_EXCLUDED_HEADERS="Authorization,Cookie"
CURLIFY_LOG_LEVEL=error
OTHER=ignored
"#;

        let settings = loader.parse(env).unwrap();
        assert_eq!(settings.excluded_headers, vec!["Authorization", "Cookie"]);
        assert_eq!(settings.log_level, Some(LogLevel::Error));
    }

    #[test]
    fn test_parse_invalid_json() {
        let loader = ConfigLoader::new(FileFormat::Json);
        assert!(matches!(
            loader.parse("{not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_extension("json"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_extension("TOML"), Some(FileFormat::Toml));
        assert_eq!(FileFormat::from_extension("env"), Some(FileFormat::Env));
        assert_eq!(FileFormat::from_extension("yaml"), None);
    }

    #[test]
    fn test_auto_detection() {
        assert_eq!(ConfigLoader::auto("curl.toml").unwrap().format, FileFormat::Toml);
        assert_eq!(ConfigLoader::auto(".env").unwrap().format, FileFormat::Env);
        assert!(ConfigLoader::auto("settings").is_err());
        assert!(ConfigLoader::auto("settings.yaml").is_err());
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("curlify-{}.json", std::process::id()));
        fs::write(&path, r#"{"masked_headers": ["Cookie"]}"#).unwrap();

        let settings = ConfigLoader::auto(&path).unwrap().load_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(settings.masked_headers, vec!["Cookie"]);
    }

    #[test]
    fn test_load_missing_file() {
        let loader = ConfigLoader::new(FileFormat::Json);
        assert!(matches!(
            loader.load_file("/nonexistent/curlify.json"),
            Err(ConfigError::LoadError(_))
        ));
    }
}
