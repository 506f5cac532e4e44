// Settings validation

use crate::{ConfigError, CurlSettings, Result};
use http::HeaderName;

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Configuration validator with rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a value is a legal HTTP header name
    pub fn is_header_name(value: &str, field: &str) -> Result<()> {
        Self::not_empty(value, field)?;
        if HeaderName::from_bytes(value.as_bytes()).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "{} contains an invalid header name: {}",
                field, value
            )));
        }
        Ok(())
    }
}

impl Validate for CurlSettings {
    fn validate(&self) -> Result<()> {
        for name in &self.excluded_headers {
            ConfigValidator::is_header_name(name, "excluded_headers")?;
        }
        for name in &self.masked_headers {
            ConfigValidator::is_header_name(name, "masked_headers")?;
            if self.excluded_headers.contains(name) {
                tracing::warn!(
                    header = %name,
                    "Header is both excluded and masked, exclusion takes precedence"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty_validation() {
        assert!(ConfigValidator::not_empty("value", "field").is_ok());
        assert!(ConfigValidator::not_empty("", "field").is_err());
        assert!(ConfigValidator::not_empty("  ", "field").is_err());
    }

    #[test]
    fn test_header_name_validation() {
        assert!(ConfigValidator::is_header_name("Authorization", "field").is_ok());
        assert!(ConfigValidator::is_header_name("X-Api-Key", "field").is_ok());
        assert!(ConfigValidator::is_header_name("Bad Header", "field").is_err());
        assert!(ConfigValidator::is_header_name("Bad:Header", "field").is_err());
    }

    #[test]
    fn test_settings_validation() {
        let valid = CurlSettings {
            excluded_headers: vec!["Authorization".into()],
            masked_headers: vec!["Cookie".into()],
            ..Default::default()
        };
        assert!(valid.validate().is_ok());

        let invalid = CurlSettings {
            masked_headers: vec!["".into()],
            ..Default::default()
        };
        assert!(matches!(
            invalid.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
