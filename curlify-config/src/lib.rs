// Configuration loading for curlify

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::{DEFAULT_PREFIX, EnvLoader};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{CurlSettings, LogLevel};
pub use validation::{ConfigValidator, Validate};

use curlify_core::CurlConfig;
use std::path::Path;

/// Load settings from an optional file, then overlay `CURLIFY_*` variables.
///
/// The result is validated before it is returned.
pub fn load_settings(path: Option<&Path>) -> Result<CurlSettings> {
    let mut settings = match path {
        Some(path) => ConfigLoader::auto(path)?.load_file(path)?,
        None => CurlSettings::default(),
    };

    settings.merge(EnvLoader::default().load()?);

    settings.validate()?;
    Ok(settings)
}

/// Load settings as with [`load_settings`] and build a [`CurlConfig`].
pub fn load_config(path: Option<&Path>) -> Result<CurlConfig> {
    Ok(load_settings(path)?.into_config())
}
