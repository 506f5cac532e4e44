//! Curl logging configuration.

use crate::{CurlLogger, NoopLogger, RequestSnapshot, generate_curl};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Header rules and logger sink for curl logging.
#[derive(Clone)]
pub struct CurlConfig {
    logger: Arc<dyn CurlLogger>,
    excluded_headers: HashSet<String>,
    masked_headers: HashSet<String>,
}

impl Default for CurlConfig {
    fn default() -> Self {
        Self {
            logger: Arc::new(NoopLogger),
            excluded_headers: HashSet::new(),
            masked_headers: HashSet::new(),
        }
    }
}

impl fmt::Debug for CurlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurlConfig")
            .field("excluded_headers", &self.excluded_headers)
            .field("masked_headers", &self.masked_headers)
            .finish_non_exhaustive()
    }
}

impl CurlConfig {
    /// Create a new configuration builder.
    pub fn builder() -> CurlConfigBuilder {
        CurlConfigBuilder::default()
    }

    /// Get the logger sink.
    pub fn logger(&self) -> &Arc<dyn CurlLogger> {
        &self.logger
    }

    /// Header names omitted from the command.
    pub fn excluded_headers(&self) -> &HashSet<String> {
        &self.excluded_headers
    }

    /// Header names whose values are replaced with `[masked]`.
    pub fn masked_headers(&self) -> &HashSet<String> {
        &self.masked_headers
    }

    /// Render a request with this configuration's header rules.
    pub fn render(&self, request: &RequestSnapshot) -> String {
        generate_curl(request, &self.excluded_headers, &self.masked_headers)
    }

    /// Render a request and hand the command to the logger if it is not blank.
    pub fn log_request(&self, request: &RequestSnapshot) {
        let curl = self.render(request);
        if !curl.trim().is_empty() {
            self.logger.log(&curl);
        }
    }
}

/// Builder for [`CurlConfig`].
#[derive(Debug, Default)]
pub struct CurlConfigBuilder {
    config: CurlConfig,
}

impl CurlConfigBuilder {
    /// Set the logger sink.
    pub fn logger<L: CurlLogger + 'static>(mut self, logger: L) -> Self {
        self.config.logger = Arc::new(logger);
        self
    }

    /// Set a shared logger sink.
    pub fn shared_logger(mut self, logger: Arc<dyn CurlLogger>) -> Self {
        self.config.logger = logger;
        self
    }

    /// Omit a header from the command.
    pub fn exclude_header(mut self, name: impl Into<String>) -> Self {
        self.config.excluded_headers.insert(name.into());
        self
    }

    /// Omit several headers from the command.
    pub fn excluded_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .excluded_headers
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Mask a header's values in the command.
    pub fn mask_header(mut self, name: impl Into<String>) -> Self {
        self.config.masked_headers.insert(name.into());
        self
    }

    /// Mask several headers' values in the command.
    pub fn masked_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .masked_headers
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Build the configuration.
    pub fn build(self) -> CurlConfig {
        self.config
    }
}
