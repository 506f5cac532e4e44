//! Sinks for generated curl commands.

use tracing::Level;

/// Receives each generated curl command.
pub trait CurlLogger: Send + Sync {
    /// Log a curl command.
    fn log(&self, curl: &str);
}

/// Logger that discards everything. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl CurlLogger for NoopLogger {
    fn log(&self, _curl: &str) {}
}

/// Logger that emits each command as a `tracing` event under the `curlify` target.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    level: Level,
}

impl TracingLogger {
    /// Create a logger emitting at `DEBUG`.
    pub fn new() -> Self {
        Self {
            level: Level::DEBUG,
        }
    }

    /// Create a logger emitting at the given level.
    pub fn with_level(level: Level) -> Self {
        Self { level }
    }

    /// Get the level events are emitted at.
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl CurlLogger for TracingLogger {
    fn log(&self, curl: &str) {
        // event! needs a constant level
        match self.level {
            Level::TRACE => tracing::trace!(target: "curlify", curl = %curl, "curl command"),
            Level::DEBUG => tracing::debug!(target: "curlify", curl = %curl, "curl command"),
            Level::INFO => tracing::info!(target: "curlify", curl = %curl, "curl command"),
            Level::WARN => tracing::warn!(target: "curlify", curl = %curl, "curl command"),
            _ => tracing::error!(target: "curlify", curl = %curl, "curl command"),
        }
    }
}

impl<F> CurlLogger for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, curl: &str) {
        self(curl)
    }
}
