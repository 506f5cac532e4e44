//! Before-send request observers.

use async_trait::async_trait;
use curlify_core::{CurlConfig, Headers, RequestBody, RequestSnapshot};
use reqwest::Request;

/// Rendering used for bodies that are streamed rather than buffered.
pub const STREAM_BODY_PLACEHOLDER: &str = "<stream>";

/// Observer invoked with an immutable snapshot before each request is sent.
///
/// Observers can log or record, but never change the outgoing request.
#[async_trait]
pub trait RequestObserver: Send + Sync {
    /// Inspect the request about to be sent.
    async fn before_send(&self, request: &RequestSnapshot);
}

#[async_trait]
impl<F> RequestObserver for F
where
    F: Fn(&RequestSnapshot) + Send + Sync,
{
    async fn before_send(&self, request: &RequestSnapshot) {
        self(request)
    }
}

/// Observer that logs each request as a curl command.
#[derive(Debug, Clone, Default)]
pub struct CurlInterceptor {
    config: CurlConfig,
}

impl CurlInterceptor {
    /// Create a curl interceptor with the given header rules and logger.
    pub fn new(config: CurlConfig) -> Self {
        Self { config }
    }

    /// Get the curl configuration.
    pub fn config(&self) -> &CurlConfig {
        &self.config
    }
}

#[async_trait]
impl RequestObserver for CurlInterceptor {
    async fn before_send(&self, request: &RequestSnapshot) {
        self.config.log_request(request);
    }
}

/// Take a snapshot of a request built directly with reqwest.
///
/// Header names are restored to `Title-Case`. Buffered bodies become
/// [`RequestBody::Bytes`], streamed bodies are rendered as `<stream>`, and a
/// `multipart/*` content type marks the body as multipart.
pub fn snapshot_request(request: &Request) -> RequestSnapshot {
    let headers = Headers::from_header_map(request.headers());

    let is_multipart = request
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().to_ascii_lowercase().starts_with("multipart/"));

    let body = match request.body() {
        None => RequestBody::Empty,
        Some(_) if is_multipart => RequestBody::Multipart,
        Some(body) => match body.as_bytes() {
            Some(bytes) => RequestBody::from(bytes),
            None => RequestBody::opaque(STREAM_BODY_PLACEHOLDER),
        },
    };

    RequestSnapshot::builder(request.method().clone(), request.url().as_str())
        .headers(headers)
        .body(body)
        .build()
}
