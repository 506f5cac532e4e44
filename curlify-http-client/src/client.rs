//! HTTP client implementation.

use http::Method;
use reqwest::Request;
use std::sync::Arc;
use tracing::debug;

use crate::{
    CurlInterceptor, HttpClientConfig, HttpClientError, RequestBuilder, RequestObserver, Response,
    Result, snapshot_request,
};
use curlify_core::RequestSnapshot;

/// HTTP client that shows every outgoing request to its observers before sending it.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<HttpClientConfig>,
    observers: Vec<Arc<dyn RequestObserver>>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    ///
    /// When the configuration carries curl settings, a [`CurlInterceptor`]
    /// is registered as the first observer.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.gzip)
            .brotli(config.brotli);

        if config.follow_redirects {
            builder = builder.redirect(reqwest::redirect::Policy::limited(config.max_redirects));
        } else {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }

        let inner = builder
            .build()
            .map_err(|e| HttpClientError::ClientBuild(e.to_string()))?;

        let mut observers: Vec<Arc<dyn RequestObserver>> = Vec::new();
        if let Some(curl) = &config.curl {
            observers.push(Arc::new(CurlInterceptor::new(curl.clone())));
        }

        Ok(Self {
            inner,
            config: Arc::new(config),
            observers,
        })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(HttpClientConfig::default())
    }

    /// Register an observer. Observers run in registration order.
    pub fn with_observer<O: RequestObserver + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Get the underlying reqwest client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Get the client configuration.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::GET, url.into())
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::POST, url.into())
    }

    /// Create a PUT request builder.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::PUT, url.into())
    }

    /// Create a PATCH request builder.
    pub fn patch(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::PATCH, url.into())
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::DELETE, url.into())
    }

    /// Create a HEAD request builder.
    pub fn head(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::HEAD, url.into())
    }

    /// Create a request builder with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, method, url.into())
    }

    /// Execute a request built directly with reqwest.
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let snapshot = snapshot_request(&request);
        self.dispatch(snapshot, request).await
    }

    /// Notify observers, then send.
    pub(crate) async fn dispatch(
        &self,
        snapshot: RequestSnapshot,
        request: Request,
    ) -> Result<Response> {
        for observer in &self.observers {
            observer.before_send(&snapshot).await;
        }

        debug!(
            method = %request.method(),
            url = %request.url(),
            "Sending HTTP request"
        );

        let response = self.inner.execute(request).await?;
        let response = Response::read(response).await?;

        debug!(status = %response.status(), "Received HTTP response");

        Ok(response)
    }
}
