//! # Curlify HTTP Client
//!
//! A reqwest-backed HTTP client that hands an immutable snapshot of every
//! outgoing request to registered observers before it is sent. The built-in
//! [`CurlInterceptor`] logs each request as an equivalent `curl` command.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use curlify_core::{CurlConfig, TracingLogger};
//! use curlify_http_client::{HttpClient, HttpClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpClientConfig::builder()
//!         .curl_logging(
//!             CurlConfig::builder()
//!                 .logger(TracingLogger::new())
//!                 .mask_header("Authorization")
//!                 .build(),
//!         )
//!         .build();
//!
//!     let client = HttpClient::new(config)?;
//!
//!     // Logs: curl -X POST -H "Authorization: [masked]" -H "Content-Type: application/json" ...
//!     let response = client
//!         .post("https://api.example.com/orders")
//!         .bearer_auth("secret")
//!         .json(&serde_json::json!({"item": "widget", "quantity": 5}))
//!         .send()
//!         .await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Observers
//!
//! ```rust,no_run
//! use curlify_core::RequestSnapshot;
//! use curlify_http_client::HttpClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::default_client()?
//!     .with_observer(|request: &RequestSnapshot| println!("-> {}", request.url()));
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod interceptor;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use interceptor::{CurlInterceptor, RequestObserver, STREAM_BODY_PLACEHOLDER, snapshot_request};
pub use request::RequestBuilder;
pub use response::Response;

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use reqwest::multipart;
pub use url::Url;

/// Prelude for common imports.
///
/// ```
/// use curlify_http_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::HttpClient;
    pub use crate::config::{HttpClientConfig, HttpClientConfigBuilder};
    pub use crate::error::{HttpClientError, Result};
    pub use crate::interceptor::{CurlInterceptor, RequestObserver};
    pub use crate::request::RequestBuilder;
    pub use crate::response::Response;
    pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
}
