//! # Curlify Core
//!
//! Renders an outgoing HTTP request as the equivalent `curl` command line,
//! for debug logging.
//!
//! ## Features
//!
//! - **Header rules**: exclude headers entirely or mask their values
//! - **Content-Type fallback**: synthesizes the header from the body's declared type
//! - **Body rendering**: text, raw bytes, empty, multipart and opaque bodies
//! - **Pluggable logging**: no-op, `tracing`, or any closure
//!
//! ## Quick Start
//!
//! ```rust
//! use curlify_core::{generate_curl, CurlConfig, Headers, Method, RequestBody, RequestSnapshot};
//!
//! let mut headers = Headers::new();
//! headers.append("Authorization", "Bearer token");
//!
//! let request = RequestSnapshot::builder(Method::POST, "https://example.com/api")
//!     .headers(headers)
//!     .body(RequestBody::from("key=value"))
//!     .build();
//!
//! let config = CurlConfig::builder().exclude_header("Authorization").build();
//! let curl = generate_curl(&request, config.excluded_headers(), config.masked_headers());
//!
//! assert_eq!(curl, r#"curl -X POST "https://example.com/api" -d 'key=value'"#);
//! ```

mod body;
mod command;
mod config;
mod headers;
mod logger;
mod request;

pub use body::{OMITTED_BODY_PLACEHOLDER, RequestBody};
pub use command::{CommandBuilder, generate_curl};
pub use config::{CurlConfig, CurlConfigBuilder};
pub use headers::{
    CONTENT_TYPE, HeaderVisitor, Headers, MASKED_PLACEHOLDER, canonical_name, visit_headers,
};
pub use logger::{CurlLogger, NoopLogger, TracingLogger};
pub use request::{RequestSnapshot, RequestSnapshotBuilder};

// Re-export common types
pub use bytes::Bytes;
pub use http::Method;

/// Prelude for common imports.
///
/// ```
/// use curlify_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::body::RequestBody;
    pub use crate::command::generate_curl;
    pub use crate::config::{CurlConfig, CurlConfigBuilder};
    pub use crate::headers::Headers;
    pub use crate::logger::{CurlLogger, NoopLogger, TracingLogger};
    pub use crate::request::RequestSnapshot;
    pub use http::Method;
}
