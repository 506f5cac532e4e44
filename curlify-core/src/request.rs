//! Immutable view of an outgoing request.

use crate::{Headers, RequestBody};
use http::Method;

/// Snapshot of a request as it is about to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSnapshot {
    method: Method,
    url: String,
    headers: Headers,
    content_type: Option<String>,
    body: RequestBody,
}

impl RequestSnapshot {
    /// Create a snapshot with no headers and no body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            content_type: None,
            body: RequestBody::Empty,
        }
    }

    /// Create a snapshot builder.
    pub fn builder(method: Method, url: impl Into<String>) -> RequestSnapshotBuilder {
        RequestSnapshotBuilder {
            snapshot: Self::new(method, url),
        }
    }

    /// Get the request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the fully resolved URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the request headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Get the content type declared by the body, independent of headers.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Get the request body.
    pub fn body(&self) -> &RequestBody {
        &self.body
    }
}

/// Builder for [`RequestSnapshot`].
#[derive(Debug)]
pub struct RequestSnapshotBuilder {
    snapshot: RequestSnapshot,
}

impl RequestSnapshotBuilder {
    /// Append a header value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.snapshot.headers.append(name, value);
        self
    }

    /// Replace the header collection.
    pub fn headers(mut self, headers: Headers) -> Self {
        self.snapshot.headers = headers;
        self
    }

    /// Set the declared content type.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.snapshot.content_type = Some(content_type.into());
        self
    }

    /// Set the body.
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.snapshot.body = body.into();
        self
    }

    /// Build the snapshot.
    pub fn build(self) -> RequestSnapshot {
        self.snapshot
    }
}
