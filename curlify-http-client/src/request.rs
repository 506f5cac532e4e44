//! Request builder.

use crate::{HttpClient, HttpClientError, Response, Result};
use curlify_core::{CONTENT_TYPE, Headers, RequestBody, RequestSnapshot, canonical_name};
use http::{HeaderName, HeaderValue, Method};
use reqwest::multipart::Form;
use serde::Serialize;
use std::time::Duration;

/// Body as it will be sent, keeping the kind the caller chose.
enum Payload {
    Text(String),
    Bytes(Vec<u8>),
    Multipart(Form),
}

/// HTTP request builder.
///
/// Invalid headers and unserializable bodies are reported by [`send`](Self::send).
pub struct RequestBuilder<'a> {
    client: &'a HttpClient,
    method: Method,
    url: String,
    headers: Headers,
    query: Vec<(String, String)>,
    content_type: Option<String>,
    payload: Option<Payload>,
    timeout: Option<Duration>,
    error: Option<HttpClientError>,
}

impl<'a> RequestBuilder<'a> {
    /// Create a new request builder.
    pub(crate) fn new(client: &'a HttpClient, method: Method, url: String) -> Self {
        Self {
            client,
            method,
            url,
            headers: Headers::new(),
            query: Vec::new(),
            content_type: None,
            payload: None,
            timeout: None,
            error: None,
        }
    }

    /// Add a header to the request. Repeated names keep every value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Err(e) = validate_header(&name, &value) {
            self.error.get_or_insert(e);
        } else {
            self.headers.append(name, value);
        }
        self
    }

    /// Add multiple headers to the request.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self = self.header(name, value);
        }
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add multiple query parameters.
    pub fn queries<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in params {
            self.query.push((k.into(), v.into()));
        }
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(Payload::Bytes(body.into()));
        self
    }

    /// Set the request body as text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content_type = Some("text/plain; charset=utf-8".to_string());
        self.payload = Some(Payload::Text(text.into()));
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, json: &T) -> Self {
        match serde_json::to_string(json) {
            Ok(text) => {
                self.content_type = Some("application/json".to_string());
                self.payload = Some(Payload::Text(text));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize JSON body");
                self.error.get_or_insert(HttpClientError::Json(e.to_string()));
            }
        }
        self
    }

    /// Set the request body as form data.
    pub fn form<T: Serialize + ?Sized>(mut self, form: &T) -> Self {
        match serde_urlencoded::to_string(form) {
            Ok(encoded) => {
                self.content_type = Some("application/x-www-form-urlencoded".to_string());
                self.payload = Some(Payload::Text(encoded));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode form data");
                self.error.get_or_insert(HttpClientError::Form(e.to_string()));
            }
        }
        self
    }

    /// Set the request body as multipart form data.
    pub fn multipart(mut self, form: Form) -> Self {
        self.content_type = Some(format!("multipart/form-data; boundary={}", form.boundary()));
        self.payload = Some(Payload::Multipart(form));
        self
    }

    /// Set a custom timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set bearer authentication.
    pub fn bearer_auth(self, token: impl Into<String>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.into()))
    }

    /// Set basic authentication.
    pub fn basic_auth(
        self,
        username: impl Into<String>,
        password: Option<impl Into<String>>,
    ) -> Self {
        use base64::Engine;
        let credentials = match password {
            Some(p) => format!("{}:{}", username.into(), p.into()),
            None => format!("{}:", username.into()),
        };
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        self.header("Authorization", format!("Basic {}", encoded))
    }

    /// Build the URL with query parameters.
    fn build_url(&self) -> Result<url::Url> {
        let mut url = if let Some(base) = &self.client.config().base_url {
            let base =
                url::Url::parse(base).map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;
            base.join(&self.url)
                .map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?
        } else {
            url::Url::parse(&self.url).map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?
        };

        if !self.query.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Headers in send order: client defaults first, then this request's.
    ///
    /// Names are converted to `Title-Case`, matching [`snapshot_request`](crate::snapshot_request),
    /// so `content-type` and `Content-Type` are one header.
    fn all_headers(&self) -> Result<Headers> {
        let mut headers = Headers::new();
        for (name, value) in &self.client.config().default_headers {
            validate_header(name, value)?;
            headers.append(canonical_name(name), value.as_str());
        }
        for (name, values) in self.headers.iter() {
            for value in values {
                headers.append(canonical_name(name), value.as_str());
            }
        }
        Ok(headers)
    }

    /// Send the request.
    pub async fn send(mut self) -> Result<Response> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }

        let url = self.build_url()?;
        let headers = self.all_headers()?;

        let mut snapshot = RequestSnapshot::builder(self.method.clone(), url.as_str());
        if let Some(content_type) = &self.content_type {
            snapshot = snapshot.content_type(content_type.as_str());
        }
        let snapshot = snapshot
            .headers(headers.clone())
            .body(match &self.payload {
                None => RequestBody::Empty,
                Some(Payload::Text(text)) => RequestBody::Text(text.clone()),
                Some(Payload::Bytes(bytes)) => RequestBody::from(bytes.clone()),
                Some(Payload::Multipart(_)) => RequestBody::Multipart,
            })
            .build();

        let mut request = self.client.inner().request(self.method, url);

        for (name, values) in headers.iter() {
            for value in values {
                request = request.header(name, value.as_str());
            }
        }

        if let Some(content_type) = &self.content_type
            && matches!(self.payload, Some(Payload::Text(_) | Payload::Bytes(_)))
            && !headers.contains(CONTENT_TYPE)
        {
            request = request.header(http::header::CONTENT_TYPE, content_type.as_str());
        }

        request = match self.payload {
            None => request,
            Some(Payload::Text(text)) => request.body(text),
            Some(Payload::Bytes(bytes)) => request.body(bytes),
            // reqwest sets the boundary content type itself
            Some(Payload::Multipart(form)) => request.multipart(form),
        };

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        self.client.dispatch(snapshot, request.build()?).await
    }
}

fn validate_header(name: &str, value: &str) -> Result<()> {
    HeaderName::try_from(name)
        .map_err(|e| HttpClientError::InvalidHeader(format!("{}: {}", name, e)))?;
    HeaderValue::try_from(value)
        .map_err(|e| HttpClientError::InvalidHeader(format!("{}: {}", name, e)))?;
    Ok(())
}
