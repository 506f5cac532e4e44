// Curlify - log outgoing HTTP requests as equivalent curl commands
//
// This library renders a request snapshot (method, URL, headers, body) as a
// `curl` command line and hands it to a pluggable logger.

// Re-export core functionality
pub use curlify_core::*;

// Re-export optional crates
#[cfg(feature = "config")]
pub use curlify_config;

#[cfg(feature = "http-client")]
pub use curlify_http_client;

// Prelude for common imports
pub mod prelude {
    pub use curlify_core::prelude::*;

    #[cfg(feature = "config")]
    pub use curlify_config::{CurlSettings, load_config};

    #[cfg(feature = "http-client")]
    pub use curlify_http_client::{CurlInterceptor, HttpClient, HttpClientConfig, RequestObserver};
}
