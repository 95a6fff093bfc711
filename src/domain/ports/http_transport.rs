//! HTTP Transport Port
//!
//! Defines the outbound collaborator providers use to reach their upstream API.

use async_trait::async_trait;
use url::Url;

/// Failures at the transport boundary.
///
/// Providers do not surface these; they fold them into their own error type.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
}

/// Fetches a URL and returns the response body as text.
///
/// Implementations own timeouts and connection reuse. They must be safe to
/// share between concurrent callers.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request and return the body.
    async fn get(&self, url: &Url) -> Result<String, TransportError>;
}
