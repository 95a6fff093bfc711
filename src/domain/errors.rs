//! Domain Errors
//!
//! The typed failures a geocoding provider surfaces to its callers.

/// Errors returned by a [`Geocoder`](crate::domain::ports::Geocoder).
///
/// Every expected condition maps to one of these three variants; providers
/// never return an untyped error for bad input or an empty upstream answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeocodeError {
    /// Caller supplied malformed input (empty address, out-of-range coordinates).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input is well formed but outside what the provider can answer.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The request was valid but no data came back.
    #[error("zero results: {0}")]
    ZeroResults(String),
}

impl GeocodeError {
    /// Whether retrying the same request could yield a different answer.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ZeroResults(_))
    }

    /// The message carried by the error, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg)
            | Self::UnsupportedOperation(msg)
            | Self::ZeroResults(msg) => msg,
        }
    }
}
