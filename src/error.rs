use thiserror::Error;

/// Unified error type for the library.
///
/// Aggregates the failure modes of the data layer into the categories the
/// page code actually distinguishes: a backend that answered with an error
/// status, a network that never answered, and payloads that did not parse.
/// A cache miss is not an error and never appears here.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-2xx response from the CMS. Carries the status and the raw
    /// response body so callers can log or branch on it.
    #[error("HTTP error! status: {status}, message: {body}")]
    Http { status: u16, body: String },

    /// Transport-level failure (DNS, timeout, connection reset).
    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
