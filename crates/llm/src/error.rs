//! Error taxonomy for completion calls.

use thiserror::Error;

/// Result alias for completion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by completion providers and their callers.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider could not be reached or returned a failure
    /// (network, auth, quota, non-success status).
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider responded but the content could not be
    /// interpreted in the required shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// A component was constructed without required configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Provider(e.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::header::InvalidHeaderName> for Error {
    fn from(e: reqwest::header::InvalidHeaderName) -> Self {
        Error::Config(e.to_string())
    }
}
