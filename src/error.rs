//! Unified SDK error types.

use thiserror::Error;

use crate::http::Method;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// The dispatcher performs no local recovery: every variant surfaces directly
/// to the caller, which decides retry policy from the carried status code.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Network failure before a response was received (DNS, connect, reset).
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("Timeout")]
    Timeout,

    /// The server answered with a 4xx or 5xx status.
    #[error("{status} {method} {url}: {body}")]
    Status {
        status: u16,
        method: Method,
        url: String,
        body: String,
    },

    /// Successful status but the body is not valid JSON.
    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Body(serde_json::Error),

    /// HTTP verb outside the supported set (GET, POST, DELETE).
    #[error("Unsupported request method '{0}'")]
    UnsupportedMethod(String),

    /// Private scope was requested but no request signer is configured.
    #[error("Private scope requires credentials and a request signer")]
    MissingSigner,
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::Transport(err)
        }
    }
}

impl HttpError {
    /// Status code carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
