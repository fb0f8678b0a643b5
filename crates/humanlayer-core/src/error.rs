//! Error types for humanlayer-core

use thiserror::Error;

/// HumanLayer error type
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid client configuration
    #[error("{0}")]
    Configuration(String),

    /// The API answered with a non-200 status
    #[error("{context}: {body}")]
    Api {
        /// What the client was doing, e.g. "Error creating function call"
        context: String,
        /// HTTP status code
        status: u16,
        /// Parsed response body
        body: serde_json::Value,
    },

    /// Transport failure (connect, timeout, TLS)
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Malformed JSON or a body that does not match the expected shape
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Operation exists in the protocol but the backend does not support it
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl Error {
    /// Build an API error from a response status and its parsed body
    #[must_use]
    pub fn api(context: impl Into<String>, status: u16, body: serde_json::Value) -> Self {
        Self::Api {
            context: context.into(),
            status,
            body,
        }
    }

    /// HTTP status code, if the error came from an API response
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
