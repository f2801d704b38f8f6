//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body was not valid JSON. The raw text is kept for debugging.
    #[error("Failed to parse response body: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Connection-level errors raised by a [`Transport`](crate::http::Transport).
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// DNS, TLS or socket failure reported by a non-reqwest transport.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The connection broke while the response body was streaming.
    #[error("Response body interrupted: {0}")]
    Body(String),
}
