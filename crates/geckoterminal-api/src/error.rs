//! Error types for the GeckoTerminal client

use thiserror::Error;

/// Errors surfaced by [`GeckoTerminalClient`](crate::GeckoTerminalClient)
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A required argument was empty or out of range; no request was sent
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The API answered with a non-200 status
    #[error("failed to call {url}, status code: {status}, error message: {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    /// The response body did not decode into the expected shape
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
