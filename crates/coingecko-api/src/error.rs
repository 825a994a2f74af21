//! Error types for CoinGecko API operations

/// Errors that can occur while calling the CoinGecko API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network-level failure (connection, DNS, timeout, cancelled request)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A required argument was missing or empty; raised before any network call
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The API returned a non-200 status code
    ///
    /// The message text has a fixed shape that callers grep for, do not change it.
    #[error("failed to call {url}, status code: {status}, error message: {message}")]
    Api {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body (or the raw body)
        message: String,
    },

    /// Response body was not valid JSON or did not match the expected shape
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The `total` pagination header was missing or non-numeric on an endpoint
    /// that requires it
    #[error("invalid pagination header: {0}")]
    PaginationHeader(String),
}

/// Result type for CoinGecko API operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_format() {
        let err = Error::Api {
            url: "https://api.coingecko.com/api/v3/ping".to_string(),
            status: 400,
            message: "invalid request params".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("status code: 400"));
        assert!(text.contains("error message: invalid request params"));
        assert!(text.starts_with("failed to call https://api.coingecko.com/api/v3/ping"));
    }

    #[test]
    fn test_validation_error_names_argument() {
        let err = Error::InvalidParameter("coin id should not be empty".to_string());
        assert!(err.to_string().contains("coin id"));
    }
}
