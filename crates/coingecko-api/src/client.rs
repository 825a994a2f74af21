//! Main CoinGecko REST client implementation

use crate::error::{Error, Result};
use crate::pagination;
use crate::query::QueryParams;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

/// Public (free-tier) API endpoint
pub const PUBLIC_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Pro (paid-tier) API endpoint
pub const PRO_API_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Header carrying the pro API key
pub const PRO_API_KEY_HEADER: &str = "x-cg-pro-api-key";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CoinGecko REST API client
///
/// One handle per upstream API family; construct once and reuse across calls.
/// The handle is cheap to clone and safe for concurrent use, the underlying
/// `reqwest::Client` pools connections internally.
///
/// # Example
///
/// ```no_run
/// use coingecko_api::CoinGeckoClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Free tier
///     let client = CoinGeckoClient::new("", false);
///     let pong = client.ping().await?;
///     println!("{}", pong.gecko_says);
///
///     // Paid tier
///     let pro = CoinGeckoClient::new("CG-xxxx", true);
///     let (coins, pages) = pro.exchanges(None, None).await?;
///     println!("{} exchanges over {} pages", coins.len(), pages);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinGeckoClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl CoinGeckoClient {
    /// Create a new client.
    ///
    /// The pro endpoint is used only when `api_key` is non-empty AND `pro` is
    /// true; otherwise the public endpoint is used (a non-empty key is still
    /// attached, some free-tier keys raise rate limits). The key is not
    /// validated here, the upstream API is the authority on key validity.
    pub fn new(api_key: impl Into<String>, pro: bool) -> Self {
        Self::with_config(ClientConfig::new().with_api_key(api_key, pro))
    }

    /// Create a new client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let http = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent(
                    config
                        .user_agent
                        .as_deref()
                        .unwrap_or(concat!("coingecko-api/", env!("CARGO_PKG_VERSION"))),
                )
                .build()
                .expect("Failed to create HTTP client"),
        };

        let base_url = match config.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None if !config.api_key.is_empty() && config.pro => PRO_API_URL.to_string(),
            None => PUBLIC_API_URL.to_string(),
        };

        Self {
            base_url,
            api_key: config.api_key,
            http,
        }
    }

    /// Base URL the client resolves endpoints against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the client carries an API key
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Build the absolute URL for `path`, appending the query when non-empty.
    pub(crate) fn endpoint(&self, path: &str, query: &QueryParams) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query.encode())
        }
    }

    /// Perform one GET against an absolute URL.
    ///
    /// The API key header is attached after the URL (with all query
    /// parameters) is final, and only when a key is present. The body is read
    /// to completion on every path, success or failure, so the connection is
    /// always released back to the pool. No JSON parsing happens here.
    pub(crate) async fn send_req(&self, url: &str) -> Result<(Bytes, HeaderMap)> {
        debug!(url, "sending request");
        let mut req = self.http.get(url);
        if !self.api_key.is_empty() {
            req = req.header(PRO_API_KEY_HEADER, &self.api_key);
        }

        let resp = req.send().await.map_err(|e| {
            error!(url, error = %e, "failed to send request");
            Error::Http(e)
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        if status != StatusCode::OK {
            let message = match serde_json::from_slice::<ErrorResponse>(&body) {
                Ok(err) if !err.error.is_empty() => err.error,
                _ => String::from_utf8_lossy(&body).into_owned(),
            };
            error!(url, status = status.as_u16(), message, "api call failed");
            return Err(Error::Api {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        Ok((body, headers))
    }

    /// GET `url` and decode the body into `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let (body, _) = self.send_req(url).await?;
        let data = serde_json::from_slice(&body).map_err(|e| {
            error!(url, error = %e, "failed to unmarshal response");
            Error::Parse(e)
        })?;
        Ok(data)
    }

    /// GET `url`, decode the body into `T` and derive a page count from the
    /// `total` response header at `per_page` items per page.
    pub(crate) async fn get_json_paged<T: DeserializeOwned>(
        &self,
        url: &str,
        per_page: u32,
    ) -> Result<(T, u32)> {
        let (body, headers) = self.send_req(url).await?;
        let page_count = pagination::page_count_from_headers(&headers, per_page)?;
        let data = serde_json::from_slice(&body).map_err(|e| {
            error!(url, error = %e, "failed to unmarshal response");
            Error::Parse(e)
        })?;
        Ok((data, page_count))
    }
}

impl std::fmt::Debug for CoinGeckoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}

/// Error body returned by the API on non-200 responses.
///
/// Not every failure carries this shape; plain-text bodies fall back to raw
/// text in `send_req`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: String,
}

/// Client configuration
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// API key (empty for free tier)
    pub api_key: String,
    /// Route calls to the pro endpoint (requires a non-empty key)
    pub pro: bool,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Base URL override, mainly for pointing tests at a mock server
    pub base_url: Option<String>,
    /// Pre-configured HTTP client; timeout/user agent settings are ignored
    /// when supplied
    pub http_client: Option<Client>,
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            ..Self::default()
        }
    }

    /// Set the API key and tier flag
    pub fn with_api_key(mut self, api_key: impl Into<String>, pro: bool) -> Self {
        self.api_key = api_key.into();
        self.pro = pro;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set a custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the base URL (used by tests against a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supply a pre-configured HTTP client
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_selection() {
        struct Case {
            name: &'static str,
            api_key: &'static str,
            pro: bool,
            wanted: &'static str,
        }
        let cases = [
            Case {
                name: "api key is empty",
                api_key: "",
                pro: false,
                wanted: PUBLIC_API_URL,
            },
            Case {
                name: "api key is empty but pro flag set",
                api_key: "",
                pro: true,
                wanted: PUBLIC_API_URL,
            },
            Case {
                name: "api key is non-empty but not pro",
                api_key: "test_api_key",
                pro: false,
                wanted: PUBLIC_API_URL,
            },
            Case {
                name: "api key is non-empty and pro",
                api_key: "test_api_key",
                pro: true,
                wanted: PRO_API_URL,
            },
        ];
        for case in cases {
            let client = CoinGeckoClient::new(case.api_key, case.pro);
            assert_eq!(client.base_url(), case.wanted, "{}", case.name);
        }
    }

    #[test]
    fn test_base_url_override_wins() {
        let client = CoinGeckoClient::with_config(
            ClientConfig::new()
                .with_api_key("test_api_key", true)
                .with_base_url("http://127.0.0.1:9999/"),
        );
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_endpoint_with_and_without_query() {
        let client = CoinGeckoClient::new("", false);
        let empty = QueryParams::new();
        assert_eq!(
            client.endpoint("/ping", &empty),
            format!("{PUBLIC_API_URL}/ping")
        );

        let mut q = QueryParams::new();
        q.add("page", 2u32);
        assert_eq!(
            client.endpoint("/exchanges", &q),
            format!("{PUBLIC_API_URL}/exchanges?page=2")
        );
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let client = CoinGeckoClient::new("secret", true);
        let repr = format!("{client:?}");
        assert!(!repr.contains("secret"));
    }
}
