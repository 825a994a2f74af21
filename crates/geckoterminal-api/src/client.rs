//! Main GeckoTerminal REST client implementation

use crate::error::{Error, Result};
use crate::query::QueryParams;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// GeckoTerminal API endpoint
pub const GECKO_TERMINAL_API_URL: &str = "https://api.geckoterminal.com/api/v2";

/// Accept header pinning the upstream API version
pub const ACCEPT_JSON_VERSIONED: &str = "application/json;version=20230302";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GeckoTerminal REST API client
///
/// No credential is required; all endpoints are public. The handle is cheap
/// to clone and safe for concurrent use.
///
/// # Example
///
/// ```no_run
/// use geckoterminal_api::GeckoTerminalClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = GeckoTerminalClient::new();
///     let networks = client.networks(None).await?;
///     for network in networks.data {
///         println!("{}: {}", network.id, network.attributes.name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GeckoTerminalClient {
    base_url: String,
    http: Client,
}

impl GeckoTerminalClient {
    /// Create a new client against the public endpoint.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
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
                        .unwrap_or(concat!("geckoterminal-api/", env!("CARGO_PKG_VERSION"))),
                )
                .build()
                .expect("Failed to create HTTP client"),
        };

        let base_url = match config.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => GECKO_TERMINAL_API_URL.to_string(),
        };

        Self { base_url, http }
    }

    /// Base URL the client resolves endpoints against
    pub fn base_url(&self) -> &str {
        &self.base_url
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
    /// Every request carries the versioned accept header. The body is read
    /// to completion on every status; non-200 bodies are reported verbatim,
    /// this API family has no structured error field.
    pub(crate) async fn send_req(&self, url: &str) -> Result<Bytes> {
        debug!(url, "sending request");
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_JSON_VERSIONED)
            .send()
            .await
            .map_err(|e| {
                error!(url, error = %e, "failed to send request");
                Error::Http(e)
            })?;

        let status = resp.status();
        let body = resp.bytes().await?;

        if status != StatusCode::OK {
            let message = String::from_utf8_lossy(&body).into_owned();
            error!(url, status = status.as_u16(), message, "api call failed");
            return Err(Error::Api {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    /// GET `url` and decode the body into `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.send_req(url).await?;
        let data = serde_json::from_slice(&body).map_err(|e| {
            error!(url, error = %e, "failed to unmarshal response");
            Error::Parse(e)
        })?;
        Ok(data)
    }
}

impl Default for GeckoTerminalClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Client configuration
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
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
    fn test_default_base_url() {
        let client = GeckoTerminalClient::new();
        assert_eq!(client.base_url(), GECKO_TERMINAL_API_URL);
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let client = GeckoTerminalClient::with_config(
            ClientConfig::new().with_base_url("http://127.0.0.1:9999/"),
        );
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_endpoint_with_and_without_query() {
        let client = GeckoTerminalClient::new();
        let empty = QueryParams::new();
        assert_eq!(
            client.endpoint("/networks", &empty),
            format!("{GECKO_TERMINAL_API_URL}/networks")
        );

        let mut q = QueryParams::new();
        q.add("page", 2u32);
        assert_eq!(
            client.endpoint("/networks", &q),
            format!("{GECKO_TERMINAL_API_URL}/networks?page=2")
        );
    }
}
