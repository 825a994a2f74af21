//! Token lookup and metadata endpoints

use crate::client::GeckoTerminalClient;
use crate::endpoints::pools::PoolsResponse;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use crate::types::{IncludedItem, TokenInfoItem, TokenItem};
use serde::Deserialize;

impl GeckoTerminalClient {
    /// Get the top 20 pools for a token on a network.
    ///
    /// # Arguments
    /// * `network` - network id, per /networks (required)
    /// * `token_address` - token contract address (required)
    /// * `include` - related resources to embed: base_token, quote_token, dex
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn token_pools(
        &self,
        network: &str,
        token_address: &str,
        include: Option<&str>,
        page: Option<u32>,
    ) -> Result<PoolsResponse> {
        if network.is_empty() {
            return Err(Error::InvalidParameter(
                "network should not be empty".to_string(),
            ));
        }
        if token_address.is_empty() {
            return Err(Error::InvalidParameter(
                "token_address should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add_opt("include", include).add_num_or("page", page, 1);

        let path = paths::fill(paths::TOKEN_POOLS, &[network, token_address]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get a specific token on a network.
    ///
    /// # Arguments
    /// * `network` - network id (required)
    /// * `address` - token contract address (required)
    /// * `include` - related resources to embed: top_pools
    pub async fn token(
        &self,
        network: &str,
        address: &str,
        include: Option<&str>,
    ) -> Result<TokenResponse> {
        if network.is_empty() {
            return Err(Error::InvalidParameter(
                "network should not be empty".to_string(),
            ));
        }
        if address.is_empty() {
            return Err(Error::InvalidParameter(
                "address should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add_opt("include", include);

        let path = paths::fill(paths::TOKEN, &[network, address]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get several tokens on a network in one call.
    ///
    /// Up to 30 addresses; addresses unknown upstream are silently ignored.
    ///
    /// # Arguments
    /// * `network` - network id (required)
    /// * `addresses` - token contract addresses (required, non-empty)
    /// * `include` - related resources to embed
    pub async fn multi_tokens(
        &self,
        network: &str,
        addresses: &[&str],
        include: Option<&str>,
    ) -> Result<TokensResponse> {
        if network.is_empty() {
            return Err(Error::InvalidParameter(
                "network should not be empty".to_string(),
            ));
        }
        if addresses.is_empty() {
            return Err(Error::InvalidParameter(
                "the length of addresses should be greater than 0".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add_opt("include", include);

        let joined = addresses.join(",");
        let path = paths::fill(paths::TOKENS_MULTI, &[network, &joined]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get metadata (image, websites, description, socials) for a token.
    ///
    /// # Arguments
    /// * `network` - network id (required)
    /// * `address` - token contract address (required)
    pub async fn token_info(&self, network: &str, address: &str) -> Result<TokenInfoResponse> {
        if network.is_empty() {
            return Err(Error::InvalidParameter(
                "network should not be empty".to_string(),
            ));
        }
        if address.is_empty() {
            return Err(Error::InvalidParameter(
                "address should not be empty".to_string(),
            ));
        }

        let path = paths::fill(paths::TOKEN_INFO, &[network, address]);
        let url = self.endpoint(&path, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get metadata for both tokens of a pool.
    ///
    /// # Arguments
    /// * `network` - network id (required)
    /// * `pool_address` - pool address (required)
    pub async fn pool_tokens_info(
        &self,
        network: &str,
        pool_address: &str,
    ) -> Result<TokenInfoListResponse> {
        if network.is_empty() {
            return Err(Error::InvalidParameter(
                "network should not be empty".to_string(),
            ));
        }
        if pool_address.is_empty() {
            return Err(Error::InvalidParameter(
                "pool_address should not be empty".to_string(),
            ));
        }

        let path = paths::fill(paths::POOL_TOKENS_INFO, &[network, pool_address]);
        let url = self.endpoint(&path, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get the 100 most recently updated token profiles across all networks.
    pub async fn recently_updated_tokens_info(&self) -> Result<TokenInfoListResponse> {
        let url = self.endpoint(paths::TOKENS_INFO_RECENTLY_UPDATED, &QueryParams::new());
        self.get_json(&url).await
    }
}

// Response types specific to token endpoints

/// Response of [`GeckoTerminalClient::token`]
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub data: TokenItem,
    #[serde(default)]
    pub included: Vec<IncludedItem>,
}

/// Response of [`GeckoTerminalClient::multi_tokens`]
#[derive(Debug, Clone, Deserialize)]
pub struct TokensResponse {
    pub data: Vec<TokenItem>,
    #[serde(default)]
    pub included: Vec<IncludedItem>,
}

/// Response of [`GeckoTerminalClient::token_info`]
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfoResponse {
    pub data: TokenInfoItem,
}

/// Response of [`GeckoTerminalClient::pool_tokens_info`] and
/// [`GeckoTerminalClient::recently_updated_tokens_info`]
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfoListResponse {
    pub data: Vec<TokenInfoItem>,
}
