//! Pool lookup, listing and search endpoints

use crate::client::GeckoTerminalClient;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use crate::types::{IncludedItem, PaginationLinks, PoolItem};
use serde::Deserialize;

impl GeckoTerminalClient {
    /// Get a specific pool on a network.
    ///
    /// # Arguments
    /// * `network` - network id, per /networks, e.g. eth (required)
    /// * `address` - pool address (required)
    /// * `include` - related resources to embed: base_token, quote_token, dex
    pub async fn pool(
        &self,
        network: &str,
        address: &str,
        include: Option<&str>,
    ) -> Result<PoolResponse> {
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

        let path = paths::fill(paths::POOL, &[network, address]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get several pools on a network in one call.
    ///
    /// Up to 30 addresses; addresses unknown upstream are silently ignored.
    ///
    /// # Arguments
    /// * `network` - network id (required)
    /// * `addresses` - pool addresses (required, non-empty)
    /// * `include` - related resources to embed
    pub async fn multi_pools(
        &self,
        network: &str,
        addresses: &[&str],
        include: Option<&str>,
    ) -> Result<PoolsResponse> {
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
        let path = paths::fill(paths::POOLS_MULTI, &[network, &joined]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get the top 20 pools on a network.
    ///
    /// # Arguments
    /// * `network` - network id (required)
    /// * `include` - related resources to embed
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn top_pools(
        &self,
        network: &str,
        include: Option<&str>,
        page: Option<u32>,
    ) -> Result<PoolsResponse> {
        if network.is_empty() {
            return Err(Error::InvalidParameter(
                "network should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add_opt("include", include).add_num_or("page", page, 1);

        let path = paths::fill(paths::TOP_POOLS, &[network]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get the top 20 pools on a dex of a network.
    ///
    /// # Arguments
    /// * `network` - network id (required)
    /// * `dex` - dex id, per /networks/{network}/dexes (required)
    /// * `include` - related resources to embed
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn top_pools_on_dex(
        &self,
        network: &str,
        dex: &str,
        include: Option<&str>,
        page: Option<u32>,
    ) -> Result<PoolsResponse> {
        if network.is_empty() {
            return Err(Error::InvalidParameter(
                "network should not be empty".to_string(),
            ));
        }
        if dex.is_empty() {
            return Err(Error::InvalidParameter(
                "dex should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add_opt("include", include).add_num_or("page", page, 1);

        let path = paths::fill(paths::TOP_POOLS_ON_DEX, &[network, dex]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get the latest 20 pools on a network.
    ///
    /// # Arguments
    /// * `network` - network id (required)
    /// * `include` - related resources to embed
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn new_pools(
        &self,
        network: &str,
        include: Option<&str>,
        page: Option<u32>,
    ) -> Result<PoolsResponse> {
        if network.is_empty() {
            return Err(Error::InvalidParameter(
                "network should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add_opt("include", include).add_num_or("page", page, 1);

        let path = paths::fill(paths::NEW_POOLS, &[network]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get the latest 20 pools across all networks.
    ///
    /// # Arguments
    /// * `include` - related resources to embed
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn new_pools_all_networks(
        &self,
        include: Option<&str>,
        page: Option<u32>,
    ) -> Result<PoolsResponse> {
        let mut query = QueryParams::new();
        query.add_opt("include", include).add_num_or("page", page, 1);

        let url = self.endpoint(paths::NEW_POOLS_ALL_NETWORKS, &query);
        self.get_json(&url).await
    }

    /// Search for pools by query string.
    ///
    /// The query matches pool addresses, token addresses and token symbols,
    /// e.g. `WETH`, `ETH/USDC` or `0x60594a...`.
    ///
    /// # Arguments
    /// * `query` - search string (required)
    /// * `network` - restrict hits to one network
    /// * `include` - related resources to embed
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn search_pools(
        &self,
        query: &str,
        network: Option<&str>,
        include: Option<&str>,
        page: Option<u32>,
    ) -> Result<PoolsResponse> {
        if query.is_empty() {
            return Err(Error::InvalidParameter(
                "query should not be empty".to_string(),
            ));
        }

        let mut params = QueryParams::new();
        params
            .add("query", query)
            .add_opt("network", network)
            .add_opt("include", include)
            .add_num_or("page", page, 1);

        let url = self.endpoint(paths::SEARCH_POOLS, &params);
        self.get_json(&url).await
    }
}

// Response types specific to pool endpoints

/// Response of [`GeckoTerminalClient::pool`]
#[derive(Debug, Clone, Deserialize)]
pub struct PoolResponse {
    pub data: PoolItem,
    #[serde(default)]
    pub included: Vec<IncludedItem>,
}

/// Response of the pool list and search endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PoolsResponse {
    pub data: Vec<PoolItem>,
    #[serde(default)]
    pub included: Vec<IncludedItem>,
    pub links: Option<PaginationLinks>,
}
