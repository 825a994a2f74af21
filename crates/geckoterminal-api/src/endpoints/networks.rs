//! Network and dex listing endpoints

use crate::client::GeckoTerminalClient;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use crate::types::{NetworkItem, PaginationLinks};
use serde::Deserialize;

impl GeckoTerminalClient {
    /// List all supported networks.
    ///
    /// # Arguments
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn networks(&self, page: Option<u32>) -> Result<NetworksResponse> {
        let mut query = QueryParams::new();
        query.add_num_or("page", page, 1);

        let url = self.endpoint(paths::NETWORKS, &query);
        self.get_json(&url).await
    }

    /// List all supported dexes on a network.
    ///
    /// # Arguments
    /// * `network` - network id, per /networks, e.g. eth (required)
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn dexes(&self, network: &str, page: Option<u32>) -> Result<NetworksResponse> {
        if network.is_empty() {
            return Err(Error::InvalidParameter(
                "network should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add_num_or("page", page, 1);

        let path = paths::fill(paths::NETWORK_DEXES, &[network]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }
}

// Response types specific to these endpoints

/// Response of [`GeckoTerminalClient::networks`] and
/// [`GeckoTerminalClient::dexes`]
#[derive(Debug, Clone, Deserialize)]
pub struct NetworksResponse {
    pub data: Vec<NetworkItem>,
    pub links: Option<PaginationLinks>,
}
