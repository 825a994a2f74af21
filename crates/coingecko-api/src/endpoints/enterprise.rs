//! Enterprise-plan endpoints

use crate::client::CoinGeckoClient;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use chrono::{DateTime, Utc};
use serde::Deserialize;

impl CoinGeckoClient {
    /// Get historical circulating supply of a coin.
    ///
    /// Granularity is automatic: 1 day = 5-minutely, 2-90 days = hourly,
    /// 91 days and above = daily. Data is available from 22 June 2019.
    ///
    /// # Arguments
    /// * `id` - coin id (required)
    /// * `days` - data up to this many days ago
    /// * `interval` - `daily`; automatic granularity when unset
    pub async fn circulating_supply_chart(
        &self,
        id: &str,
        days: u32,
        interval: Option<&str>,
    ) -> Result<CirculatingSupplyChartResponse> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "coin id should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add("days", days).add_opt("interval", interval);

        let path = paths::fill(paths::CIRCULATING_SUPPLY_CHART, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get historical circulating supply of a coin within a UNIX timestamp
    /// range.
    ///
    /// # Arguments
    /// * `id` - coin id (required)
    /// * `from` - start, UNIX timestamp
    /// * `to` - end, UNIX timestamp
    pub async fn circulating_supply_chart_range(
        &self,
        id: &str,
        from: i64,
        to: i64,
    ) -> Result<CirculatingSupplyChartResponse> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "coin id should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add("from", from).add("to", to);

        let path = paths::fill(paths::CIRCULATING_SUPPLY_CHART_RANGE, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get the full token list of an asset platform in the Ethereum
    /// token-list standard.
    ///
    /// Only tokens whose contract address has been registered upstream are
    /// included.
    ///
    /// # Arguments
    /// * `asset_platform_id` - e.g. ethereum, polygon-pos (required)
    pub async fn token_list(&self, asset_platform_id: &str) -> Result<TokenListResponse> {
        if asset_platform_id.is_empty() {
            return Err(Error::InvalidParameter(
                "asset_platform id should not be empty".to_string(),
            ));
        }

        let path = paths::fill(paths::TOKEN_LIST_ALL, &[asset_platform_id]);
        let url = self.endpoint(&path, &QueryParams::new());
        self.get_json(&url).await
    }
}

// Response types specific to enterprise endpoints

/// Response of the circulating supply chart endpoints; each point is
/// `[timestamp_ms, supply]` with the supply as a decimal string
#[derive(Debug, Clone, Deserialize)]
pub struct CirculatingSupplyChartResponse {
    #[serde(default)]
    pub circulating_supply: Vec<(f64, String)>,
}

/// One token of [`TokenListResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct TokenListItem {
    #[serde(rename = "chainId")]
    pub chain_id: i64,
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI")]
    pub logo_uri: Option<String>,
}

/// Token-list version triple
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TokenListVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Response of [`CoinGeckoClient::token_list`]
#[derive(Debug, Clone, Deserialize)]
pub struct TokenListResponse {
    pub name: String,
    #[serde(rename = "logoURI")]
    pub logo_uri: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tokens: Vec<TokenListItem>,
    pub version: Option<TokenListVersion>,
}
