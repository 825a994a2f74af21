//! Ping and simple price endpoints

use crate::client::CoinGeckoClient;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use serde::Deserialize;
use std::collections::HashMap;

/// Maps coin id (or contract address) to currency code to value
pub type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

impl CoinGeckoClient {
    /// Check API server status.
    pub async fn ping(&self) -> Result<PingResponse> {
        let url = self.endpoint(paths::PING, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get the current price of coins in any supported quote currencies.
    ///
    /// Cache/update frequency: every 60 seconds (30 seconds for Pro).
    ///
    /// # Arguments
    /// * `ids` - coin ids, per /coins/list (required)
    /// * `vs_currencies` - quote currencies, per /simple/supported_vs_currencies (required)
    /// * `include_market_cap` - include market cap in the result (default false)
    /// * `include_24hr_vol` - include 24h volume (default false)
    /// * `include_24hr_change` - include 24h change (default false)
    /// * `include_last_updated_at` - include price timestamp (default false)
    /// * `precision` - `full` or decimal places 0-18 for price values
    #[allow(clippy::too_many_arguments)]
    pub async fn simple_price(
        &self,
        ids: &[&str],
        vs_currencies: &[&str],
        include_market_cap: Option<bool>,
        include_24hr_vol: Option<bool>,
        include_24hr_change: Option<bool>,
        include_last_updated_at: Option<bool>,
        precision: Option<&str>,
    ) -> Result<SimplePriceResponse> {
        if ids.is_empty() {
            return Err(Error::InvalidParameter(
                "the length of ids should be greater than 0".to_string(),
            ));
        }
        if vs_currencies.is_empty() {
            return Err(Error::InvalidParameter(
                "the length of vs_currencies should be greater than 0".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query
            .add_csv("ids", ids)
            .add_csv("vs_currencies", vs_currencies)
            .add_opt_bool("include_market_cap", include_market_cap)
            .add_opt_bool("include_24hr_vol", include_24hr_vol)
            .add_opt_bool("include_24hr_change", include_24hr_change)
            .add_opt_bool("include_last_updated_at", include_last_updated_at)
            .add_opt("precision", precision);

        let url = self.endpoint(paths::SIMPLE_PRICE, &query);
        self.get_json(&url).await
    }

    /// Get the current price of tokens (by contract address) on a platform.
    ///
    /// Returns the global average price aggregated across all active
    /// exchanges, not the price on one specific network.
    ///
    /// # Arguments
    /// * `platform_id` - asset platform issuing the tokens, per /asset_platforms (required)
    /// * `contract_addresses` - token contract addresses (required)
    /// * `vs_currencies` - quote currencies (required)
    ///
    /// Remaining flags as in [`simple_price`](Self::simple_price).
    #[allow(clippy::too_many_arguments)]
    pub async fn simple_token_price(
        &self,
        platform_id: &str,
        contract_addresses: &[&str],
        vs_currencies: &[&str],
        include_market_cap: Option<bool>,
        include_24hr_vol: Option<bool>,
        include_24hr_change: Option<bool>,
        include_last_updated_at: Option<bool>,
        precision: Option<&str>,
    ) -> Result<SimplePriceResponse> {
        if platform_id.is_empty() {
            return Err(Error::InvalidParameter(
                "platform id should not be empty".to_string(),
            ));
        }
        if contract_addresses.is_empty() {
            return Err(Error::InvalidParameter(
                "the length of contract_addresses should be greater than 0".to_string(),
            ));
        }
        if vs_currencies.is_empty() {
            return Err(Error::InvalidParameter(
                "the length of vs_currencies should be greater than 0".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query
            .add_csv("contract_addresses", contract_addresses)
            .add_csv("vs_currencies", vs_currencies)
            .add_opt_bool("include_market_cap", include_market_cap)
            .add_opt_bool("include_24hr_vol", include_24hr_vol)
            .add_opt_bool("include_24hr_change", include_24hr_change)
            .add_opt_bool("include_last_updated_at", include_last_updated_at)
            .add_opt("precision", precision);

        let path = paths::fill(paths::SIMPLE_TOKEN_PRICE, &[platform_id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get the list of supported quote currencies.
    pub async fn supported_vs_currencies(&self) -> Result<Vec<String>> {
        let url = self.endpoint(paths::SUPPORTED_VS_CURRENCIES, &QueryParams::new());
        self.get_json(&url).await
    }
}

// Response types specific to these endpoints

/// Response of [`CoinGeckoClient::ping`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PingResponse {
    pub gecko_says: String,
}
