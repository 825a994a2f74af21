//! Exchange rates, search, global market and treasury endpoints

use crate::client::CoinGeckoClient;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use serde::Deserialize;
use std::collections::HashMap;

impl CoinGeckoClient {
    /// Get BTC-to-currency exchange rates.
    pub async fn exchange_rates(&self) -> Result<ExchangeRatesResponse> {
        let url = self.endpoint(paths::EXCHANGE_RATES, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Search for coins, categories, exchanges and NFT collections.
    ///
    /// Results are sorted by market cap descending.
    ///
    /// # Arguments
    /// * `query` - search string; omitted when unset
    pub async fn search(&self, query: Option<&str>) -> Result<SearchResponse> {
        let mut params = QueryParams::new();
        params.add_opt("query", query);

        let url = self.endpoint(paths::SEARCH, &params);
        self.get_json(&url).await
    }

    /// Get trending search coins, NFT collections and categories over the
    /// last 24 hours.
    pub async fn search_trending(&self) -> Result<SearchTrendingResponse> {
        let url = self.endpoint(paths::SEARCH_TRENDING, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get global cryptocurrency market data.
    pub async fn global(&self) -> Result<GlobalResponse> {
        let url = self.endpoint(paths::GLOBAL, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get global decentralized finance market data.
    pub async fn global_defi(&self) -> Result<GlobalDefiResponse> {
        let url = self.endpoint(paths::GLOBAL_DEFI, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get public companies' holdings of a given coin.
    ///
    /// # Arguments
    /// * `coin_id` - `bitcoin` or `ethereum` (required)
    pub async fn companies_public_treasury(
        &self,
        coin_id: &str,
    ) -> Result<CompaniesTreasuryResponse> {
        if coin_id.is_empty() {
            return Err(Error::InvalidParameter(
                "coin_id should not be empty".to_string(),
            ));
        }

        let path = paths::fill(paths::COMPANIES_TREASURY, &[coin_id]);
        let url = self.endpoint(&path, &QueryParams::new());
        self.get_json(&url).await
    }
}

// Response types specific to these endpoints

/// One rate of [`ExchangeRatesResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateItem {
    pub name: String,
    pub unit: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub rate_type: String,
}

/// Response of [`CoinGeckoClient::exchange_rates`]
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRatesResponse {
    pub rates: HashMap<String, ExchangeRateItem>,
}

/// Coin hit of [`CoinGeckoClient::search`]
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCoinItem {
    pub id: String,
    pub name: String,
    pub symbol: Option<String>,
    pub market_cap_rank: Option<i32>,
    pub thumb: Option<String>,
    pub large: Option<String>,
}

/// Exchange hit of [`CoinGeckoClient::search`]
#[derive(Debug, Clone, Deserialize)]
pub struct SearchExchangeItem {
    pub id: String,
    pub name: String,
    pub market_type: Option<String>,
    pub thumb: Option<String>,
    pub large: Option<String>,
}

/// Category hit of [`CoinGeckoClient::search`]
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCategoryItem {
    pub id: serde_json::Value,
    pub name: String,
}

/// NFT collection hit of [`CoinGeckoClient::search`]
#[derive(Debug, Clone, Deserialize)]
pub struct SearchNftItem {
    pub id: String,
    pub name: String,
    pub symbol: Option<String>,
    pub thumb: Option<String>,
}

/// Response of [`CoinGeckoClient::search`]
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<SearchCoinItem>,
    #[serde(default)]
    pub exchanges: Vec<SearchExchangeItem>,
    #[serde(default)]
    pub categories: Vec<SearchCategoryItem>,
    #[serde(default)]
    pub nfts: Vec<SearchNftItem>,
}

/// Trending coin details
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingCoinItem {
    pub id: String,
    pub coin_id: Option<i64>,
    pub name: String,
    pub symbol: Option<String>,
    pub market_cap_rank: Option<i32>,
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
    pub slug: Option<String>,
    pub price_btc: Option<f64>,
    pub score: Option<i32>,
}

/// Wrapper around each trending coin entry
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingItem {
    pub item: TrendingCoinItem,
}

/// Trending NFT collection details
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingNftItem {
    pub id: String,
    pub name: String,
    pub symbol: Option<String>,
    pub thumb: Option<String>,
    pub nft_contract_id: Option<i64>,
    pub native_currency_symbol: Option<String>,
    pub floor_price_in_native_currency: Option<f64>,
    pub floor_price_24h_percentage_change: Option<f64>,
}

/// Response of [`CoinGeckoClient::search_trending`]
#[derive(Debug, Clone, Deserialize)]
pub struct SearchTrendingResponse {
    #[serde(default)]
    pub coins: Vec<TrendingItem>,
    #[serde(default)]
    pub nfts: Vec<TrendingNftItem>,
}

/// Market totals of [`GlobalResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalData {
    pub active_cryptocurrencies: Option<i64>,
    pub upcoming_icos: Option<i64>,
    pub ongoing_icos: Option<i64>,
    pub ended_icos: Option<i64>,
    pub markets: Option<i64>,
    #[serde(default)]
    pub total_market_cap: HashMap<String, f64>,
    #[serde(default)]
    pub total_volume: HashMap<String, f64>,
    #[serde(default)]
    pub market_cap_percentage: HashMap<String, f64>,
    pub market_cap_change_percentage_24h_usd: Option<f64>,
    pub updated_at: Option<i64>,
}

/// Response of [`CoinGeckoClient::global`]
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalResponse {
    pub data: GlobalData,
}

/// DeFi totals of [`GlobalDefiResponse`]; upstream serves most figures as
/// decimal strings and they are preserved verbatim
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalDefiData {
    pub defi_market_cap: Option<String>,
    pub eth_market_cap: Option<String>,
    pub defi_to_eth_ratio: Option<String>,
    pub trading_volume_24h: Option<String>,
    pub defi_dominance: Option<String>,
    pub top_coin_name: Option<String>,
    pub top_coin_defi_dominance: Option<f64>,
}

/// Response of [`CoinGeckoClient::global_defi`]
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalDefiResponse {
    pub data: GlobalDefiData,
}

/// One holder of [`CompaniesTreasuryResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct TreasuryCompanyItem {
    pub name: String,
    pub symbol: Option<String>,
    pub country: Option<String>,
    pub total_holdings: Option<f64>,
    pub total_entry_value_usd: Option<f64>,
    pub total_current_value_usd: Option<f64>,
    pub percentage_of_total_supply: Option<f64>,
}

/// Response of [`CoinGeckoClient::companies_public_treasury`]
#[derive(Debug, Clone, Deserialize)]
pub struct CompaniesTreasuryResponse {
    pub total_holdings: Option<f64>,
    pub total_value_usd: Option<f64>,
    pub market_cap_dominance: Option<f64>,
    #[serde(default)]
    pub companies: Vec<TreasuryCompanyItem>,
}
