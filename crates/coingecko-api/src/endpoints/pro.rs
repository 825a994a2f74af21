//! Paid-plan (Analyst tier and above) endpoints
//!
//! These require a Pro API key; the public host rejects them.

use crate::client::CoinGeckoClient;
use crate::endpoints::nfts::NftData;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use chrono::{DateTime, Utc};
use serde::Deserialize;

impl CoinGeckoClient {
    /// Get the latest 200 coins recently listed on CoinGecko.
    pub async fn new_coins_list(&self) -> Result<Vec<NewCoinItem>> {
        let url = self.endpoint(paths::COINS_LIST_NEW, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get the top 30 gainers and losers over a time duration.
    ///
    /// Only coins with at least $50,000 of 24h trading volume are included.
    ///
    /// # Arguments
    /// * `vs_currency` - target currency (required)
    /// * `duration` - 1h, 24h (upstream default), 7d, 14d, 30d, 60d, 1y
    /// * `top_coins` - market cap ranking cutoff: 300, 500, 1000 (upstream
    ///   default) or `all`
    pub async fn top_gainers_losers(
        &self,
        vs_currency: &str,
        duration: Option<&str>,
        top_coins: Option<&str>,
    ) -> Result<TopGainersLosersResponse> {
        if vs_currency.is_empty() {
            return Err(Error::InvalidParameter(
                "vs_currency should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query
            .add("vs_currency", vs_currency)
            .add_opt("duration", duration)
            .add_opt("top_coins", top_coins);

        let url = self.endpoint(paths::TOP_GAINERS_LOSERS, &query);
        self.get_json(&url).await
    }

    /// Get historical global market cap and volume data.
    ///
    /// Granularity is automatic: 1 day = hourly, 2 days and above = daily.
    ///
    /// # Arguments
    /// * `days` - data up to this many days ago, e.g. 1, 14, 30, max (required)
    /// * `vs_currency` - target currency; USD when unset
    pub async fn global_market_cap_chart(
        &self,
        days: &str,
        vs_currency: Option<&str>,
    ) -> Result<GlobalMarketCapChartResponse> {
        if days.is_empty() {
            return Err(Error::InvalidParameter(
                "days should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add("days", days).add_opt("vs_currency", vs_currency);

        let url = self.endpoint(paths::GLOBAL_MARKET_CAP_CHART, &query);
        self.get_json(&url).await
    }

    /// List all supported NFT collections with market data, paginated.
    ///
    /// Returns the collections plus the total page count derived from the
    /// `total` response header.
    ///
    /// # Arguments
    /// * `asset_platform_id` - blockchain network (default ethereum, injected
    ///   when unset)
    /// * `order` - sort field (default market_cap_usd_desc, injected when
    ///   unset); also h24_volume_native_asc/desc, h24_volume_usd_asc/desc,
    ///   market_cap_usd_asc
    /// * `per_page` - 1..250 results per page (default 100, injected when unset)
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn nfts_markets(
        &self,
        asset_platform_id: Option<&str>,
        order: Option<&str>,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<(Vec<NftData>, u32)> {
        if per_page == Some(0) {
            return Err(Error::InvalidParameter(
                "per_page should be greater than 0".to_string(),
            ));
        }
        let per_page = per_page.unwrap_or(100);

        let mut query = QueryParams::new();
        query
            .add_str_or("asset_platform_id", asset_platform_id, "ethereum")
            .add_str_or("order", order, "market_cap_usd_desc")
            .add("per_page", per_page)
            .add_num_or("page", page, 1);

        let url = self.endpoint(paths::NFTS_MARKETS, &query);
        self.get_json_paged(&url, per_page).await
    }

    /// Get historical floor price, market cap and 24h volume of an NFT
    /// collection.
    ///
    /// Granularity is automatic: 1-14 days = 10-minutely, 15 days and above =
    /// daily.
    ///
    /// # Arguments
    /// * `id` - NFT collection id (required)
    /// * `days` - data up to this many days ago, e.g. 1, 14, 30, max (required)
    pub async fn nft_market_chart(&self, id: &str, days: &str) -> Result<NftMarketChartResponse> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "nft id should not be empty".to_string(),
            ));
        }
        if days.is_empty() {
            return Err(Error::InvalidParameter(
                "days should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add("days", days);

        let path = paths::fill(paths::NFTS_MARKET_CHART, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get historical NFT collection market data by contract address.
    ///
    /// Solana and Art Blocks collections are not served here; use
    /// [`nft_market_chart`](Self::nft_market_chart) for those.
    ///
    /// # Arguments
    /// * `asset_platform_id` - blockchain network (required)
    /// * `contract_address` - collection contract address (required)
    /// * `days` - data up to this many days ago (required)
    pub async fn nft_market_chart_by_contract(
        &self,
        asset_platform_id: &str,
        contract_address: &str,
        days: &str,
    ) -> Result<NftMarketChartResponse> {
        if asset_platform_id.is_empty() {
            return Err(Error::InvalidParameter(
                "asset_platform id should not be empty".to_string(),
            ));
        }
        if contract_address.is_empty() {
            return Err(Error::InvalidParameter(
                "contract_address should not be empty".to_string(),
            ));
        }
        if days.is_empty() {
            return Err(Error::InvalidParameter(
                "days should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add("days", days);

        let path = paths::fill(
            paths::NFTS_CONTRACT_MARKET_CHART,
            &[asset_platform_id, contract_address],
        );
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get the latest floor price and 24h volume of an NFT collection on each
    /// marketplace.
    ///
    /// # Arguments
    /// * `id` - NFT collection id (required)
    pub async fn nft_tickers(&self, id: &str) -> Result<NftTickersResponse> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "nft id should not be empty".to_string(),
            ));
        }

        let path = paths::fill(paths::NFTS_TICKERS, &[id]);
        let url = self.endpoint(&path, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get historical volume data (in BTC) of an exchange for a date range.
    ///
    /// The range between `from` and `to` must be within 31 days; the data
    /// interval is daily.
    ///
    /// # Arguments
    /// * `id` - exchange id (required)
    /// * `from` - start, UNIX timestamp, non-zero (required)
    /// * `to` - end, UNIX timestamp, non-zero (required)
    pub async fn exchange_volume_chart_range(
        &self,
        id: &str,
        from: i64,
        to: i64,
    ) -> Result<Vec<super::exchanges::VolumePoint>> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "exchange id should not be empty".to_string(),
            ));
        }
        if from == 0 {
            return Err(Error::InvalidParameter(
                "from should not be empty".to_string(),
            ));
        }
        if to == 0 {
            return Err(Error::InvalidParameter("to should not be empty".to_string()));
        }

        let mut query = QueryParams::new();
        query.add("from", from).add("to", to);

        let path = paths::fill(paths::EXCHANGE_VOLUME_CHART_RANGE, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }
}

// Response types specific to paid-plan endpoints

/// One entry of [`CoinGeckoClient::new_coins_list`]
#[derive(Debug, Clone, Deserialize)]
pub struct NewCoinItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// UNIX timestamp of the listing
    pub activated_at: Option<i64>,
}

/// One mover of [`TopGainersLosersResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct TopMoverItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub market_cap_rank: Option<i32>,
    pub usd: Option<f64>,
    pub usd_24h_vol: Option<f64>,
    pub usd_1h_change: Option<f64>,
    pub usd_24h_change: Option<f64>,
}

/// Response of [`CoinGeckoClient::top_gainers_losers`]
#[derive(Debug, Clone, Deserialize)]
pub struct TopGainersLosersResponse {
    #[serde(default)]
    pub top_gainers: Vec<TopMoverItem>,
    #[serde(default)]
    pub top_losers: Vec<TopMoverItem>,
}

/// Chart series of [`GlobalMarketCapChartResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalMarketCapChart {
    #[serde(default)]
    pub market_cap: Vec<(f64, Option<f64>)>,
    #[serde(default)]
    pub volume: Vec<(f64, Option<f64>)>,
}

/// Response of [`CoinGeckoClient::global_market_cap_chart`]
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalMarketCapChartResponse {
    pub market_cap_chart: GlobalMarketCapChart,
}

/// Response of [`CoinGeckoClient::nft_market_chart`] and
/// [`CoinGeckoClient::nft_market_chart_by_contract`]; each series is
/// `[timestamp_ms, value]` pairs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NftMarketChartResponse {
    #[serde(default)]
    pub floor_price_usd: Vec<(f64, Option<f64>)>,
    #[serde(default)]
    pub floor_price_native: Vec<(f64, Option<f64>)>,
    #[serde(default)]
    pub h24_volume_usd: Vec<(f64, Option<f64>)>,
    #[serde(default)]
    pub h24_volume_native: Vec<(f64, Option<f64>)>,
    #[serde(default)]
    pub market_cap_usd: Vec<(f64, Option<f64>)>,
    #[serde(default)]
    pub market_cap_native: Vec<(f64, Option<f64>)>,
}

/// One marketplace entry of [`NftTickersResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct NftTickerItem {
    pub floor_price_in_native_currency: Option<f64>,
    pub h24_volume_in_native_currency: Option<f64>,
    pub native_currency: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub nft_marketplace_id: Option<String>,
}

/// Response of [`CoinGeckoClient::nft_tickers`]
#[derive(Debug, Clone, Deserialize)]
pub struct NftTickersResponse {
    #[serde(default)]
    pub tickers: Vec<NftTickerItem>,
}
