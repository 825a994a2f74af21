//! Exchange endpoints

use crate::client::CoinGeckoClient;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use crate::types::{IdName, Ticker};
use serde::Deserialize;

/// Exchange tickers are served in fixed pages of 100 items upstream.
const TICKERS_PAGE_SIZE: u32 = 100;

/// Documented default page size of the /exchanges listing.
const EXCHANGES_PER_PAGE: u32 = 100;

impl CoinGeckoClient {
    /// List all active exchanges with trading volumes, paginated.
    ///
    /// Returns the exchanges plus the total page count derived from the
    /// `total` response header.
    ///
    /// # Arguments
    /// * `per_page` - 1..250 results per page (default 100, injected when unset)
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn exchanges(
        &self,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<(Vec<ExchangeItem>, u32)> {
        if per_page == Some(0) {
            return Err(Error::InvalidParameter(
                "per_page should be greater than 0".to_string(),
            ));
        }
        let per_page = per_page.unwrap_or(EXCHANGES_PER_PAGE);

        let mut query = QueryParams::new();
        query
            .add("per_page", per_page)
            .add_num_or("page", page, 1);

        let url = self.endpoint(paths::EXCHANGES, &query);
        self.get_json_paged(&url, per_page).await
    }

    /// List all exchange ids and names; no pagination.
    pub async fn exchanges_list(&self) -> Result<Vec<IdName>> {
        let url = self.endpoint(paths::EXCHANGES_LIST, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get exchange volume in BTC and its top 100 tickers.
    ///
    /// For derivatives venues use the derivatives endpoints instead.
    ///
    /// # Arguments
    /// * `id` - exchange id, per /exchanges/list (required)
    pub async fn exchange(&self, id: &str) -> Result<ExchangeDetailResponse> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "exchange id should not be empty".to_string(),
            ));
        }

        let path = paths::fill(paths::EXCHANGES_ID, &[id]);
        let url = self.endpoint(&path, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get exchange tickers, paginated to 100 items per page.
    ///
    /// # Arguments
    /// * `id` - exchange id (required)
    /// * `coin_ids` - filter tickers by coin ids, comma-separated
    /// * `include_exchange_logo` - include exchange logo URLs
    /// * `page` - page through results (default 1, injected when unset)
    /// * `depth` - include 2% orderbook depth
    /// * `order` - trust_score_desc (upstream default), trust_score_asc, volume_desc
    pub async fn exchange_tickers(
        &self,
        id: &str,
        coin_ids: Option<&str>,
        include_exchange_logo: bool,
        page: Option<u32>,
        depth: bool,
        order: Option<&str>,
    ) -> Result<(ExchangeTickersResponse, u32)> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "exchange id should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query
            .add_opt("coin_ids", coin_ids)
            .add("include_exchange_logo", include_exchange_logo)
            .add_num_or("page", page, 1)
            .add("depth", depth)
            .add_opt("order", order);

        let path = paths::fill(paths::EXCHANGES_TICKERS, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json_paged(&url, TICKERS_PAGE_SIZE).await
    }

    /// Get volume chart data (in BTC) for an exchange.
    ///
    /// Granularity is automatic: 1 day = 10-minutely, 2-90 days = hourly,
    /// 91 days and above = daily.
    ///
    /// # Arguments
    /// * `id` - exchange id (required)
    /// * `days` - data up to this many days ago (1/7/14/30/90/180/365)
    pub async fn exchange_volume_chart(&self, id: &str, days: u32) -> Result<Vec<VolumePoint>> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "exchange id should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add("days", days);

        let path = paths::fill(paths::EXCHANGES_VOLUME_CHART, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }
}

// Response types specific to exchange endpoints

/// One `[timestamp_ms, volume]` point; the volume arrives as a decimal string
pub type VolumePoint = (f64, String);

/// One entry of [`CoinGeckoClient::exchanges`]
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeItem {
    pub id: String,
    pub name: String,
    pub year_established: Option<i32>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub has_trading_incentive: Option<bool>,
    pub trust_score: Option<i32>,
    pub trust_score_rank: Option<i32>,
    pub trade_volume_24h_btc: Option<f64>,
    pub trade_volume_24h_btc_normalized: Option<f64>,
}

/// Response of [`CoinGeckoClient::exchange`]
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeDetailResponse {
    pub name: String,
    pub year_established: Option<i32>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub facebook_url: Option<String>,
    pub reddit_url: Option<String>,
    pub telegram_url: Option<String>,
    pub slack_url: Option<String>,
    pub other_url_1: Option<String>,
    pub other_url_2: Option<String>,
    pub twitter_handle: Option<String>,
    pub has_trading_incentive: Option<bool>,
    pub centralized: Option<bool>,
    pub public_notice: Option<String>,
    pub alert_notice: Option<String>,
    pub trust_score: Option<i32>,
    pub trust_score_rank: Option<i32>,
    pub trade_volume_24h_btc: Option<f64>,
    pub trade_volume_24h_btc_normalized: Option<f64>,
    #[serde(default)]
    pub tickers: Vec<Ticker>,
}

/// Response of [`CoinGeckoClient::exchange_tickers`]
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeTickersResponse {
    pub name: String,
    pub tickers: Vec<Ticker>,
}
