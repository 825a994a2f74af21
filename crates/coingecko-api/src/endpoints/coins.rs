//! Coin listing, market data and chart endpoints

use crate::client::CoinGeckoClient;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use crate::types::{
    CommunityDataItem, DescriptionItem, DetailPlatformsItem, DeveloperDataItem, ImageItem,
    LinksItem, LocalizationItem, MarketDataItem, PlatformsItem, PublicInterestStatsItem, RoiItem,
    SparklineItem, Ticker,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Coin tickers are served in fixed pages of 100 items upstream.
const TICKERS_PAGE_SIZE: u32 = 100;

impl CoinGeckoClient {
    /// List all supported coins (id, symbol, name); no pagination.
    ///
    /// Only active coins are listed; deactivated coins disappear from the
    /// result.
    ///
    /// # Arguments
    /// * `include_platform` - include platform contract addresses
    pub async fn coins_list(&self, include_platform: bool) -> Result<Vec<CoinListItem>> {
        let mut query = QueryParams::new();
        query.add("include_platform", include_platform);

        let url = self.endpoint(paths::COINS_LIST, &query);
        self.get_json(&url).await
    }

    /// List coins with price, market cap, volume and related market data.
    ///
    /// When both `category` and `ids` are supplied, `category` takes
    /// precedence upstream.
    ///
    /// # Arguments
    /// * `vs_currency` - target currency of market data (required)
    /// * `ids` - filter by coin ids
    /// * `category` - filter by category, per /coins/categories/list
    /// * `order` - market_cap_asc, market_cap_desc, volume_asc, volume_desc,
    ///   id_asc, id_desc (upstream default market_cap_desc)
    /// * `per_page` - 1..250 results per page (upstream default 100)
    /// * `page` - page through results (upstream default 1)
    /// * `sparkline` - include 7-day sparkline data
    /// * `price_change_percentage` - windows to include, e.g. 1h, 24h, 7d
    /// * `locale` - language of localized fields (upstream default en)
    /// * `precision` - `full` or decimal places 0-18 for price values
    #[allow(clippy::too_many_arguments)]
    pub async fn coins_markets(
        &self,
        vs_currency: &str,
        ids: &[&str],
        category: Option<&str>,
        order: Option<&str>,
        per_page: Option<u32>,
        page: Option<u32>,
        sparkline: bool,
        price_change_percentage: &[&str],
        locale: Option<&str>,
        precision: Option<&str>,
    ) -> Result<Vec<CoinMarketsItem>> {
        if vs_currency.is_empty() {
            return Err(Error::InvalidParameter(
                "vs_currency should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query
            .add("vs_currency", vs_currency)
            .add_csv("ids", ids)
            .add_opt("category", category)
            .add_opt("order", order)
            .add_opt_num("per_page", per_page)
            .add_opt_num("page", page)
            .add("sparkline", sparkline)
            .add_csv("price_change_percentage", price_change_percentage)
            .add_opt("locale", locale)
            .add_opt("precision", precision);

        let url = self.endpoint(paths::COINS_MARKETS, &query);
        self.get_json(&url).await
    }

    /// Get current data (name, price, market, exchange tickers) for a coin.
    ///
    /// The embedded tickers object is limited to 100 items; use
    /// [`coin_tickers`](Self::coin_tickers) for more.
    ///
    /// # Arguments
    /// * `id` - coin id, per /coins/list (required)
    /// * `localization` - include all localized languages (upstream default true)
    /// * `tickers` - include tickers data (upstream default true)
    /// * `market_data` - include market data (upstream default true)
    /// * `community_data` - include community data (upstream default true)
    /// * `developer_data` - include developer data (upstream default true)
    /// * `sparkline` - include 7-day sparkline (upstream default false)
    #[allow(clippy::too_many_arguments)]
    pub async fn coin(
        &self,
        id: &str,
        localization: bool,
        tickers: bool,
        market_data: bool,
        community_data: bool,
        developer_data: bool,
        sparkline: bool,
    ) -> Result<CoinData> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "coin id should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query
            .add("localization", localization)
            .add("tickers", tickers)
            .add("market_data", market_data)
            .add("community_data", community_data)
            .add("developer_data", developer_data)
            .add("sparkline", sparkline);

        let path = paths::fill(paths::COINS_ID, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get coin tickers, paginated to 100 items per page.
    ///
    /// Returns the tickers plus the total page count derived from the `total`
    /// response header.
    ///
    /// # Arguments
    /// * `id` - coin id (required)
    /// * `exchange_ids` - filter by exchange ids, comma-separated
    /// * `include_exchange_logo` - include exchange logo URLs
    /// * `page` - page through results
    /// * `order` - trust_score_desc (upstream default), trust_score_asc, volume_desc
    /// * `depth` - include 2% orderbook depth (cost_to_move_up_usd / down)
    pub async fn coin_tickers(
        &self,
        id: &str,
        exchange_ids: Option<&str>,
        include_exchange_logo: bool,
        page: Option<u32>,
        order: Option<&str>,
        depth: bool,
    ) -> Result<(CoinTickersResponse, u32)> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "coin id should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query
            .add_opt("exchange_ids", exchange_ids)
            .add("include_exchange_logo", include_exchange_logo)
            .add_opt_num("page", page)
            .add_opt("order", order)
            .add("depth", depth);

        let path = paths::fill(paths::COINS_TICKERS, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json_paged(&url, TICKERS_PAGE_SIZE).await
    }

    /// Get historical data (price, market cap, 24h volume) at a given date.
    ///
    /// The snapshot is taken at 00:00:00 UTC of the requested day.
    ///
    /// # Arguments
    /// * `id` - coin id (required)
    /// * `date` - snapshot date as dd-mm-yyyy, e.g. 30-12-2022 (required)
    /// * `localization` - include localized languages
    pub async fn coin_history(
        &self,
        id: &str,
        date: &str,
        localization: bool,
    ) -> Result<CoinHistoryResponse> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "coin id should not be empty".to_string(),
            ));
        }
        if date.is_empty() {
            return Err(Error::InvalidParameter(
                "date should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add("date", date).add("localization", localization);

        let path = paths::fill(paths::COINS_HISTORY, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get historical market data (price, market cap, 24h volume) with
    /// automatic granularity.
    ///
    /// 1 day from now = 5-minutely data; 2-90 days = hourly; above 90 days =
    /// daily (00:00 UTC).
    ///
    /// # Arguments
    /// * `id` - coin id (required)
    /// * `vs_currency` - target currency (required)
    /// * `days` - data up to this many days ago, e.g. 1, 14, 30, max (required)
    /// * `interval` - data interval; only `daily` is accepted
    /// * `precision` - `full` or decimal places 0-18
    pub async fn coin_market_chart(
        &self,
        id: &str,
        vs_currency: &str,
        days: &str,
        interval: Option<&str>,
        precision: Option<&str>,
    ) -> Result<MarketChartResponse> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "coin id should not be empty".to_string(),
            ));
        }
        if vs_currency.is_empty() {
            return Err(Error::InvalidParameter(
                "vs_currency should not be empty".to_string(),
            ));
        }
        if days.is_empty() {
            return Err(Error::InvalidParameter(
                "days should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query
            .add("vs_currency", vs_currency)
            .add("days", days)
            .add_opt("interval", interval)
            .add_opt("precision", precision);

        let path = paths::fill(paths::COINS_MARKET_CHART, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get historical market data within a UNIX timestamp range.
    ///
    /// # Arguments
    /// * `id` - coin id (required)
    /// * `vs_currency` - target currency (required)
    /// * `from` - start, UNIX timestamp (required)
    /// * `to` - end, UNIX timestamp (required)
    /// * `precision` - `full` or decimal places 0-18
    pub async fn coin_market_chart_range(
        &self,
        id: &str,
        vs_currency: &str,
        from: &str,
        to: &str,
        precision: Option<&str>,
    ) -> Result<MarketChartResponse> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "coin id should not be empty".to_string(),
            ));
        }
        if vs_currency.is_empty() {
            return Err(Error::InvalidParameter(
                "vs_currency should not be empty".to_string(),
            ));
        }
        if from.is_empty() {
            return Err(Error::InvalidParameter(
                "from should not be empty".to_string(),
            ));
        }
        if to.is_empty() {
            return Err(Error::InvalidParameter(
                "to should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query
            .add("vs_currency", vs_currency)
            .add("from", from)
            .add("to", to)
            .add_opt("precision", precision);

        let path = paths::fill(paths::COINS_MARKET_CHART_RANGE, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get OHLC candles for a coin.
    ///
    /// Candle granularity is automatic for public users: 1-2 days = 30
    /// minutes, 3-30 days = 4 hours, 31 days and beyond = 4 days.
    ///
    /// # Arguments
    /// * `id` - coin id (required)
    /// * `vs_currency` - target currency (required)
    /// * `days` - 1/7/14/30/90/180/365/max (required)
    /// * `precision` - `full` or decimal places 0-18
    pub async fn coin_ohlc(
        &self,
        id: &str,
        vs_currency: &str,
        days: &str,
        precision: Option<&str>,
    ) -> Result<Vec<OhlcCandle>> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "coin id should not be empty".to_string(),
            ));
        }
        if vs_currency.is_empty() {
            return Err(Error::InvalidParameter(
                "vs_currency should not be empty".to_string(),
            ));
        }
        if days.is_empty() {
            return Err(Error::InvalidParameter(
                "days should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query
            .add("vs_currency", vs_currency)
            .add("days", days)
            .add_opt("precision", precision);

        let path = paths::fill(paths::COINS_OHLC, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }
}

// Response types specific to coin endpoints

/// One entry of [`CoinGeckoClient::coins_list`]
#[derive(Debug, Clone, Deserialize)]
pub struct CoinListItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Present when requested with `include_platform=true`
    pub platforms: Option<PlatformsItem>,
}

/// One entry of [`CoinGeckoClient::coins_markets`]
#[derive(Debug, Clone, Deserialize)]
pub struct CoinMarketsItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<i32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub ath_date: Option<DateTime<Utc>>,
    pub atl: Option<f64>,
    pub atl_change_percentage: Option<f64>,
    pub atl_date: Option<DateTime<Utc>>,
    pub roi: Option<RoiItem>,
    pub last_updated: Option<DateTime<Utc>>,
    pub sparkline_in_7d: Option<SparklineItem>,
    pub price_change_percentage_1h_in_currency: Option<f64>,
    pub price_change_percentage_24h_in_currency: Option<f64>,
    pub price_change_percentage_7d_in_currency: Option<f64>,
    pub price_change_percentage_14d_in_currency: Option<f64>,
    pub price_change_percentage_30d_in_currency: Option<f64>,
    pub price_change_percentage_200d_in_currency: Option<f64>,
    pub price_change_percentage_1y_in_currency: Option<f64>,
}

/// Response of [`CoinGeckoClient::coin`] and the contract-address lookup
#[derive(Debug, Clone, Deserialize)]
pub struct CoinData {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub asset_platform_id: Option<String>,
    pub platforms: Option<PlatformsItem>,
    pub detail_platforms: Option<DetailPlatformsItem>,
    pub block_time_in_minutes: Option<i64>,
    pub hashing_algorithm: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub public_notice: Option<String>,
    #[serde(default)]
    pub additional_notices: Vec<String>,
    pub localization: Option<LocalizationItem>,
    pub description: Option<DescriptionItem>,
    pub links: Option<LinksItem>,
    pub image: Option<ImageItem>,
    pub country_origin: Option<String>,
    pub genesis_date: Option<String>,
    pub contract_address: Option<String>,
    pub sentiment_votes_up_percentage: Option<f64>,
    pub sentiment_votes_down_percentage: Option<f64>,
    pub watchlist_portfolio_users: Option<u64>,
    pub market_cap_rank: Option<i32>,
    pub market_data: Option<MarketDataItem>,
    pub community_data: Option<CommunityDataItem>,
    pub developer_data: Option<DeveloperDataItem>,
    pub public_interest_stats: Option<PublicInterestStatsItem>,
    pub last_updated: Option<DateTime<Utc>>,
    pub tickers: Option<Vec<Ticker>>,
}

/// Response of [`CoinGeckoClient::coin_tickers`]
#[derive(Debug, Clone, Deserialize)]
pub struct CoinTickersResponse {
    pub name: String,
    pub tickers: Vec<Ticker>,
}

/// Response of [`CoinGeckoClient::coin_history`]
#[derive(Debug, Clone, Deserialize)]
pub struct CoinHistoryResponse {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub localization: Option<LocalizationItem>,
    pub image: Option<ImageItem>,
    pub market_data: Option<HistoryMarketData>,
    pub community_data: Option<CommunityDataItem>,
    pub developer_data: Option<DeveloperDataItem>,
    pub public_interest_stats: Option<PublicInterestStatsItem>,
}

/// Snapshot market data inside [`CoinHistoryResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryMarketData {
    #[serde(default)]
    pub current_price: crate::types::AllCurrencies,
    #[serde(default)]
    pub market_cap: crate::types::AllCurrencies,
    #[serde(default)]
    pub total_volume: crate::types::AllCurrencies,
}

/// Response of the market chart endpoints: series of `[timestamp_ms, value]`
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(f64, Option<f64>)>,
    pub market_caps: Vec<(f64, Option<f64>)>,
    pub total_volumes: Vec<(f64, Option<f64>)>,
}

/// One OHLC candle: `[timestamp_ms, open, high, low, close]`
pub type OhlcCandle = [f64; 5];
