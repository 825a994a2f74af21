//! Shared item types appearing across multiple endpoint responses
//!
//! Upstream quirks are modelled explicitly: fields the API sometimes omits or
//! nulls are `Option`, and values the API delivers as decimal strings stay
//! `String` for the caller to parse.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Maps currency code to value, e.g. `{"usd": 1901.02}`
pub type AllCurrencies = HashMap<String, f64>;

/// Maps currency code to a timestamp, e.g. the date an ATH was set per currency
pub type CurrenciesToDate = HashMap<String, DateTime<Utc>>;

/// Maps asset platform id to contract address
pub type PlatformsItem = HashMap<String, Option<String>>;

/// Maps locale (en, zh, ...) to the localized string
pub type LocalizationItem = HashMap<String, String>;

/// Maps locale to the localized description
pub type DescriptionItem = HashMap<String, String>;

/// Loosely-shaped links blob (homepage, repos, chat, ...)
pub type LinksItem = HashMap<String, serde_json::Value>;

/// Return-on-investment figures
#[derive(Debug, Clone, Deserialize)]
pub struct RoiItem {
    pub times: f64,
    pub currency: String,
    pub percentage: f64,
}

/// 7-day sparkline prices
#[derive(Debug, Clone, Deserialize)]
pub struct SparklineItem {
    pub price: Vec<f64>,
}

/// Per-platform contract details
#[derive(Debug, Clone, Deserialize)]
pub struct DetailPlatformsInfo {
    pub decimal_place: Option<u32>,
    pub contract_address: String,
}

/// Maps asset platform id to contract details
pub type DetailPlatformsItem = HashMap<String, DetailPlatformsInfo>;

/// Image URLs in the three sizes the API serves
#[derive(Debug, Clone, Deserialize)]
pub struct ImageItem {
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
}

/// Market data block of a coin
#[derive(Debug, Clone, Deserialize)]
pub struct MarketDataItem {
    #[serde(default)]
    pub current_price: AllCurrencies,
    pub total_value_locked: Option<HashMap<String, f64>>,
    pub mcap_to_tvl_ratio: Option<f64>,
    pub fdv_to_tvl_ratio: Option<f64>,
    pub roi: Option<RoiItem>,
    #[serde(default)]
    pub ath: AllCurrencies,
    #[serde(default)]
    pub ath_change_percentage: AllCurrencies,
    #[serde(default)]
    pub ath_date: CurrenciesToDate,
    #[serde(default)]
    pub atl: AllCurrencies,
    #[serde(default)]
    pub atl_change_percentage: AllCurrencies,
    #[serde(default)]
    pub atl_date: CurrenciesToDate,
    #[serde(default)]
    pub market_cap: AllCurrencies,
    pub market_cap_rank: Option<i32>,
    #[serde(default)]
    pub fully_diluted_valuation: AllCurrencies,
    pub market_cap_fdv_ratio: Option<f64>,
    #[serde(default)]
    pub total_volume: AllCurrencies,
    #[serde(default)]
    pub high_24h: AllCurrencies,
    #[serde(default)]
    pub low_24h: AllCurrencies,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub price_change_percentage_14d: Option<f64>,
    pub price_change_percentage_30d: Option<f64>,
    pub price_change_percentage_60d: Option<f64>,
    pub price_change_percentage_200d: Option<f64>,
    pub price_change_percentage_1y: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_24h_in_currency: AllCurrencies,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: AllCurrencies,
    #[serde(default)]
    pub price_change_percentage_24h_in_currency: AllCurrencies,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: AllCurrencies,
    #[serde(default)]
    pub price_change_percentage_14d_in_currency: AllCurrencies,
    #[serde(default)]
    pub price_change_percentage_30d_in_currency: AllCurrencies,
    #[serde(default)]
    pub price_change_percentage_60d_in_currency: AllCurrencies,
    #[serde(default)]
    pub price_change_percentage_200d_in_currency: AllCurrencies,
    #[serde(default)]
    pub price_change_percentage_1y_in_currency: AllCurrencies,
    #[serde(default)]
    pub market_cap_change_24h_in_currency: AllCurrencies,
    #[serde(default)]
    pub market_cap_change_percentage_24h_in_currency: AllCurrencies,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub sparkline_in_7d: Option<SparklineItem>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Community statistics block of a coin
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityDataItem {
    pub facebook_likes: Option<u64>,
    pub twitter_followers: Option<i64>,
    pub reddit_average_posts_48h: Option<f64>,
    pub reddit_average_comments_48h: Option<f64>,
    pub reddit_subscribers: Option<u64>,
    pub reddit_accounts_active_48h: Option<f64>,
    pub telegram_channel_user_count: Option<u64>,
}

/// Developer statistics block of a coin
#[derive(Debug, Clone, Deserialize)]
pub struct DeveloperDataItem {
    pub forks: Option<u64>,
    pub stars: Option<u64>,
    pub subscribers: Option<u64>,
    pub total_issues: Option<u64>,
    pub closed_issues: Option<u64>,
    pub pull_requests_merged: Option<u64>,
    pub pull_request_contributors: Option<u64>,
    pub code_additions_deletions_4_weeks: Option<CodeChanges4Weeks>,
    pub commit_count_4_weeks: Option<u64>,
    pub last_4_weeks_commit_activity_series: Option<Vec<i64>>,
}

/// Additions/deletions over the last four weeks
#[derive(Debug, Clone, Deserialize)]
pub struct CodeChanges4Weeks {
    pub additions: Option<i64>,
    pub deletions: Option<i64>,
}

/// Public interest statistics block of a coin
#[derive(Debug, Clone, Deserialize)]
pub struct PublicInterestStatsItem {
    pub alexa_rank: Option<u64>,
    pub bing_matches: Option<u64>,
}

/// Venue a ticker trades on
#[derive(Debug, Clone, Deserialize)]
pub struct TickerMarket {
    pub name: String,
    pub identifier: String,
    pub has_trading_incentive: bool,
}

/// One exchange ticker for a coin
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    pub base: String,
    pub target: String,
    pub market: TickerMarket,
    pub last: Option<f64>,
    pub volume: Option<f64>,
    #[serde(default)]
    pub converted_last: HashMap<String, f64>,
    #[serde(default)]
    pub converted_volume: HashMap<String, f64>,
    pub trust_score: Option<String>,
    pub bid_ask_spread_percentage: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
    pub last_traded_at: Option<DateTime<Utc>>,
    pub last_fetch_at: Option<DateTime<Utc>>,
    pub is_anomaly: bool,
    pub is_stale: bool,
    pub trade_url: Option<String>,
    pub token_info_url: Option<String>,
    pub coin_id: Option<String>,
    pub target_coin_id: Option<String>,
    /// 2% orderbook depth, present when requested with `depth=true`
    pub cost_to_move_up_usd: Option<f64>,
    pub cost_to_move_down_usd: Option<f64>,
}

/// Minimal id/name pair used by the various `/list` endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct IdName {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_tolerates_sparse_payload() {
        let json = r#"{
            "base": "BTC",
            "target": "USDT",
            "market": {"name": "Binance", "identifier": "binance", "has_trading_incentive": false},
            "last": 64000.5,
            "volume": 12345.0,
            "is_anomaly": false,
            "is_stale": false
        }"#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.market.identifier, "binance");
        assert!(ticker.trust_score.is_none());
        assert!(ticker.converted_last.is_empty());
    }

    #[test]
    fn test_market_data_nullable_fields() {
        let json = r#"{
            "current_price": {"usd": 1901.02},
            "max_supply": null,
            "circulating_supply": 120000000.0
        }"#;
        let data: MarketDataItem = serde_json::from_str(json).unwrap();
        assert_eq!(data.current_price["usd"], 1901.02);
        assert!(data.max_supply.is_none());
        assert_eq!(data.circulating_supply, Some(120000000.0));
    }
}
