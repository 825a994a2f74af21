//! Pool OHLCV chart endpoint

use crate::client::GeckoTerminalClient;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use serde::Deserialize;

/// Accepted `timeframe` path values
pub const TIMEFRAMES: [&str; 3] = ["day", "hour", "minute"];

impl GeckoTerminalClient {
    /// Get OHLCV candles of a pool.
    ///
    /// Candles are keyed to the pool's base token by default; data goes back
    /// up to 6 months.
    ///
    /// # Arguments
    /// * `network` - network id, per /networks (required)
    /// * `pool_address` - pool address (required)
    /// * `timeframe` - day, hour or minute (required)
    /// * `aggregate` - periods per candle: day 1; hour 1/4/12; minute 1/5/15
    ///   (upstream default 1)
    /// * `before_timestamp` - return candles before this UNIX timestamp
    /// * `limit` - number of candles, max 1000 (upstream default 100)
    /// * `currency` - quote candles in `usd` (upstream default) or `token`
    /// * `token` - key candles to `base` (upstream default), `quote`, or a
    ///   token address
    #[allow(clippy::too_many_arguments)]
    pub async fn pool_ohlcv(
        &self,
        network: &str,
        pool_address: &str,
        timeframe: &str,
        aggregate: Option<u32>,
        before_timestamp: Option<i64>,
        limit: Option<u32>,
        currency: Option<&str>,
        token: Option<&str>,
    ) -> Result<OhlcvResponse> {
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
        if !TIMEFRAMES.contains(&timeframe) {
            return Err(Error::InvalidParameter(format!(
                "timeframe should be one of day, hour, minute, got {timeframe}"
            )));
        }

        let mut query = QueryParams::new();
        query
            .add_opt_num("aggregate", aggregate)
            .add_opt("currency", currency)
            .add_opt("token", token);
        if let Some(ts) = before_timestamp {
            query.add("before_timestamp", ts);
        }
        query.add_opt_num("limit", limit);

        let path = paths::fill(paths::POOL_OHLCV, &[network, pool_address, timeframe]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }
}

// Response types specific to the OHLCV endpoint

/// One candle: `[timestamp, open, high, low, close, volume]`
pub type OhlcvCandle = [f64; 6];

/// Candle series attributes
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvAttributes {
    #[serde(default)]
    pub ohlcv_list: Vec<OhlcvCandle>,
}

/// Candle series resource
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvData {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: OhlcvAttributes,
}

/// Token identity in the OHLCV `meta` object
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvTokenMeta {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub coingecko_coin_id: Option<String>,
}

/// Base/quote token identities accompanying the candle series
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvMeta {
    pub base: Option<OhlcvTokenMeta>,
    pub quote: Option<OhlcvTokenMeta>,
}

/// Response of [`GeckoTerminalClient::pool_ohlcv`]
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcvResponse {
    pub data: OhlcvData,
    pub meta: Option<OhlcvMeta>,
}
