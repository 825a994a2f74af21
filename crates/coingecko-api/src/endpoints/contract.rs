//! Contract-address based coin lookups

use crate::client::CoinGeckoClient;
use crate::endpoints::coins::{CoinData, MarketChartResponse};
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;

impl CoinGeckoClient {
    /// Get coin info from a token contract address.
    ///
    /// # Arguments
    /// * `platform_id` - asset platform, per /asset_platforms (required)
    /// * `contract_address` - token contract address (required)
    pub async fn coin_by_contract(
        &self,
        platform_id: &str,
        contract_address: &str,
    ) -> Result<CoinData> {
        if platform_id.is_empty() {
            return Err(Error::InvalidParameter(
                "asset_platform id should not be empty".to_string(),
            ));
        }
        if contract_address.is_empty() {
            return Err(Error::InvalidParameter(
                "contract_address should not be empty".to_string(),
            ));
        }

        let path = paths::fill(paths::COINS_CONTRACT, &[platform_id, contract_address]);
        let url = self.endpoint(&path, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get historical market data for a token contract, with automatic
    /// granularity (see [`coin_market_chart`](Self::coin_market_chart)).
    ///
    /// # Arguments
    /// * `platform_id` - asset platform (required)
    /// * `contract_address` - token contract address (required)
    /// * `vs_currency` - target currency (required)
    /// * `days` - data up to this many days ago, e.g. 1, 14, 30, max (required)
    /// * `precision` - `full` or decimal places 0-18
    pub async fn contract_market_chart(
        &self,
        platform_id: &str,
        contract_address: &str,
        vs_currency: &str,
        days: &str,
        precision: Option<&str>,
    ) -> Result<MarketChartResponse> {
        if platform_id.is_empty() {
            return Err(Error::InvalidParameter(
                "asset_platform id should not be empty".to_string(),
            ));
        }
        if contract_address.is_empty() {
            return Err(Error::InvalidParameter(
                "contract_address should not be empty".to_string(),
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

        let path = paths::fill(
            paths::COINS_CONTRACT_MARKET_CHART,
            &[platform_id, contract_address],
        );
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// Get historical market data for a token contract within a UNIX
    /// timestamp range.
    ///
    /// # Arguments
    /// * `platform_id` - asset platform (required)
    /// * `contract_address` - token contract address (required)
    /// * `vs_currency` - target currency (required)
    /// * `from` - start, UNIX timestamp (required)
    /// * `to` - end, UNIX timestamp (required)
    /// * `precision` - `full` or decimal places 0-18
    #[allow(clippy::too_many_arguments)]
    pub async fn contract_market_chart_range(
        &self,
        platform_id: &str,
        contract_address: &str,
        vs_currency: &str,
        from: &str,
        to: &str,
        precision: Option<&str>,
    ) -> Result<MarketChartResponse> {
        if platform_id.is_empty() {
            return Err(Error::InvalidParameter(
                "asset_platform id should not be empty".to_string(),
            ));
        }
        if contract_address.is_empty() {
            return Err(Error::InvalidParameter(
                "contract_address should not be empty".to_string(),
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

        let path = paths::fill(
            paths::COINS_CONTRACT_MARKET_CHART_RANGE,
            &[platform_id, contract_address],
        );
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }
}
