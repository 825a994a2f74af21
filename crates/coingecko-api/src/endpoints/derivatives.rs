//! Derivatives market endpoints

use crate::client::CoinGeckoClient;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use crate::types::IdName;
use serde::Deserialize;

/// Documented default page size of the /derivatives/exchanges listing.
const DERIVATIVES_EXCHANGES_PER_PAGE: u32 = 50;

impl CoinGeckoClient {
    /// List all derivative tickers.
    ///
    /// # Arguments
    /// * `include_tickers` - `all` or `unexpired` (default, injected when unset)
    pub async fn derivatives(&self, include_tickers: Option<&str>) -> Result<Vec<DerivativeItem>> {
        let mut query = QueryParams::new();
        query.add_str_or("include_tickers", include_tickers, "unexpired");

        let url = self.endpoint(paths::DERIVATIVES, &query);
        self.get_json(&url).await
    }

    /// List all derivative exchanges, paginated.
    ///
    /// Returns the exchanges plus the total page count derived from the
    /// `total` response header.
    ///
    /// # Arguments
    /// * `order` - sort order, default open_interest_btc_desc (injected when
    ///   unset); also name_asc, name_desc, open_interest_btc_asc,
    ///   trade_volume_24h_btc_asc, trade_volume_24h_btc_desc
    /// * `per_page` - results per page (default 50, injected when unset)
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn derivatives_exchanges(
        &self,
        order: Option<&str>,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<(Vec<DerivativesExchangeItem>, u32)> {
        if per_page == Some(0) {
            return Err(Error::InvalidParameter(
                "per_page should be greater than 0".to_string(),
            ));
        }
        let per_page = per_page.unwrap_or(DERIVATIVES_EXCHANGES_PER_PAGE);

        let mut query = QueryParams::new();
        query
            .add_str_or("order", order, "open_interest_btc_desc")
            .add("per_page", per_page)
            .add_num_or("page", page, 1);

        let url = self.endpoint(paths::DERIVATIVES_EXCHANGES, &query);
        self.get_json_paged(&url, per_page).await
    }

    /// Get a derivative exchange's data.
    ///
    /// # Arguments
    /// * `id` - exchange id, per /derivatives/exchanges/list (required)
    /// * `include_tickers` - `all` or `unexpired`; tickers are omitted when unset
    pub async fn derivatives_exchange(
        &self,
        id: &str,
        include_tickers: Option<&str>,
    ) -> Result<DerivativesExchangeItem> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "exchange id should not be empty".to_string(),
            ));
        }

        let mut query = QueryParams::new();
        query.add_opt("include_tickers", include_tickers);

        let path = paths::fill(paths::DERIVATIVES_EXCHANGES_ID, &[id]);
        let url = self.endpoint(&path, &query);
        self.get_json(&url).await
    }

    /// List all derivative exchange ids and names.
    pub async fn derivatives_exchanges_list(&self) -> Result<Vec<IdName>> {
        let url = self.endpoint(paths::DERIVATIVES_EXCHANGES_LIST, &QueryParams::new());
        self.get_json(&url).await
    }
}

// Response types specific to derivatives endpoints

/// One entry of [`CoinGeckoClient::derivatives`]
#[derive(Debug, Clone, Deserialize)]
pub struct DerivativeItem {
    pub market: String,
    pub symbol: String,
    pub index_id: Option<String>,
    /// Decimal string, preserved verbatim
    pub price: Option<String>,
    pub price_percentage_change_24h: Option<f64>,
    pub contract_type: Option<String>,
    pub index: Option<f64>,
    pub basis: Option<f64>,
    pub spread: Option<f64>,
    pub funding_rate: Option<f64>,
    pub open_interest: Option<f64>,
    pub volume_24h: Option<f64>,
    pub last_traded_at: Option<i64>,
    pub expired_at: Option<i64>,
}

/// Entry of [`CoinGeckoClient::derivatives_exchanges`] and response of
/// [`CoinGeckoClient::derivatives_exchange`]
#[derive(Debug, Clone, Deserialize)]
pub struct DerivativesExchangeItem {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    pub open_interest_btc: Option<f64>,
    /// Decimal string, preserved verbatim
    pub trade_volume_24h_btc: Option<String>,
    pub number_of_perpetual_pairs: Option<i64>,
    pub number_of_futures_pairs: Option<i64>,
    pub image: Option<String>,
    pub year_established: Option<i32>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub tickers: Vec<DerivativeTicker>,
}

/// Ticker entry returned when `include_tickers` is requested
#[derive(Debug, Clone, Deserialize)]
pub struct DerivativeTicker {
    pub symbol: String,
    pub base: Option<String>,
    pub target: Option<String>,
    pub trade_url: Option<String>,
    pub contract_type: Option<String>,
    pub last: Option<f64>,
    pub h24_percentage_change: Option<f64>,
    pub index: Option<f64>,
    pub index_basis_percentage: Option<f64>,
    pub bid_ask_spread: Option<f64>,
    pub funding_rate: Option<f64>,
    pub open_interest_usd: Option<f64>,
    pub h24_volume: Option<f64>,
    #[serde(default)]
    pub converted_volume: std::collections::HashMap<String, String>,
    #[serde(default)]
    pub converted_last: std::collections::HashMap<String, String>,
    pub last_traded: Option<i64>,
    pub expired_at: Option<i64>,
}
