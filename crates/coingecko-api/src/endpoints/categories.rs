//! Asset platform and category endpoints

use crate::client::CoinGeckoClient;
use crate::error::Result;
use crate::paths;
use crate::query::QueryParams;
use chrono::{DateTime, Utc};
use serde::Deserialize;

impl CoinGeckoClient {
    /// List all asset platforms (blockchain networks).
    ///
    /// # Arguments
    /// * `filter` - only `nft` is meaningful (platforms with NFT support)
    pub async fn asset_platforms(&self, filter: Option<&str>) -> Result<Vec<AssetPlatformItem>> {
        let mut query = QueryParams::new();
        query.add_opt("filter", filter);

        let url = self.endpoint(paths::ASSET_PLATFORMS, &query);
        self.get_json(&url).await
    }

    /// List all coin categories (id and name only).
    pub async fn categories_list(&self) -> Result<Vec<CategoryListItem>> {
        let url = self.endpoint(paths::COINS_CATEGORIES_LIST, &QueryParams::new());
        self.get_json(&url).await
    }

    /// List all coin categories with market data.
    ///
    /// # Arguments
    /// * `order` - market_cap_desc (default, injected when unset),
    ///   market_cap_asc, name_desc, name_asc, market_cap_change_24h_desc,
    ///   market_cap_change_24h_asc
    pub async fn categories(&self, order: Option<&str>) -> Result<Vec<CategoryItem>> {
        let mut query = QueryParams::new();
        query.add_str_or("order", order, "market_cap_desc");

        let url = self.endpoint(paths::COINS_CATEGORIES, &query);
        self.get_json(&url).await
    }
}

// Response types specific to these endpoints

/// One entry of [`CoinGeckoClient::asset_platforms`]
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPlatformItem {
    pub id: String,
    pub chain_identifier: Option<i64>,
    pub name: String,
    pub shortname: Option<String>,
    pub native_coin_id: Option<String>,
}

/// One entry of [`CoinGeckoClient::categories_list`]
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryListItem {
    pub category_id: String,
    pub name: String,
}

/// One entry of [`CoinGeckoClient::categories`]
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryItem {
    pub id: String,
    pub name: String,
    pub market_cap: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub content: Option<String>,
    #[serde(default)]
    pub top_3_coins: Vec<String>,
    pub volume_24h: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
}
