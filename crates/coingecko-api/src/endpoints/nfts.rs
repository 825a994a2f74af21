//! NFT collection endpoints

use crate::client::CoinGeckoClient;
use crate::error::{Error, Result};
use crate::paths;
use crate::query::QueryParams;
use serde::Deserialize;

/// Documented default page size of the /nfts/list listing.
const NFTS_LIST_PER_PAGE: u32 = 100;

impl CoinGeckoClient {
    /// List all supported NFT collections, paginated.
    ///
    /// Returns the collections plus the total page count derived from the
    /// `total` response header.
    ///
    /// # Arguments
    /// * `order` - h24_volume_native_asc/desc, floor_price_native_asc/desc,
    ///   market_cap_native_asc/desc, market_cap_usd_asc/desc
    /// * `asset_platform_id` - filter by asset platform
    /// * `per_page` - 1..250 results per page (default 100, injected when unset)
    /// * `page` - page through results (default 1, injected when unset)
    pub async fn nfts_list(
        &self,
        order: Option<&str>,
        asset_platform_id: Option<&str>,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<(Vec<NftListItem>, u32)> {
        if per_page == Some(0) {
            return Err(Error::InvalidParameter(
                "per_page should be greater than 0".to_string(),
            ));
        }
        let per_page = per_page.unwrap_or(NFTS_LIST_PER_PAGE);

        let mut query = QueryParams::new();
        query
            .add_opt("order", order)
            .add_opt("asset_platform_id", asset_platform_id)
            .add("per_page", per_page)
            .add_num_or("page", page, 1);

        let url = self.endpoint(paths::NFTS_LIST, &query);
        self.get_json_paged(&url, per_page).await
    }

    /// Get current data for an NFT collection.
    ///
    /// # Arguments
    /// * `id` - NFT collection id, per /nfts/list (required)
    pub async fn nft(&self, id: &str) -> Result<NftData> {
        if id.is_empty() {
            return Err(Error::InvalidParameter(
                "nft id should not be empty".to_string(),
            ));
        }

        let path = paths::fill(paths::NFTS_ID, &[id]);
        let url = self.endpoint(&path, &QueryParams::new());
        self.get_json(&url).await
    }

    /// Get current data for an NFT collection by its contract address.
    ///
    /// Solana and Art Blocks collections are not served here; use
    /// [`nft`](Self::nft) for those.
    ///
    /// # Arguments
    /// * `asset_platform_id` - asset platform, per /asset_platforms?filter=nft (required)
    /// * `contract_address` - collection contract address (required)
    pub async fn nft_by_contract(
        &self,
        asset_platform_id: &str,
        contract_address: &str,
    ) -> Result<NftData> {
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

        let path = paths::fill(paths::NFTS_CONTRACT, &[asset_platform_id, contract_address]);
        let url = self.endpoint(&path, &QueryParams::new());
        self.get_json(&url).await
    }
}

// Response types specific to NFT endpoints

/// One entry of [`CoinGeckoClient::nfts_list`]
#[derive(Debug, Clone, Deserialize)]
pub struct NftListItem {
    pub id: String,
    pub contract_address: Option<String>,
    pub name: String,
    pub asset_platform_id: Option<String>,
    pub symbol: Option<String>,
}

/// Value quoted in both the collection's native currency and USD
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NativeUsdValue {
    pub native_currency: Option<f64>,
    pub usd: Option<f64>,
}

/// Image URLs of an NFT collection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NftImage {
    pub small: Option<String>,
}

/// Response of [`CoinGeckoClient::nft`] and [`CoinGeckoClient::nft_by_contract`]
#[derive(Debug, Clone, Deserialize)]
pub struct NftData {
    pub id: String,
    pub contract_address: Option<String>,
    pub asset_platform_id: Option<String>,
    pub name: String,
    pub symbol: Option<String>,
    #[serde(default)]
    pub image: NftImage,
    pub description: Option<String>,
    pub native_currency: Option<String>,
    pub native_currency_symbol: Option<String>,
    #[serde(default)]
    pub floor_price: NativeUsdValue,
    #[serde(default)]
    pub market_cap: NativeUsdValue,
    #[serde(default)]
    pub volume_24h: NativeUsdValue,
    pub floor_price_in_usd_24h_percentage_change: Option<f64>,
    pub number_of_unique_addresses: Option<f64>,
    pub number_of_unique_addresses_24h_percentage_change: Option<f64>,
    pub volume_in_usd_24h_percentage_change: Option<f64>,
    pub total_supply: Option<f64>,
    pub one_day_sales: Option<f64>,
    pub one_day_sales_24h_percentage_change: Option<f64>,
    pub one_day_average_sale_price: Option<f64>,
    pub one_day_average_sale_price_24h_percentage_change: Option<f64>,
}
