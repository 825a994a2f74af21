//! Shared JSON:API response shapes
//!
//! GeckoTerminal speaks JSON:API: every resource is `{id, type, attributes}`,
//! related resources arrive under a top-level `included` key, and list
//! endpoints paginate through a `links` object. On-chain figures (prices,
//! reserves, volumes) are decimal strings upstream and stay `String` here so
//! no precision is lost.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// Bare JSON:API resource identifier
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceId {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// One relationship entry; `data` is null for absent relations
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    pub data: Option<ResourceId>,
}

/// Pagination links of list responses
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationLinks {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

/// Buy/sell counts over one window
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TransactionsItem {
    #[serde(default)]
    pub buys: i64,
    #[serde(default)]
    pub sells: i64,
}

/// Attributes of a network or dex resource
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkAttributes {
    pub name: String,
    pub coingecko_asset_platform_id: Option<String>,
}

/// One network or dex resource
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkItem {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: NetworkAttributes,
}

/// Attributes of a liquidity pool resource
#[derive(Debug, Clone, Deserialize)]
pub struct PoolAttributes {
    pub address: String,
    pub name: String,
    pub pool_created_at: Option<DateTime<Utc>>,
    pub base_token_price_usd: Option<String>,
    pub base_token_price_native_currency: Option<String>,
    pub quote_token_price_usd: Option<String>,
    pub quote_token_price_native_currency: Option<String>,
    pub base_token_price_quote_token: Option<String>,
    pub quote_token_price_base_token: Option<String>,
    pub fdv_usd: Option<String>,
    pub market_cap_usd: Option<String>,
    pub reserve_in_usd: Option<String>,
    /// Window label (`m5`, `h1`, `h6`, `h24`) to percentage string
    #[serde(default)]
    pub price_change_percentage: HashMap<String, Option<String>>,
    #[serde(default)]
    pub transactions: HashMap<String, TransactionsItem>,
    /// Window label to USD volume string
    #[serde(default)]
    pub volume_usd: HashMap<String, Option<String>>,
}

/// One liquidity pool resource
#[derive(Debug, Clone, Deserialize)]
pub struct PoolItem {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: PoolAttributes,
    /// `base_token`, `quote_token` and `dex` resource links
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

/// Attributes of an `included` resource (token or dex)
#[derive(Debug, Clone, Deserialize)]
pub struct IncludedAttributes {
    pub name: String,
    pub address: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
    pub image_url: Option<String>,
    pub coingecko_coin_id: Option<String>,
}

/// One entry under the top-level `included` key
#[derive(Debug, Clone, Deserialize)]
pub struct IncludedItem {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: IncludedAttributes,
}

/// Attributes of a token resource
#[derive(Debug, Clone, Deserialize)]
pub struct TokenAttributes {
    pub address: String,
    pub name: String,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
    pub image_url: Option<String>,
    pub coingecko_coin_id: Option<String>,
    pub total_supply: Option<String>,
    pub price_usd: Option<String>,
    pub fdv_usd: Option<String>,
    pub total_reserve_in_usd: Option<String>,
    pub market_cap_usd: Option<String>,
    /// Window label to USD volume string
    #[serde(default)]
    pub volume_usd: HashMap<String, Option<String>>,
}

/// One token resource
#[derive(Debug, Clone, Deserialize)]
pub struct TokenItem {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: TokenAttributes,
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

/// Attributes of a token-info resource (metadata, not market data)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfoAttributes {
    pub address: Option<String>,
    pub name: String,
    pub symbol: Option<String>,
    pub image_url: Option<String>,
    pub coingecko_coin_id: Option<String>,
    #[serde(default)]
    pub websites: Vec<String>,
    pub description: Option<String>,
    pub gt_score: Option<f64>,
    pub discord_url: Option<String>,
    pub telegram_handle: Option<String>,
    pub twitter_handle: Option<String>,
}

/// One token-info resource
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfoItem {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: TokenInfoAttributes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_item_decodes_jsonapi_shape() {
        let raw = r#"{
            "id": "eth_0x60594a405d53811d3bc4766596efd80fd545a270",
            "type": "pool",
            "attributes": {
                "address": "0x60594a405d53811d3bc4766596efd80fd545a270",
                "name": "WETH / DAI 0.05%",
                "base_token_price_usd": "1876.56",
                "reserve_in_usd": "45851455.7",
                "price_change_percentage": {"h24": "-1.23"},
                "transactions": {"h24": {"buys": 112, "sells": 98}},
                "volume_usd": {"h24": "10213456.1"}
            },
            "relationships": {
                "base_token": {"data": {"id": "eth_0xc02a", "type": "token"}},
                "dex": {"data": {"id": "uniswap_v3", "type": "dex"}}
            }
        }"#;
        let pool: PoolItem = serde_json::from_str(raw).unwrap();
        assert_eq!(pool.attributes.name, "WETH / DAI 0.05%");
        assert_eq!(pool.attributes.base_token_price_usd.as_deref(), Some("1876.56"));
        assert_eq!(pool.attributes.transactions["h24"].buys, 112);
        let dex = pool.relationships["dex"].data.as_ref().unwrap();
        assert_eq!(dex.id, "uniswap_v3");
    }

    #[test]
    fn test_missing_maps_default_to_empty() {
        let raw = r#"{
            "id": "x",
            "type": "pool",
            "attributes": {"address": "0x0", "name": "X / Y"}
        }"#;
        let pool: PoolItem = serde_json::from_str(raw).unwrap();
        assert!(pool.attributes.volume_usd.is_empty());
        assert!(pool.relationships.is_empty());
    }
}
