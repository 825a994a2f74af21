//! REST API client for GeckoTerminal, the on-chain DEX data platform
//!
//! This crate provides a typed async client for GeckoTerminal's v2 REST API:
//! networks and dexes, liquidity pools (lookup, top, new, search), tokens and
//! token metadata, and pool OHLCV candles.
//!
//! No API key is required; every request pins the upstream API version via
//! the `accept: application/json;version=20230302` header.
//!
//! Responses follow the JSON:API convention: resources are
//! `{id, type, attributes}` objects, related resources arrive under a
//! top-level `included` key, and list endpoints paginate through a `links`
//! object. On-chain decimal figures stay `String` so no precision is lost.
//!
//! # Example
//!
//! ```no_run
//! use geckoterminal_api::GeckoTerminalClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeckoTerminalClient::new();
//!
//!     let pool = client
//!         .pool("eth", "0x60594a405d53811d3bc4766596efd80fd545a270", Some("base_token,quote_token"))
//!         .await?;
//!     println!(
//!         "{}: {:?} USD",
//!         pool.data.attributes.name, pool.data.attributes.base_token_price_usd
//!     );
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

mod paths;
mod query;

// Re-export main types
pub use client::{ClientConfig, GeckoTerminalClient, GECKO_TERMINAL_API_URL};
pub use error::{Error, Result};

// Re-export endpoint-specific types
pub use endpoints::{
    networks::NetworksResponse,
    ohlcv::{OhlcvCandle, OhlcvResponse},
    pools::{PoolResponse, PoolsResponse},
    tokens::{TokenInfoListResponse, TokenInfoResponse, TokenResponse, TokensResponse},
};
pub use types::{
    IncludedItem, NetworkItem, PaginationLinks, PoolAttributes, PoolItem, ResourceId,
    TokenAttributes, TokenInfoItem, TokenItem,
};
