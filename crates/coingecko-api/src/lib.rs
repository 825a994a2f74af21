//! REST API client for the CoinGecko cryptocurrency data platform
//!
//! This crate provides a typed async client for CoinGecko's v3 REST API,
//! covering the public endpoints plus the paid (Pro) and enterprise tiers.
//!
//! # Features
//!
//! - **Simple**: ping, spot prices, supported quote currencies
//! - **Coins**: listings, markets, detail, tickers, history, market charts, OHLC
//! - **Exchanges / Derivatives / NFTs**: venue listings, detail, tickers, volume charts
//! - **Global**: exchange rates, search, trending, global market and DeFi data
//! - **Paid & enterprise**: new listings, top movers, NFT markets, circulating supply
//!
//! # Authentication
//!
//! Endpoints on the public host need no key. With a Pro subscription, pass the
//! key and set the pro flag; requests then go to the pro host with the key in
//! the `x-cg-pro-api-key` header.
//!
//! # Example
//!
//! ```no_run
//! use coingecko_api::CoinGeckoClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoClient::new("", false);
//!     let pong = client.ping().await?;
//!     println!("{}", pong.gecko_says);
//!
//!     let prices = client
//!         .simple_price(&["bitcoin"], &["usd"], None, None, None, None, None)
//!         .await?;
//!     println!("BTC/USD: {:?}", prices["bitcoin"]["usd"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pagination
//!
//! Paginated operations return the decoded page together with the total page
//! count, computed from the `total` response header and the effective page
//! size. A missing or malformed header is reported as
//! [`Error::PaginationHeader`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod pagination;
pub mod types;

mod paths;
mod query;

// Re-export main types
pub use client::{ClientConfig, CoinGeckoClient, PRO_API_URL, PUBLIC_API_URL};
pub use error::{Error, Result};

// Re-export endpoint-specific types
pub use endpoints::{
    categories::{AssetPlatformItem, CategoryItem, CategoryListItem},
    coins::{
        CoinData, CoinListItem, CoinMarketsItem, CoinTickersResponse, MarketChartResponse,
        OhlcCandle,
    },
    derivatives::{DerivativeItem, DerivativesExchangeItem},
    exchanges::{ExchangeDetailResponse, ExchangeItem, ExchangeTickersResponse},
    global::{GlobalResponse, SearchResponse, SearchTrendingResponse},
    nfts::{NftData, NftListItem},
    simple::{PingResponse, SimplePriceResponse},
};
pub use types::{IdName, Ticker};
