//! API endpoint implementations
//!
//! Each module attaches one group of the endpoint catalogue to
//! [`CoinGeckoClient`](crate::client::CoinGeckoClient) and owns the response
//! types specific to that group.

pub mod categories;
pub mod coins;
pub mod contract;
pub mod derivatives;
pub mod enterprise;
pub mod exchanges;
pub mod global;
pub mod nfts;
pub mod pro;
pub mod simple;
