//! API endpoint implementations
//!
//! Each module attaches one group of the endpoint catalogue to
//! [`GeckoTerminalClient`](crate::client::GeckoTerminalClient) and owns the
//! response types specific to that group.

pub mod networks;
pub mod ohlcv;
pub mod pools;
pub mod tokens;
