//! GeckoTerminal API path templates
//!
//! Placeholders are substituted positionally by the endpoint methods.

// networks
pub(crate) const NETWORKS: &str = "/networks";
pub(crate) const NETWORK_DEXES: &str = "/networks/{}/dexes";

// pools
pub(crate) const POOL: &str = "/networks/{}/pools/{}";
pub(crate) const POOLS_MULTI: &str = "/networks/{}/pools/multi/{}";
pub(crate) const TOP_POOLS: &str = "/networks/{}/pools";
pub(crate) const TOP_POOLS_ON_DEX: &str = "/networks/{}/dexes/{}/pools";
pub(crate) const NEW_POOLS: &str = "/networks/{}/new_pools";
pub(crate) const NEW_POOLS_ALL_NETWORKS: &str = "/networks/new_pools";
pub(crate) const SEARCH_POOLS: &str = "/search/pools";

// tokens
pub(crate) const TOKEN_POOLS: &str = "/networks/{}/tokens/{}/pools";
pub(crate) const TOKEN: &str = "/networks/{}/tokens/{}";
pub(crate) const TOKENS_MULTI: &str = "/networks/{}/tokens/multi/{}";
pub(crate) const TOKEN_INFO: &str = "/networks/{}/tokens/{}/info";
pub(crate) const POOL_TOKENS_INFO: &str = "/networks/{}/pools/{}/info";
pub(crate) const TOKENS_INFO_RECENTLY_UPDATED: &str = "/tokens/info_recently_updated";

// ohlcv
pub(crate) const POOL_OHLCV: &str = "/networks/{}/pools/{}/ohlcv/{}";

/// Substitute path placeholders positionally.
pub(crate) fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut parts = template.split("{}");
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for (part, arg) in parts.zip(args) {
        out.push_str(arg);
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill() {
        assert_eq!(fill(NETWORK_DEXES, &["eth"]), "/networks/eth/dexes");
        assert_eq!(
            fill(POOL_OHLCV, &["eth", "0x60594a", "day"]),
            "/networks/eth/pools/0x60594a/ohlcv/day"
        );
    }
}
