//! CoinGecko API path templates
//!
//! Placeholders are substituted positionally by the endpoint methods.
//! Both the public and pro hosts serve the same paths; the tier split below
//! reflects which subscription unlocks them.

// ping
pub(crate) const PING: &str = "/ping";

// simple
pub(crate) const SIMPLE_PRICE: &str = "/simple/price";
pub(crate) const SIMPLE_TOKEN_PRICE: &str = "/simple/token_price/{}";
pub(crate) const SUPPORTED_VS_CURRENCIES: &str = "/simple/supported_vs_currencies";

// coins
pub(crate) const COINS_LIST: &str = "/coins/list";
pub(crate) const COINS_MARKETS: &str = "/coins/markets";
pub(crate) const COINS_ID: &str = "/coins/{}";
pub(crate) const COINS_TICKERS: &str = "/coins/{}/tickers";
pub(crate) const COINS_HISTORY: &str = "/coins/{}/history";
pub(crate) const COINS_MARKET_CHART: &str = "/coins/{}/market_chart";
pub(crate) const COINS_MARKET_CHART_RANGE: &str = "/coins/{}/market_chart/range";
pub(crate) const COINS_OHLC: &str = "/coins/{}/ohlc";

// contract
pub(crate) const COINS_CONTRACT: &str = "/coins/{}/contract/{}";
pub(crate) const COINS_CONTRACT_MARKET_CHART: &str = "/coins/{}/contract/{}/market_chart";
pub(crate) const COINS_CONTRACT_MARKET_CHART_RANGE: &str = "/coins/{}/contract/{}/market_chart/range";

// asset platforms
pub(crate) const ASSET_PLATFORMS: &str = "/asset_platforms";

// categories
pub(crate) const COINS_CATEGORIES_LIST: &str = "/coins/categories/list";
pub(crate) const COINS_CATEGORIES: &str = "/coins/categories";

// exchanges
pub(crate) const EXCHANGES: &str = "/exchanges";
pub(crate) const EXCHANGES_LIST: &str = "/exchanges/list";
pub(crate) const EXCHANGES_ID: &str = "/exchanges/{}";
pub(crate) const EXCHANGES_TICKERS: &str = "/exchanges/{}/tickers";
pub(crate) const EXCHANGES_VOLUME_CHART: &str = "/exchanges/{}/volume_chart";

// derivatives
pub(crate) const DERIVATIVES: &str = "/derivatives";
pub(crate) const DERIVATIVES_EXCHANGES: &str = "/derivatives/exchanges";
pub(crate) const DERIVATIVES_EXCHANGES_ID: &str = "/derivatives/exchanges/{}";
pub(crate) const DERIVATIVES_EXCHANGES_LIST: &str = "/derivatives/exchanges/list";

// nfts
pub(crate) const NFTS_LIST: &str = "/nfts/list";
pub(crate) const NFTS_ID: &str = "/nfts/{}";
pub(crate) const NFTS_CONTRACT: &str = "/nfts/{}/contract/{}";

// exchange rates
pub(crate) const EXCHANGE_RATES: &str = "/exchange_rates";

// search
pub(crate) const SEARCH: &str = "/search";
pub(crate) const SEARCH_TRENDING: &str = "/search/trending";

// global
pub(crate) const GLOBAL: &str = "/global";
pub(crate) const GLOBAL_DEFI: &str = "/global/decentralized_finance_defi";

// companies
pub(crate) const COMPANIES_TREASURY: &str = "/companies/public_treasury/{}";

// paid plan
pub(crate) const COINS_LIST_NEW: &str = "/coins/list/new";
pub(crate) const TOP_GAINERS_LOSERS: &str = "/coins/top_gainers_losers";
pub(crate) const GLOBAL_MARKET_CAP_CHART: &str = "/global/market_cap_chart";
pub(crate) const NFTS_MARKETS: &str = "/nfts/markets";
pub(crate) const NFTS_MARKET_CHART: &str = "/nfts/{}/market_chart";
pub(crate) const NFTS_CONTRACT_MARKET_CHART: &str = "/nfts/{}/contract/{}/market_chart";
pub(crate) const NFTS_TICKERS: &str = "/nfts/{}/tickers";
pub(crate) const EXCHANGE_VOLUME_CHART_RANGE: &str = "/exchanges/{}/volume_chart/range";

// enterprise plan
pub(crate) const CIRCULATING_SUPPLY_CHART: &str = "/coins/{}/circulating_supply_chart";
pub(crate) const CIRCULATING_SUPPLY_CHART_RANGE: &str = "/coins/{}/circulating_supply_chart/range";
pub(crate) const TOKEN_LIST_ALL: &str = "/token_lists/{}/all.json";

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
    fn test_fill_single_placeholder() {
        assert_eq!(fill(COINS_ID, &["bitcoin"]), "/coins/bitcoin");
        assert_eq!(fill(COINS_TICKERS, &["bitcoin"]), "/coins/bitcoin/tickers");
    }

    #[test]
    fn test_fill_two_placeholders() {
        assert_eq!(
            fill(COINS_CONTRACT, &["ethereum", "0xdead"]),
            "/coins/ethereum/contract/0xdead"
        );
        assert_eq!(
            fill(NFTS_CONTRACT_MARKET_CHART, &["ethereum", "0xdead"]),
            "/nfts/ethereum/contract/0xdead/market_chart"
        );
    }

    #[test]
    fn test_fill_no_placeholder() {
        assert_eq!(fill(PING, &[]), "/ping");
    }
}
