//! Pagination support for list endpoints
//!
//! CoinGecko delivers the total row count of paginated endpoints out-of-band,
//! in a response header literally named `total`. The page count derived from it
//! is only trustworthy when that header parses cleanly, so a missing or
//! malformed header is a hard error rather than a silent default.

use crate::error::{Error, Result};
use reqwest::header::HeaderMap;

/// Name of the response header carrying the total row count
pub const TOTAL_HEADER: &str = "total";

/// Compute the number of pages needed to hold `total` items at `per_page`
/// items per page.
///
/// `total` exactly divisible by `per_page` yields `total / per_page` pages,
/// and a `total` of zero yields zero pages. `per_page` must be positive;
/// every caller injects a documented default before reaching this point.
pub fn total_pages(total: u32, per_page: u32) -> u32 {
    debug_assert!(per_page > 0, "per_page must be positive");
    (total + per_page - 1) / per_page
}

/// Extract the `total` header and derive a page count from it.
pub(crate) fn page_count_from_headers(headers: &HeaderMap, per_page: u32) -> Result<u32> {
    let value = headers
        .get(TOTAL_HEADER)
        .ok_or_else(|| Error::PaginationHeader("missing total response header".to_string()))?;
    let total: u32 = value
        .to_str()
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| {
            Error::PaginationHeader(format!("non-numeric total response header: {value:?}"))
        })?;
    Ok(total_pages(total, per_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(1009, 100), 11);
        assert_eq!(total_pages(1000, 100), 10);
        assert_eq!(total_pages(0, 100), 0);
        assert_eq!(total_pages(1, 100), 1);
        assert_eq!(total_pages(100, 100), 1);
        assert_eq!(total_pages(101, 100), 2);
    }

    #[test]
    fn test_page_count_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_HEADER, HeaderValue::from_static("1009"));
        assert_eq!(page_count_from_headers(&headers, 100).unwrap(), 11);
    }

    #[test]
    fn test_missing_total_header() {
        let headers = HeaderMap::new();
        let err = page_count_from_headers(&headers, 100).unwrap_err();
        assert!(matches!(err, Error::PaginationHeader(_)));
        assert!(err.to_string().contains("missing total"));
    }

    #[test]
    fn test_non_numeric_total_header() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_HEADER, HeaderValue::from_static("lots"));
        let err = page_count_from_headers(&headers, 100).unwrap_err();
        assert!(matches!(err, Error::PaginationHeader(_)));
    }
}
