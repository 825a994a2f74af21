//! Client integration tests against a local mock server

use geckoterminal_api::{ClientConfig, Error, GeckoTerminalClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeckoTerminalClient {
    GeckoTerminalClient::with_config(ClientConfig::new().with_base_url(server.uri()))
}

#[tokio::test]
async fn networks_round_trip_with_versioned_accept_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/networks"))
        .and(header("accept", "application/json;version=20230302"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "data": [
                    {"id": "eth", "type": "network",
                     "attributes": {"name": "Ethereum", "coingecko_asset_platform_id": "ethereum"}},
                    {"id": "solana", "type": "network",
                     "attributes": {"name": "Solana", "coingecko_asset_platform_id": null}}
                ],
                "links": {"first": "f", "prev": null, "next": null, "last": "l"}
            }"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let networks = client.networks(None).await.unwrap();
    assert_eq!(networks.data.len(), 2);
    assert_eq!(networks.data[0].id, "eth");
    assert_eq!(
        networks.data[0].attributes.coingecko_asset_platform_id.as_deref(),
        Some("ethereum")
    );
    assert!(networks.data[1].attributes.coingecko_asset_platform_id.is_none());
}

#[tokio::test]
async fn pool_lookup_decodes_included_resources() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/networks/eth/pools/0x60594a405d53811d3bc4766596efd80fd545a270"))
        .and(query_param("include", "base_token,quote_token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "data": {
                    "id": "eth_0x60594a405d53811d3bc4766596efd80fd545a270",
                    "type": "pool",
                    "attributes": {
                        "address": "0x60594a405d53811d3bc4766596efd80fd545a270",
                        "name": "WETH / DAI 0.05%",
                        "base_token_price_usd": "1876.56",
                        "volume_usd": {"h24": "10213456.1"}
                    },
                    "relationships": {
                        "base_token": {"data": {"id": "eth_0xc02a", "type": "token"}}
                    }
                },
                "included": [
                    {"id": "eth_0xc02a", "type": "token",
                     "attributes": {"name": "Wrapped Ether", "symbol": "WETH",
                                    "address": "0xc02a", "coingecko_coin_id": "weth"}}
                ]
            }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pool = client
        .pool(
            "eth",
            "0x60594a405d53811d3bc4766596efd80fd545a270",
            Some("base_token,quote_token"),
        )
        .await
        .unwrap();
    assert_eq!(pool.data.attributes.name, "WETH / DAI 0.05%");
    assert_eq!(pool.included.len(), 1);
    assert_eq!(pool.included[0].attributes.symbol.as_deref(), Some("WETH"));
}

#[tokio::test]
async fn multi_pools_joins_addresses_in_the_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/networks/eth/pools/multi/0xaaa,0xbbb"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"data": []}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pools = client.multi_pools("eth", &["0xaaa", "0xbbb"], None).await.unwrap();
    assert!(pools.data.is_empty());
}

#[tokio::test]
async fn api_error_reports_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/networks"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.networks(None).await.unwrap_err();
    match &err {
        Error::Api { status, message, .. } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "not found");
        }
        other => panic!("wanted Error::Api, got {other:?}"),
    }
    assert!(err
        .to_string()
        .contains("status code: 404, error message: not found"));
}

#[tokio::test]
async fn validation_short_circuits_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert!(matches!(
        client.dexes("", None).await,
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        client.multi_pools("eth", &[], None).await,
        Err(Error::InvalidParameter(_))
    ));
    let err = client
        .pool_ohlcv("eth", "0xaaa", "weekly", None, None, None, None, None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("timeframe"));
}

#[tokio::test]
async fn ohlcv_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/networks/eth/pools/0x60594a/ohlcv/day"))
        .and(query_param("aggregate", "1"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "data": {
                    "id": "ohlcv",
                    "type": "ohlcv_request_response",
                    "attributes": {
                        "ohlcv_list": [
                            [1712880000, 1869.1, 1901.2, 1850.0, 1876.5, 10213456.1],
                            [1712793600, 1840.7, 1875.3, 1822.9, 1869.1, 9821345.6]
                        ]
                    }
                },
                "meta": {
                    "base": {"address": "0xc02a", "name": "Wrapped Ether", "symbol": "WETH"},
                    "quote": {"address": "0x6b17", "name": "Dai", "symbol": "DAI"}
                }
            }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .pool_ohlcv("eth", "0x60594a", "day", Some(1), None, Some(2), None, None)
        .await
        .unwrap();
    assert_eq!(resp.data.attributes.ohlcv_list.len(), 2);
    assert_eq!(resp.data.attributes.ohlcv_list[0][4], 1876.5);
    let meta = resp.meta.unwrap();
    assert_eq!(meta.base.unwrap().symbol.as_deref(), Some("WETH"));
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"name":what?}"#, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.networks(None).await.unwrap_err(),
        Error::Parse(_)
    ));
}
