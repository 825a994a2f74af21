//! Client integration tests against a local mock server

use coingecko_api::{ClientConfig, CoinGeckoClient, Error};
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CoinGeckoClient {
    CoinGeckoClient::with_config(ClientConfig::new().with_base_url(server.uri()))
}

fn pro_client_for(server: &MockServer, api_key: &str) -> CoinGeckoClient {
    CoinGeckoClient::with_config(
        ClientConfig::new()
            .with_api_key(api_key, true)
            .with_base_url(server.uri()),
    )
}

#[tokio::test]
async fn ping_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"gecko_says":"(V3) To the Moon!"}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pong = client.ping().await.unwrap();
    assert_eq!(pong.gecko_says, "(V3) To the Moon!");
}

#[tokio::test]
async fn api_error_carries_url_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_raw(r#"{"error":"invalid request params"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.ping().await.unwrap_err();
    match &err {
        Error::Api {
            url,
            status,
            message,
        } => {
            assert!(url.starts_with(&server.uri()));
            assert_eq!(*status, 400);
            assert_eq!(message, "invalid request params");
        }
        other => panic!("wanted Error::Api, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        format!(
            "failed to call {}/ping, status code: 400, error message: invalid request params",
            server.uri()
        )
    );
}

#[tokio::test]
async fn api_error_falls_back_to_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.ping().await.unwrap_err() {
        Error::Api {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("wanted Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"name":what?}"#, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.ping().await.unwrap_err(),
        Error::Parse(_)
    ));
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

    let err = client
        .simple_price(&[], &["usd"], None, None, None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    assert_eq!(
        err.to_string(),
        "invalid parameter: the length of ids should be greater than 0"
    );

    let err = client.coin("", false, false, false, false, false, false).await;
    assert!(matches!(err, Err(Error::InvalidParameter(_))));

    let err = client.exchange_volume_chart_range("binance", 0, 1672531200).await;
    assert!(matches!(err, Err(Error::InvalidParameter(_))));
}

#[tokio::test]
async fn pro_key_is_sent_as_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("x-cg-pro-api-key", "test_api_key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"gecko_says":"ok"}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = pro_client_for(&server, "test_api_key");
    client.ping().await.unwrap();
}

#[tokio::test]
async fn free_tier_sends_no_key_header() {
    let server = MockServer::start().await;
    // a keyed request would match this mock and trip the expectation
    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header_exists("x-cg-pro-api-key"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"gecko_says":"ok"}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.ping().await.unwrap();
}

#[tokio::test]
async fn paged_listing_derives_page_count_from_total_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exchanges"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("total", "1009")
                .set_body_raw(r#"[{"id":"binance","name":"Binance"}]"#, "application/json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (exchanges, pages) = client.exchanges(None, None).await.unwrap();
    assert_eq!(exchanges.len(), 1);
    assert_eq!(exchanges[0].id, "binance");
    assert_eq!(pages, 11);
}

#[tokio::test]
async fn missing_total_header_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exchanges"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.exchanges(None, None).await.unwrap_err(),
        Error::PaginationHeader(_)
    ));
}

#[tokio::test]
async fn tickers_use_fixed_page_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/tickers"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("total", "250")
                .set_body_raw(r#"{"name":"Bitcoin","tickers":[]}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (resp, pages) = client
        .coin_tickers("bitcoin", None, false, None, None, false)
        .await
        .unwrap();
    assert_eq!(resp.name, "Bitcoin");
    // 250 items at the fixed ticker page size of 100
    assert_eq!(pages, 3);
}

#[tokio::test]
async fn defaults_are_injected_into_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/derivatives/exchanges"))
        .and(query_param("order", "open_interest_btc_desc"))
        .and(query_param("per_page", "50"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("total", "120")
                .set_body_raw("[]", "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (_, pages) = client.derivatives_exchanges(None, None, None).await.unwrap();
    assert_eq!(pages, 3);
}
