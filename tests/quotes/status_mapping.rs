use httpmock::Method::GET;

use crate::common::{mock_client, setup_server};
use yfinance_api::YfError;

#[tokio::test]
async fn quotes_v7_404_maps_to_not_found() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", "MISSING");
        then.status(404)
            .header("content-type", "application/json")
            .body("{}");
    });

    let client = mock_client(&server);
    let err = client.get_quotes(["MISSING"]).await.unwrap_err();

    mock.assert();
    match err {
        YfError::NotFound { url } => assert!(url.contains("/v7/finance/quote")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn quotes_v7_429_maps_to_rate_limited() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", "AAPL");
        then.status(429).body("Too Many Requests");
    });

    let client = mock_client(&server);
    let err = client.get_quotes(["AAPL"]).await.unwrap_err();

    mock.assert();
    assert!(err.is_network());
    match err {
        YfError::RateLimited { url } => assert!(url.contains("/v7/finance/quote")),
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn quotes_v7_5xx_maps_to_server_error() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v7/finance/quote");
        then.status(503).body("unavailable");
    });

    let client = mock_client(&server);
    let err = client.get_quotes(["AAPL"]).await.unwrap_err();

    mock.assert();
    match err {
        YfError::ServerError { status, .. } => assert_eq!(status, 503),
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn other_non_success_maps_to_status() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v7/finance/quote");
        then.status(401).body("{}");
    });

    let client = mock_client(&server);
    let err = client.get_quotes(["AAPL"]).await.unwrap_err();

    mock.assert();
    match err {
        YfError::Status { status, .. } => assert_eq!(status, 401),
        other => panic!("expected Status, got {other:?}"),
    }
}
