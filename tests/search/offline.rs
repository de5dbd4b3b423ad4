use httpmock::Method::GET;

use crate::common::{StubTransport, fixture, mock_client, setup_server, stub_client};
use yfinance_api::{AssetKind, YfError};

#[tokio::test]
async fn offline_search_uses_recorded_fixture() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search/apple")
            .query_param("returnMeta", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("search", "apple", "json"));
    });

    let client = mock_client(&server);
    let results = client.search("apple").await.unwrap();

    mock.assert();
    assert_eq!(results.len(), 5);
    assert_eq!(results[0].symbol, "AAPL");
    assert_eq!(results[0].kind, AssetKind::Equity);
}

#[tokio::test]
async fn search_term_is_percent_encoded_into_the_path() {
    let stub = StubTransport::new().route("/", 200, r#"{"data":{"items":[]}}"#);
    let (client, stub) = stub_client(stub);

    let results = yfinance_api::search(&client, "  s&p 500 ").await.unwrap();
    assert!(results.is_empty());

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert!(
        calls[0].as_str().contains("s%26p+500?"),
        "unexpected url {}",
        calls[0]
    );
}

#[tokio::test]
async fn blank_term_is_rejected_before_any_request() {
    let (client, stub) = stub_client(StubTransport::new());

    let err = client.search("   ").await.unwrap_err();

    assert!(matches!(err, YfError::InvalidArgument(_)), "got {err:?}");
    assert_eq!(stub.call_count(), 0);
}
