use httpmock::Method::GET;

use crate::common::{StubTransport, dec, fixture, mock_client, setup_server, stub_client};
use yfinance_api::{AssetKind, YfError, currency_pair_symbol};

#[test]
fn currency_pair_symbol_appends_suffix() {
    assert_eq!(currency_pair_symbol("USD", "EUR").unwrap(), "USDEUR=X");
    assert_eq!(currency_pair_symbol(" gbp ", "JPY").unwrap(), "gbpJPY=X");
    assert!(matches!(
        currency_pair_symbol("USD", " "),
        Err(YfError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn exchange_rate_queries_pair_symbol() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", "USDEUR=X");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("quote_v7", "USDEUR", "json"));
    });

    let client = mock_client(&server);
    let rate = client.get_exchange_rate("USD", "EUR").await.unwrap().unwrap();

    mock.assert();
    assert_eq!(rate.symbol(), "USDEUR=X");
    assert_eq!(rate.price(), Some(dec("0.9124")));
    assert_eq!(rate.currency(), Some("EUR"));
    assert_eq!(rate.quote_type(), Some(&AssetKind::Currency));
}

#[tokio::test]
async fn exchange_rates_batch_into_one_request() {
    let stub = StubTransport::new().route(
        "/v7/finance/quote",
        200,
        fixture("quote_v7", "USDEUR", "json"),
    );
    let (client, stub) = stub_client(stub);

    let rates = client
        .get_exchange_rates([("USD", "EUR"), ("GBP", "USD")])
        .await
        .unwrap();
    assert_eq!(rates.len(), 1);

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    let symbols: Vec<String> = calls[0]
        .query_pairs()
        .filter(|(k, _)| k == "symbols")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(symbols, ["USDEUR=X,GBPUSD=X"]);
}

#[tokio::test]
async fn blank_currency_code_sends_nothing() {
    let (client, stub) = stub_client(StubTransport::new());

    let err = client.get_exchange_rate("", "EUR").await.unwrap_err();

    assert!(err.is_argument());
    assert_eq!(stub.call_count(), 0);
}
