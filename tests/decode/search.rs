use crate::common::fixture;
use yfinance_api::decode::transform_search_result;
use yfinance_api::{AssetKind, YfError};

#[test]
fn search_fixture_keeps_order_and_drops_incomplete_entries() {
    let results = transform_search_result(&fixture("search", "apple", "json")).unwrap();

    let symbols: Vec<_> = results.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["AAPL", "APLE", "AAPL.MX", "APRU", "AAPY"]);

    let aapl = &results[0];
    assert_eq!(aapl.name, "Apple Inc.");
    assert_eq!(aapl.exchange, "NMS");
    assert_eq!(aapl.kind, AssetKind::Equity);
    assert_eq!(aapl.exchange_display.as_deref(), Some("NASDAQ"));
    assert_eq!(aapl.type_display.as_deref(), Some("Equity"));

    assert_eq!(results[4].kind, AssetKind::Etf);
}

#[test]
fn unknown_type_codes_are_kept_verbatim() {
    let body = r#"{"data":{"items":[
        {"symbol":"XYZ","name":"Xyz Warrant","exch":"NYQ","type":"W"}
    ]}}"#;
    let results = transform_search_result(body).unwrap();
    assert_eq!(results[0].kind, AssetKind::Other("W".into()));
    assert_eq!(results[0].exchange_display, None);
}

#[test]
fn empty_item_list_is_not_an_error() {
    let results = transform_search_result(r#"{"data":{"items":[]}}"#).unwrap();
    assert!(results.is_empty());
}

#[test]
fn missing_items_path_is_missing_data() {
    let err = transform_search_result(r#"{"data":{"suggestions":[]}}"#).unwrap_err();
    assert!(matches!(err, YfError::MissingData(_)), "got {err:?}");
    assert!(err.is_decode());

    let err = transform_search_result(r#"{"data":{"items":{"symbol":"AAPL"}}}"#).unwrap_err();
    assert!(matches!(err, YfError::MissingData(_)), "got {err:?}");
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = transform_search_result("<html>blocked</html>").unwrap_err();
    assert!(matches!(err, YfError::Json(_)), "got {err:?}");
    assert!(err.is_decode());
}
