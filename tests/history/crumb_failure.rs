use chrono::NaiveDate;

use crate::common::{StubTransport, fixture, stub_client};
use yfinance_api::{Interval, YfError};

fn range() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
    )
}

#[tokio::test]
async fn page_without_crumb_stops_before_download() {
    let stub = StubTransport::new()
        .route("/history", 200, "<html><body>Before you continue</body></html>")
        .route("/download/", 200, fixture("history_download", "AAPL", "csv"));
    let (client, stub) = stub_client(stub);
    let (start, end) = range();

    let err = client
        .get_historical_data("AAPL", Interval::Day, start, end)
        .await
        .unwrap_err();

    assert!(matches!(err, YfError::CrumbNotFound), "got {err:?}");
    assert_eq!(stub.call_count(), 1);
    assert!(stub.calls()[0].path().ends_with("/AAPL/history"));
}

#[tokio::test]
async fn transport_failure_of_page_request_is_returned_unchanged() {
    let stub = StubTransport::new().fail("/history", "connection reset by peer");
    let (client, stub) = stub_client(stub);
    let (start, end) = range();

    let err = client
        .get_historical_data("AAPL", Interval::Day, start, end)
        .await
        .unwrap_err();

    match err {
        YfError::Transport(msg) => assert_eq!(msg, "connection reset by peer"),
        other => panic!("expected Transport error, got {other:?}"),
    }
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn download_uses_crumb_from_page() {
    let stub = StubTransport::new()
        .route("/history", 200, fixture("history_page", "AAPL", "html"))
        .route("/download/", 200, fixture("history_download", "AAPL", "csv"));
    let (client, stub) = stub_client(stub);
    let (start, end) = range();

    let series = client
        .get_historical_data("AAPL", Interval::Month, start, end)
        .await
        .unwrap();
    assert_eq!(series.points.len(), 7);

    let calls = stub.calls();
    assert_eq!(calls.len(), 2);
    let query: Vec<(String, String)> = calls[1].query_pairs().into_owned().collect();
    assert!(query.contains(&("crumb".into(), "l45fI/klCHs".into())));
    assert!(query.contains(&("interval".into(), "1mo".into())));
    assert!(query.contains(&("events".into(), "history".into())));
}

#[tokio::test]
async fn each_call_fetches_a_fresh_crumb() {
    let stub = StubTransport::new()
        .route("/history", 200, fixture("history_page", "AAPL", "html"))
        .route("/download/", 200, fixture("history_download", "AAPL", "csv"));
    let (client, stub) = stub_client(stub);
    let (start, end) = range();

    for _ in 0..2 {
        client
            .get_historical_data("AAPL", Interval::Day, start, end)
            .await
            .unwrap();
    }

    let pages = stub
        .calls()
        .iter()
        .filter(|u| u.path().ends_with("/history"))
        .count();
    assert_eq!(pages, 2);
    assert_eq!(stub.call_count(), 4);
}
