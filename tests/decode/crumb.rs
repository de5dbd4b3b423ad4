use crate::common::fixture;
use yfinance_api::YfError;
use yfinance_api::decode::extract_crumb;

#[test]
fn crumb_is_unescaped() {
    let body = fixture("history_page", "AAPL", "html");
    assert_eq!(extract_crumb(&body).unwrap(), "l45fI/klCHs");
}

#[test]
fn extraction_is_idempotent() {
    let body = fixture("history_page", "AAPL", "html");
    let first = extract_crumb(&body).unwrap();
    let second = extract_crumb(&body).unwrap();
    assert_eq!(first, second);
}

#[test]
fn first_marker_wins_and_match_is_not_greedy() {
    let body = concat!(
        r#"{"CrumbStore":{"crumb":"first"},"Other":{"x":1},"#,
        r#""CrumbStore":{"crumb":"second"},"#
    );
    assert_eq!(extract_crumb(body).unwrap(), "first");
}

#[test]
fn other_escapes_are_decoded_too() {
    let body = r#""CrumbStore":{"crumb":"a/b\\c"},"#;
    assert_eq!(extract_crumb(body).unwrap(), r"a/b\c");
}

#[test]
fn consent_page_without_marker_is_crumb_not_found() {
    let body = "<html><body><form action=\"/consent\">Before you continue</form></body></html>";
    let err = extract_crumb(body).unwrap_err();
    assert!(matches!(err, YfError::CrumbNotFound), "got {err:?}");
    assert!(err.is_decode());
}
