use chrono::{Duration, Utc};
use yfinance_api::{HistoryBuilder, Interval, YfClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = YfClient::default();
    let end = Utc::now().date_naive();
    let start = end - Duration::days(30);

    // 1. Daily bars for the last month.
    let series = client
        .get_historical_data("AAPL", Interval::Day, start, end)
        .await?;
    println!("--- AAPL daily, {start} to {end} ---");
    for p in &series.points {
        println!(
            "  {}  open={:?} close={:?} volume={:?}",
            p.date, p.open, p.close, p.volume
        );
    }
    if series.skipped_rows() > 0 {
        println!("  ({} rows skipped)", series.skipped_rows());
        for w in &series.warnings {
            println!("    line {}: {}", w.line, w.reason);
        }
    }
    println!();

    // 2. Weekly bars over a year through the builder.
    let weekly = HistoryBuilder::new(&client, "MSFT")
        .interval(Interval::Week)
        .between(end - Duration::days(365), end)
        .fetch()
        .await?
        .into_points();
    println!("--- MSFT weekly: {} bars ---", weekly.len());
    if let (Some(first), Some(last)) = (weekly.first(), weekly.last()) {
        println!("  first: {} close={:?}", first.date, first.close);
        println!("  last:  {} close={:?}", last.date, last.close);
    }

    Ok(())
}
