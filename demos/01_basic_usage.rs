use std::time::Duration;

use yfinance_api::YfClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Client with a 10-second request timeout.
    let client = YfClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Look up symbols by name.
    println!("--- Search: \"apple\" ---");
    for hit in client.search("apple").await?.iter().take(5) {
        println!(
            "  {:<10} {:<40} {} ({:?})",
            hit.symbol,
            hit.name,
            hit.exchange_display.as_deref().unwrap_or(&hit.exchange),
            hit.kind
        );
    }
    println!();

    // 3. Batch quotes in a single request.
    println!("--- Quotes ---");
    for quote in client.get_quotes(["AAPL", "MSFT", "NVDA"]).await? {
        println!(
            "  {}: {} {} ({:?})",
            quote.symbol(),
            quote.price().map(|p| p.round_dp(2).to_string()).unwrap_or_default(),
            quote.currency().unwrap_or_default(),
            quote.market_state()
        );
    }
    println!();

    // 4. Exchange rates are quotes of `FROMTO=X` symbols.
    println!("--- Exchange rates ---");
    for rate in client
        .get_exchange_rates([("USD", "EUR"), ("EUR", "JPY")])
        .await?
    {
        println!("  {}: {:?}", rate.symbol(), rate.price());
    }

    Ok(())
}
