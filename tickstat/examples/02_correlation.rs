use std::sync::Arc;

use tickstat::Tickstat;
use tickstat_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let service = Tickstat::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;

    // Correlate two tickers over their shared timestamps.
    let report = service.correlation("AAPL", "MSFT", 30).await?;
    println!(
        "corr(AAPL, MSFT) = {:.4}  (avg {:.2} vs {:.2})",
        report.correlation, report.first.average, report.second.average
    );

    // The full universe the upstream knows about.
    for (name, symbol) in service.universe().await?.iter() {
        println!("{symbol:<6} {name}");
    }

    Ok(())
}
