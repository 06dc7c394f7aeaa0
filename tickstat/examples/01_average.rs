use std::sync::Arc;

use tickstat::Tickstat;
use tickstat_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // 1. Build the service over the CI-safe mock source.
    let service = Tickstat::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;

    // 2. Average price over the trailing 30 minutes.
    let stats = service.average_and_history("AAPL", 30).await?;
    println!(
        "AAPL averaged {:.2} over {} samples",
        stats.average,
        stats.history.len()
    );

    Ok(())
}
