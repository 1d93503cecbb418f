use mandi::{Asset, NewsQuery, Period};
use mandi_demos::common::builder;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,mandi=trace,mandi_yfinance=trace,mandi_gnews=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let mandi = builder()?.build()?;

    let _ = mandi.price_quote(Asset::Gold.symbol()).await?;
    let _ = mandi.chart(Asset::Oil, Period::M1).await;
    let _ = mandi.sentiment_pulse(&NewsQuery::geopolitics().with_limit(5)).await;

    Ok(())
}
