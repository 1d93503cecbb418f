use mandi::{Asset, ChartStatus, Period};
use mandi_demos::common::builder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mandi = builder()?.build()?;

    for asset in [Asset::Gold, Asset::UsdInr] {
        let chart = mandi.chart(asset, Period::M1).await;
        println!(
            "{asset} over {}: {:?}, {} points in {}",
            chart.period,
            chart.status,
            chart.points.len(),
            chart.currency
        );
        if chart.status != ChartStatus::Ok {
            continue;
        }
        let sign = chart.currency.sign();
        for (ts, v) in &chart.points {
            println!("  {}  {sign}{v:.2}", ts.date());
        }
    }

    Ok(())
}
