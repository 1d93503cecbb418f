use mandi::{Fetched, Mandi};
use mandi_demos::common::get_connectors;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = Mandi::builder();
    for c in get_connectors()? {
        builder = builder.with_connector(c);
    }
    let mandi = builder.build()?;

    let overview = mandi.market_overview().await;
    println!(
        "USD/INR used for conversion: {:.2} ({:?})",
        overview.usd_inr, overview.rate_source
    );

    for (asset, card) in &overview.assets {
        let sign = asset.quote_currency().sign();
        match card {
            Fetched::Data(snap) => {
                print!(
                    "{asset:<10} {sign}{:>10.2} {:+8.2} ({:+.2}%)",
                    snap.quote.price, snap.quote.change_abs, snap.quote.change_pct
                );
                if let (Some(p), Some(c)) = (snap.price_inr(), snap.change_inr()) {
                    print!("   ₹{p:>12.2} {c:+10.2}");
                }
                println!();
            }
            Fetched::Empty => println!("{asset:<10} no data"),
            Fetched::Failed(e) => println!("{asset:<10} error: {e}"),
        }
    }

    Ok(())
}
