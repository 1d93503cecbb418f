use mandi::Verdict;
use mandi_demos::common::builder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mandi = builder()?.news_limit(10).build()?;

    let pulse = mandi.geopolitical_pulse().await;
    let marker = match pulse.result.verdict {
        Verdict::Positive => "(+)",
        Verdict::Negative => "(-)",
        Verdict::Neutral => "(=)",
    };
    println!(
        "Geopolitical pulse: {} {marker} average {:.3}",
        pulse.result.verdict, pulse.result.average_score
    );

    if let Some(items) = pulse.news.data() {
        for item in items {
            let score = mandi.analyzer().polarity_scores(&item.text()).compound;
            println!("{score:+.3}  {}  [{}]", item.title, item.published);
            let snippet = item.summary_snippet(120);
            if !snippet.is_empty() {
                println!("        {snippet}");
            }
        }
    } else {
        println!("no headlines: {:?}", pulse.news);
    }

    Ok(())
}
