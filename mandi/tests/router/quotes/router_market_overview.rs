use std::time::Duration;

use mandi::{Asset, Fetched, Mandi, MandiError, PriceQuote, RateSource};
use mandi_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{GOLD, USD_INR, approx, mock_mandi};

#[tokio::test]
async fn overview_converts_commodities_at_the_live_rate() {
    let overview = mock_mandi().market_overview().await;

    assert_eq!(overview.rate_source, RateSource::Live);
    assert!(!overview.used_fallback_rate());
    assert!(approx(overview.usd_inr, 83.12));

    let order: Vec<Asset> = overview.assets.iter().map(|(a, _)| *a).collect();
    assert_eq!(order, Asset::ALL.to_vec());

    let gold = overview.get(Asset::Gold).and_then(Fetched::data).unwrap();
    assert_eq!(gold.asset, Asset::Gold);
    assert!(approx(gold.quote.price, 2_051.40));
    assert!(approx(gold.price_inr().unwrap(), 2_051.40 * 83.12));
    assert!(approx(gold.change_inr().unwrap(), (2_051.40 - 2_043.10) * 83.12));
    assert!(approx(gold.inr.unwrap().change_pct, gold.quote.change_pct));

    let fx = overview.get(Asset::UsdInr).and_then(Fetched::data).unwrap();
    assert!(fx.inr.is_none());
    assert!(approx(fx.quote.price, 83.12));
}

#[tokio::test]
async fn missing_rate_uses_configured_fallback() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_quote_behavior(GOLD, MockBehavior::Return(PriceQuote::new(2_000.0, 1_990.0)))
        .await;
    // Nothing scripted for INR=X: quote and history both fail.
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let overview = mandi.market_overview().await;
    assert_eq!(overview.rate_source, RateSource::Fallback);
    assert_eq!(overview.usd_inr, 80.0);
    assert!(overview.get(Asset::UsdInr).unwrap().is_failed());

    let gold = overview.get(Asset::Gold).and_then(Fetched::data).unwrap();
    assert_eq!(gold.price_inr(), Some(160_000.0));
    assert_eq!(gold.change_inr(), Some(800.0));
}

#[tokio::test]
async fn zero_rate_uses_custom_fallback() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_quote_behavior(GOLD, MockBehavior::Return(PriceQuote::new(10.0, 10.0)))
        .await;
    ctrl.set_quote_behavior(USD_INR, MockBehavior::Return(PriceQuote::new(0.0, 0.0)))
        .await;
    let mandi = Mandi::builder()
        .with_connector(p)
        .fallback_usd_inr(82.5)
        .build()
        .unwrap();

    let overview = mandi.market_overview().await;
    assert!(overview.used_fallback_rate());
    assert_eq!(overview.usd_inr, 82.5);
    // The zero quote itself is still shown.
    let fx = overview.get(Asset::UsdInr).and_then(Fetched::data).unwrap();
    assert_eq!(fx.quote.price, 0.0);
    assert_eq!(fx.quote.change_pct, 0.0);

    let gold = overview.get(Asset::Gold).and_then(Fetched::data).unwrap();
    assert_eq!(gold.price_inr(), Some(825.0));
}

#[tokio::test(start_paused = true)]
async fn request_timeout_fails_every_card() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_quote_behavior(GOLD, MockBehavior::Hang).await;
    let mandi = Mandi::builder()
        .with_connector(p)
        .provider_timeout(Duration::from_secs(10))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let overview = mandi.market_overview().await;
    assert!(overview.used_fallback_rate());
    for (_, card) in &overview.assets {
        assert_eq!(
            card.error(),
            Some(&MandiError::RequestTimeout {
                capability: "overview".into()
            })
        );
    }
}
