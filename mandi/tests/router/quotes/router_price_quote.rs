use std::sync::Arc;

use mandi::{Asset, Capability, Fetched, Mandi, MandiError, PriceQuote, TimeSeries};
use mandi_mock::{DynamicMockConnector, MockBehavior, MockConnector};

use crate::helpers::{GOLD, approx, day, mock_mandi, naive_series};

#[tokio::test]
async fn live_quote_is_preferred() {
    let q = mock_mandi().price_quote(GOLD).await.unwrap();
    assert_eq!(q, PriceQuote::new(2_051.40, 2_043.10));
}

#[tokio::test]
async fn without_live_quotes_the_last_two_closes_are_used() {
    let mandi = Mandi::builder()
        .with_connector(Arc::new(MockConnector::without_quotes()))
        .build()
        .unwrap();
    let q = mandi.price_quote(GOLD).await.unwrap();
    assert_eq!(q, PriceQuote::new(2_024.3, 2_030.2));
}

#[tokio::test]
async fn fallback_asks_for_a_short_history_window() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_quote_behavior(GOLD, MockBehavior::Fail(MandiError::Other("down".into())))
        .await;
    ctrl.set_history_behavior(
        GOLD,
        MockBehavior::Return(naive_series(GOLD, &[(day(2024, 1, 2), 5.0)])),
    )
    .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    // A single close doubles as the previous close.
    let q = mandi.price_quote(GOLD).await.unwrap();
    assert_eq!(q, PriceQuote::new(5.0, 5.0));
    assert_eq!(
        ctrl.calls().await,
        vec![
            (Capability::Quote, GOLD.to_string()),
            (Capability::History, GOLD.to_string()),
        ]
    );
}

#[tokio::test]
async fn no_price_anywhere_is_not_found_and_empty() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_quote_behavior(GOLD, MockBehavior::Fail(MandiError::not_found("quote")))
        .await;
    ctrl.set_history_behavior(GOLD, MockBehavior::Return(TimeSeries::empty(GOLD)))
        .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    assert_eq!(
        mandi.price_quote(GOLD).await.unwrap_err(),
        MandiError::not_found("quote for GC=F")
    );
    assert_eq!(mandi.price_change(Asset::Gold).await, Fetched::Empty);
}

#[tokio::test]
async fn failures_on_both_paths_are_reported() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_quote_behavior(GOLD, MockBehavior::Fail(MandiError::Other("q".into())))
        .await;
    ctrl.set_history_behavior(GOLD, MockBehavior::Fail(MandiError::Other("h".into())))
        .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let change = mandi.price_change(Asset::Gold).await;
    assert!(change.is_failed());
    let flat = change.error().cloned().unwrap().flatten();
    assert_eq!(flat.len(), 2);
    assert!(flat.iter().all(|e| matches!(e, MandiError::Connector { .. })));
}

#[tokio::test]
async fn zero_previous_close_gives_zero_percent() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_quote_behavior(GOLD, MockBehavior::Return(PriceQuote::new(5.0, 0.0)))
        .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let change = mandi.price_change(Asset::Gold).await.into_data().unwrap();
    assert_eq!(change.price, 5.0);
    assert_eq!(change.change_abs, 5.0);
    assert_eq!(change.change_pct, 0.0);
}

#[tokio::test]
async fn price_change_from_fixture_quote() {
    let change = mock_mandi()
        .price_change(Asset::Silver)
        .await
        .into_data()
        .unwrap();
    assert!(approx(change.change_abs, 23.18 - 23.42));
    assert!(approx(change.change_pct, (23.18 - 23.42) / 23.42 * 100.0));
}
