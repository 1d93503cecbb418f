use std::sync::Arc;
use std::time::Duration;

use mandi::{Capability, FetchStrategy, Mandi, MandiError, PriceQuote};
use mandi_mock::{DynamicMockConnector, MockBehavior, MockConnector};
use tokio_test::{assert_err, assert_ok};

use crate::helpers::GOLD;

#[tokio::test]
async fn priority_falls_back_to_next_provider() {
    let (a, ctrl_a) = DynamicMockConnector::new_with_controller("a");
    let (b, ctrl_b) = DynamicMockConnector::new_with_controller("b");
    ctrl_a
        .set_quote_behavior(GOLD, MockBehavior::Fail(MandiError::Other("boom".into())))
        .await;
    ctrl_b
        .set_quote_behavior(GOLD, MockBehavior::Return(PriceQuote::new(2.0, 1.0)))
        .await;

    let mandi = Mandi::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let q = assert_ok!(mandi.quote(GOLD).await);
    assert_eq!(q, PriceQuote::new(2.0, 1.0));
    assert_eq!(ctrl_a.calls().await, vec![(Capability::Quote, GOLD.to_string())]);
    assert_eq!(ctrl_b.calls().await, vec![(Capability::Quote, GOLD.to_string())]);
}

#[tokio::test]
async fn first_success_stops_the_walk() {
    let (a, ctrl_a) = DynamicMockConnector::new_with_controller("a");
    let (b, ctrl_b) = DynamicMockConnector::new_with_controller("b");
    ctrl_a
        .set_quote_behavior(GOLD, MockBehavior::Return(PriceQuote::new(1.0, 1.0)))
        .await;
    ctrl_b
        .set_quote_behavior(GOLD, MockBehavior::Return(PriceQuote::new(9.0, 9.0)))
        .await;

    let mandi = Mandi::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    assert_eq!(mandi.quote(GOLD).await.unwrap().price, 1.0);
    assert!(ctrl_b.calls().await.is_empty());
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let (a, ctrl_a) = DynamicMockConnector::new_with_controller("a");
    let (b, ctrl_b) = DynamicMockConnector::new_with_controller("b");
    for ctrl in [&ctrl_a, &ctrl_b] {
        ctrl.set_quote_behavior(GOLD, MockBehavior::Fail(MandiError::not_found("nope")))
            .await;
    }
    let mandi = Mandi::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = assert_err!(mandi.quote(GOLD).await);
    assert_eq!(err, MandiError::not_found("quote for GC=F"));
}

#[tokio::test]
async fn provider_errors_are_tagged_with_connector_name() {
    let (a, _ctrl) = DynamicMockConnector::new_with_controller("scripted");
    let mandi = Mandi::builder().with_connector(a).build().unwrap();

    // No behavior configured: the mock answers Unsupported, which is tagged.
    match mandi.quote(GOLD).await {
        Err(MandiError::AllProvidersFailed(errs)) => {
            assert_eq!(errs.len(), 1);
            assert!(matches!(
                &errs[0],
                MandiError::Connector { connector, .. } if connector == "scripted"
            ));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unsupported_when_no_provider_has_the_capability() {
    let mandi = Mandi::builder()
        .with_connector(Arc::new(MockConnector::without_quotes()))
        .build()
        .unwrap();
    let err = mandi.quote(GOLD).await.unwrap_err();
    assert_eq!(err, MandiError::unsupported("quote"));
}

#[tokio::test]
async fn empty_symbol_is_invalid_arg() {
    let mandi = crate::helpers::mock_mandi();
    let err = mandi.quote("  ").await.unwrap_err();
    assert!(matches!(err, MandiError::InvalidArg(_)));
}

#[tokio::test(start_paused = true)]
async fn hanging_providers_time_out() {
    let (a, ctrl) = DynamicMockConnector::new_with_controller("slow");
    ctrl.set_quote_behavior(GOLD, MockBehavior::Hang).await;
    let mandi = Mandi::builder()
        .with_connector(a)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = mandi.quote(GOLD).await.unwrap_err();
    assert_eq!(
        err,
        MandiError::AllProvidersTimedOut {
            capability: "quote".into()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn latency_strategy_returns_first_success() {
    let (slow, ctrl_slow) = DynamicMockConnector::new_with_controller("slow");
    let (fast, ctrl_fast) = DynamicMockConnector::new_with_controller("fast");
    ctrl_slow.set_quote_behavior(GOLD, MockBehavior::Hang).await;
    ctrl_fast
        .set_quote_behavior(GOLD, MockBehavior::Return(PriceQuote::new(42.0, 40.0)))
        .await;

    let mandi = Mandi::builder()
        .with_connector(slow)
        .with_connector(fast)
        .fetch_strategy(FetchStrategy::Latency)
        .provider_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    assert_eq!(mandi.quote(GOLD).await.unwrap().price, 42.0);
}

#[tokio::test(start_paused = true)]
async fn latency_strategy_collapses_failures() {
    let (a, ctrl_a) = DynamicMockConnector::new_with_controller("a");
    let (b, ctrl_b) = DynamicMockConnector::new_with_controller("b");
    ctrl_a.set_quote_behavior(GOLD, MockBehavior::Hang).await;
    ctrl_b.set_quote_behavior(GOLD, MockBehavior::Hang).await;

    let mandi = Mandi::builder()
        .with_connector(a)
        .with_connector(b)
        .fetch_strategy(FetchStrategy::Latency)
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    assert!(matches!(
        mandi.quote(GOLD).await,
        Err(MandiError::AllProvidersTimedOut { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn fixture_timeout_symbol_trips_provider_timeout() {
    let mandi = Mandi::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(mandi_mock::TIMEOUT_DELAY / 2)
        .build()
        .unwrap();
    assert!(matches!(
        mandi.quote(mandi_mock::TIMEOUT_SYMBOL).await,
        Err(MandiError::AllProvidersTimedOut { .. })
    ));
}
