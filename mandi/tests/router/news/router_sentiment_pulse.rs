use mandi::{AggregateResult, Fetched, Mandi, MandiError, NewsQuery, Verdict};
use mandi_mock::{DynamicMockConnector, FAIL_SYMBOL, MockBehavior};

use crate::helpers::{headline, mock_mandi};

#[tokio::test]
async fn pulse_scores_the_fetched_headlines() {
    let mandi = mock_mandi();
    let pulse = mandi.sentiment_pulse(&NewsQuery::geopolitics()).await;

    let items = pulse.news.data().expect("headlines").clone();
    assert_eq!(items.len(), 5);
    assert_eq!(pulse.result, mandi.aggregate(&items));
    assert!((-1.0..=1.0).contains(&pulse.result.average_score));
}

#[tokio::test]
async fn failed_fetch_is_neutral() {
    let pulse = mock_mandi()
        .sentiment_pulse(&NewsQuery::new([FAIL_SYMBOL], 10))
        .await;
    assert!(pulse.news.is_failed());
    assert_eq!(pulse.result, AggregateResult::NEUTRAL);
    assert_eq!(pulse.result.verdict, Verdict::Neutral);
}

#[tokio::test]
async fn empty_fetch_is_neutral() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_news_behavior(MockBehavior::Return(vec![])).await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let pulse = mandi.sentiment_pulse(&NewsQuery::geopolitics()).await;
    assert_eq!(pulse.news, Fetched::Empty);
    assert_eq!(pulse.result, AggregateResult::NEUTRAL);
}

#[tokio::test]
async fn one_sided_headlines_set_the_verdict() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_news_behavior(MockBehavior::Return(vec![
        headline("Markets rally on strong gains and great optimism"),
        headline("Investors celebrate excellent growth"),
    ]))
    .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();
    let pulse = mandi.sentiment_pulse(&NewsQuery::geopolitics()).await;
    assert_eq!(pulse.result.verdict, Verdict::Positive);

    ctrl.set_news_behavior(MockBehavior::Return(vec![
        headline("War fears trigger crisis and panic"),
        headline("Markets crash amid terrible losses"),
    ]))
    .await;
    let pulse = mandi.sentiment_pulse(&NewsQuery::geopolitics()).await;
    assert_eq!(pulse.result.verdict, Verdict::Negative);
}

#[tokio::test]
async fn geopolitical_pulse_uses_configured_limit() {
    let mandi = Mandi::builder()
        .with_connector(std::sync::Arc::new(mandi_mock::MockConnector::new()))
        .news_limit(2)
        .build()
        .unwrap();

    let pulse = mandi.geopolitical_pulse().await;
    assert_eq!(pulse.news.data().map(Vec::len), Some(2));
}

#[tokio::test]
async fn provider_error_is_kept_in_the_pulse() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_news_behavior(MockBehavior::Fail(MandiError::connector("p", "feed down")))
        .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let pulse = mandi.sentiment_pulse(&NewsQuery::geopolitics()).await;
    match pulse.news {
        Fetched::Failed(e) => assert!(e.to_string().contains("feed down")),
        other => panic!("expected failure, got {other:?}"),
    }
}
