use mandi::{Capability, Mandi, MandiError, NewsQuery};
use mandi_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{headline, mock_mandi};

#[tokio::test]
async fn fixture_news_returns_every_headline() {
    let items = mock_mandi().news(&NewsQuery::geopolitics()).await.unwrap();
    assert_eq!(items.len(), 5);
    assert!(items[0].title.starts_with("Gold climbs"));
}

#[tokio::test]
async fn provider_overflow_is_truncated_to_limit() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    let many: Vec<_> = (0..30).map(|i| headline(&format!("story {i}"))).collect();
    ctrl.set_news_behavior(MockBehavior::Return(many)).await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let items = mandi
        .news(&NewsQuery::new(["Gold Prices"], 3))
        .await
        .unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].title, "story 2");
}

#[tokio::test]
async fn query_string_reaches_the_provider() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_news_behavior(MockBehavior::Return(vec![])).await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let items = mandi
        .news(&NewsQuery::new(["OPEC", "Trade War"], 10))
        .await
        .unwrap();
    assert!(items.is_empty());
    assert_eq!(
        ctrl.calls().await,
        vec![(Capability::News, "\"OPEC\" OR \"Trade War\"".to_string())]
    );
}

#[tokio::test]
async fn empty_terms_are_rejected_before_any_call() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let err = mandi
        .news(&NewsQuery::new(Vec::<String>::new(), 10))
        .await
        .unwrap_err();
    assert!(matches!(err, MandiError::InvalidArg(_)));
    assert!(ctrl.calls().await.is_empty());
}
