use std::time::Duration;

use mandi::{Asset, ChartStatus, Currency, Mandi, MandiError, Period, TimeSeries};
use mandi_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{GOLD, USD_INR, day, naive_series, ny_series};

fn gold_two_days() -> TimeSeries {
    ny_series(GOLD, &[(day(2024, 1, 1), 100.0), (day(2024, 1, 2), 101.0)])
}

#[tokio::test]
async fn empty_asset_series_is_reported() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_history_behavior(GOLD, MockBehavior::Return(TimeSeries::empty(GOLD)))
        .await;
    ctrl.set_history_behavior(
        USD_INR,
        MockBehavior::Return(naive_series(USD_INR, &[(day(2024, 1, 1), 80.0)])),
    )
    .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let chart = mandi.chart(Asset::Gold, Period::M1).await;
    assert_eq!(chart.status, ChartStatus::NoAssetData);
    assert!(!chart.has_points());
}

#[tokio::test]
async fn empty_fx_keeps_the_usd_series() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_history_behavior(GOLD, MockBehavior::Return(gold_two_days()))
        .await;
    ctrl.set_history_behavior(USD_INR, MockBehavior::Return(TimeSeries::empty(USD_INR)))
        .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let chart = mandi.chart(Asset::Gold, Period::M1).await;
    assert_eq!(chart.status, ChartStatus::NoFxData);
    assert_eq!(chart.currency, Currency::Usd);
    assert_eq!(
        chart.points,
        vec![(day(2024, 1, 1), 100.0), (day(2024, 1, 2), 101.0)]
    );
}

#[tokio::test]
async fn failed_fx_keeps_the_usd_series_and_the_error() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_history_behavior(GOLD, MockBehavior::Return(gold_two_days()))
        .await;
    ctrl.set_history_behavior(
        USD_INR,
        MockBehavior::Fail(MandiError::connector("p", "fx down")),
    )
    .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let chart = mandi.chart(Asset::Gold, Period::M1).await;
    assert!(matches!(chart.status, ChartStatus::Failed(_)));
    assert_eq!(chart.currency, Currency::Usd);
    assert_eq!(chart.points.len(), 2);
}

#[tokio::test]
async fn failed_asset_has_no_points() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_history_behavior(GOLD, MockBehavior::Fail(MandiError::connector("p", "down")))
        .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let chart = mandi.chart(Asset::Gold, Period::M1).await;
    assert!(matches!(chart.status, ChartStatus::Failed(_)));
    assert!(!chart.has_points());
}

#[tokio::test]
async fn disjoint_periods_are_no_overlap() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_history_behavior(GOLD, MockBehavior::Return(gold_two_days()))
        .await;
    ctrl.set_history_behavior(
        USD_INR,
        MockBehavior::Return(naive_series(
            USD_INR,
            &[(day(2023, 6, 1), 82.0), (day(2023, 6, 2), 82.1)],
        )),
    )
    .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let chart = mandi.chart(Asset::Gold, Period::M1).await;
    assert_eq!(chart.status, ChartStatus::NoOverlap);
    assert_eq!(chart.currency, Currency::Inr);
    assert!(chart.points.is_empty());
}

#[tokio::test(start_paused = true)]
async fn request_timeout_is_a_failed_chart() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_history_behavior(GOLD, MockBehavior::Hang).await;
    let mandi = Mandi::builder()
        .with_connector(p)
        .provider_timeout(Duration::from_secs(10))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let chart = mandi.chart(Asset::Gold, Period::M1).await;
    assert_eq!(
        chart.status,
        ChartStatus::Failed(MandiError::RequestTimeout {
            capability: "chart".into()
        })
    );
}
