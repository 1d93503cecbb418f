use mandi::{Asset, ChartStatus, Currency, Granularity, Mandi, Period};
use mandi_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{GOLD, USD_INR, approx, day, mock_mandi, naive_series, ny_series};

#[tokio::test]
async fn two_day_scenario_converts_to_inr() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    ctrl.set_history_behavior(
        GOLD,
        MockBehavior::Return(ny_series(
            GOLD,
            &[(day(2024, 1, 1), 100.0), (day(2024, 1, 2), 101.0)],
        )),
    )
    .await;
    ctrl.set_history_behavior(
        USD_INR,
        MockBehavior::Return(naive_series(
            USD_INR,
            &[(day(2024, 1, 1), 80.0), (day(2024, 1, 2), 82.0)],
        )),
    )
    .await;
    let mandi = Mandi::builder().with_connector(p).build().unwrap();

    let chart = mandi.chart(Asset::Gold, Period::M1).await;
    assert_eq!(chart.status, ChartStatus::Ok);
    assert_eq!(chart.currency, Currency::Inr);
    assert_eq!(
        chart.points,
        vec![(day(2024, 1, 1), 8_000.0), (day(2024, 1, 2), 8_282.0)]
    );
    assert_eq!(chart.aligned.len(), 2);
    assert_eq!(chart.aligned.points()[1].fx, 82.0);
}

#[tokio::test]
async fn fixture_chart_joins_shared_days_only() {
    let chart = mock_mandi().chart(Asset::Gold, Period::M1).await;

    assert_eq!(chart.status, ChartStatus::Ok);
    assert_eq!(chart.asset, Asset::Gold);
    assert_eq!(chart.period, Period::M1);
    assert_eq!(chart.currency, Currency::Inr);
    // Seven bars each, six shared trading days.
    assert_eq!(chart.points.len(), 6);
    assert_eq!(chart.points[0].0, day(2024, 1, 2));
    assert!(approx(chart.points[0].1, 2_073.9 * 83.24));
    assert_eq!(chart.points[5].0, day(2024, 1, 9));
    assert!(chart.points.windows(2).all(|w| w[0].0 < w[1].0));
}

#[tokio::test]
async fn usd_inr_chart_is_the_raw_series() {
    let chart = mock_mandi().chart(Asset::UsdInr, Period::D5).await;

    assert_eq!(chart.status, ChartStatus::Ok);
    assert_eq!(chart.currency, Currency::Inr);
    assert_eq!(chart.points.len(), 7);
    assert_eq!(chart.points[0], (day(2023, 12, 29), 83.21));
    assert!(chart.aligned.is_empty());
}

#[tokio::test]
async fn hourly_granularity_keeps_intraday_keys_apart() {
    let (p, ctrl) = DynamicMockConnector::new_with_controller("p");
    let morning = day(2024, 1, 2) + chrono::Duration::hours(9);
    let noon = day(2024, 1, 2) + chrono::Duration::hours(12);
    ctrl.set_history_behavior(
        GOLD,
        MockBehavior::Return(naive_series(GOLD, &[(morning, 10.0), (noon, 11.0)])),
    )
    .await;
    ctrl.set_history_behavior(
        USD_INR,
        MockBehavior::Return(naive_series(USD_INR, &[(morning, 2.0), (noon, 3.0)])),
    )
    .await;

    let daily = Mandi::builder().with_connector(p.clone()).build().unwrap();
    let chart = daily.chart(Asset::Gold, Period::D5).await;
    // Both bars collapse onto one date; the later one wins on each side.
    assert_eq!(chart.points, vec![(day(2024, 1, 2), 33.0)]);

    let hourly = Mandi::builder()
        .with_connector(p)
        .align_granularity(Granularity::Hour)
        .build()
        .unwrap();
    let chart = hourly.chart(Asset::Gold, Period::D5).await;
    assert_eq!(chart.points, vec![(morning, 20.0), (noon, 33.0)]);
}
