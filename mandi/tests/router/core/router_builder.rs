use std::sync::Arc;
use std::time::Duration;

use mandi::{FetchStrategy, Granularity, Lexicon, Mandi, MandiConfig, MandiError, Verdict};
use mandi_mock::MockConnector;

use crate::helpers::headline;

#[test]
fn build_without_connectors_is_invalid_arg() {
    let err = Mandi::builder().build().err().unwrap();
    assert!(matches!(err, MandiError::InvalidArg(_)));
}

#[test]
fn build_rejects_unusable_fallback_rate() {
    for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = Mandi::builder()
            .with_connector(Arc::new(MockConnector::new()))
            .fallback_usd_inr(rate)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, MandiError::InvalidArg(_)), "rate {rate}");
    }
}

#[test]
fn builder_settings_land_in_config() {
    let mandi = Mandi::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .fetch_strategy(FetchStrategy::Latency)
        .provider_timeout(Duration::from_millis(750))
        .request_timeout(Duration::from_secs(3))
        .fallback_usd_inr(82.5)
        .align_granularity(Granularity::Hour)
        .news_limit(7)
        .build()
        .unwrap();
    let cfg = mandi.config();
    assert_eq!(cfg.fetch_strategy, FetchStrategy::Latency);
    assert_eq!(cfg.provider_timeout, Duration::from_millis(750));
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(3)));
    assert_eq!(cfg.fallback_usd_inr, 82.5);
    assert_eq!(cfg.align_granularity, Granularity::Hour);
    assert_eq!(cfg.news_limit, 7);
}

#[test]
fn whole_config_can_be_supplied() {
    let cfg = MandiConfig {
        fallback_usd_inr: 84.0,
        ..MandiConfig::default()
    };
    let mandi = Mandi::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .config(cfg)
        .build()
        .unwrap();
    assert_eq!(mandi.config().fallback_usd_inr, 84.0);
}

#[test]
fn embedded_lexicon_is_loaded_once_at_build() {
    let mandi = Mandi::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    assert!(!mandi.analyzer().lexicon().is_empty());
}

#[test]
fn custom_lexicon_drives_aggregation() {
    let lexicon = Arc::new(Lexicon::from_pairs([("rally", 3.0), ("slump", -3.0)]));
    let mandi = Mandi::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .with_lexicon(lexicon)
        .build()
        .unwrap();

    assert_eq!(mandi.analyzer().lexicon().len(), 2);
    let up = mandi.aggregate(&[headline("Metals rally")]);
    assert_eq!(up.verdict, Verdict::Positive);
    let down = mandi.aggregate(&[headline("Metals slump")]);
    assert_eq!(down.verdict, Verdict::Negative);
    let flat = mandi.aggregate(&[headline("Metals drift")]);
    assert_eq!(flat.verdict, Verdict::Neutral);
}
