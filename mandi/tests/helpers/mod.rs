// ---------- Lightweight fixtures and helpers for tests ----------
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use mandi::{Mandi, NewsItem, Point, Published, TimeSeries};
use mandi_mock::MockConnector;

pub const GOLD: &str = "GC=F";
pub const USD_INR: &str = "INR=X";

/// Midnight of a calendar date.
pub fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Series of naive (offset-less) stamps.
pub fn naive_series(symbol: &str, points: &[(NaiveDateTime, f64)]) -> TimeSeries {
    let points = points.iter().map(|(ts, v)| Point::new(*ts, *v)).collect();
    TimeSeries::try_new(symbol, points).unwrap()
}

/// Series of New York (UTC-05:00) offset-aware stamps at the given wall clocks.
pub fn ny_series(symbol: &str, points: &[(NaiveDateTime, f64)]) -> TimeSeries {
    let ny = FixedOffset::west_opt(5 * 3600).unwrap();
    let points = points
        .iter()
        .map(|(ts, v)| Point::new(ny.from_local_datetime(ts).unwrap(), *v))
        .collect();
    TimeSeries::try_new(symbol, points).unwrap()
}

pub fn headline(title: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        link: format!("https://news.example/{}", title.len()),
        published: Published::Unknown,
        summary: String::new(),
    }
}

/// Orchestrator over the static fixture connector.
pub fn mock_mandi() -> Mandi {
    Mandi::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
