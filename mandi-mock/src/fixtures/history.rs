use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use mandi_core::{Point, TimeSeries};

// Trading days shared by every fixture, plus one extra day per side so the
// aligner has something to drop.
const COMMON: [&str; 6] = [
    "2024-01-02",
    "2024-01-03",
    "2024-01-04",
    "2024-01-05",
    "2024-01-08",
    "2024-01-09",
];
const COMMODITY_ONLY: &str = "2024-01-10";
const FX_ONLY: &str = "2023-12-29";

pub fn by_symbol(s: &str) -> Option<TimeSeries> {
    match s {
        "GC=F" => Some(commodity(
            s,
            &[2_073.9, 2_042.3, 2_050.0, 2_049.6, 2_033.0, 2_030.2, 2_024.3],
        )),
        "SI=F" => Some(commodity(
            s,
            &[23.75, 23.19, 23.05, 23.22, 23.08, 23.11, 22.98],
        )),
        "CL=F" => Some(commodity(
            s,
            &[70.38, 72.70, 72.19, 73.81, 70.77, 72.24, 71.37],
        )),
        "INR=X" => Some(usd_inr(&[83.21, 83.24, 83.33, 83.27, 83.17, 83.10, 83.04])),
        _ => None,
    }
}

fn date(s: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

// Exchange-local midnight in New York, offset-aware.
fn commodity(symbol: &str, closes: &[f64; 7]) -> TimeSeries {
    let ny = FixedOffset::west_opt(5 * 3600).unwrap();
    let points = COMMON
        .iter()
        .chain(std::iter::once(&COMMODITY_ONLY))
        .zip(closes)
        .map(|(d, c)| Point::new(ny.from_local_datetime(&date(d)).unwrap(), *c))
        .collect();
    TimeSeries::try_new(symbol, points).unwrap()
}

// London midnight without offset information.
fn usd_inr(closes: &[f64; 7]) -> TimeSeries {
    let points = std::iter::once(&FX_ONLY)
        .chain(COMMON.iter())
        .zip(closes)
        .map(|(d, c)| Point::new(date(d), *c))
        .collect();
    TimeSeries::try_new("INR=X", points).unwrap()
}
