use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::MandiError;
use crate::model::series::TimeSeries;

/// Instruments on the dashboard watch-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Asset {
    /// Gold futures.
    Gold,
    /// Silver futures.
    Silver,
    /// WTI crude oil futures.
    Oil,
    /// US dollar to Indian rupee spot rate.
    UsdInr,
}

impl Asset {
    /// Every watch-list asset in display order.
    pub const ALL: [Self; 4] = [Self::Gold, Self::Silver, Self::Oil, Self::UsdInr];

    /// Provider symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gold => "GC=F",
            Self::Silver => "SI=F",
            Self::Oil => "CL=F",
            Self::UsdInr => "INR=X",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Oil => "Crude Oil",
            Self::UsdInr => "USD/INR",
        }
    }

    /// True for instruments priced in US dollars (everything but the FX rate itself).
    #[must_use]
    pub const fn is_usd_quoted(self) -> bool {
        !matches!(self, Self::UsdInr)
    }

    /// Currency the provider quotes this asset in.
    #[must_use]
    pub const fn quote_currency(self) -> Currency {
        match self {
            Self::UsdInr => Currency::Inr,
            _ => Currency::Usd,
        }
    }

    /// Look up an asset by provider symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.symbol().eq_ignore_ascii_case(symbol.trim()))
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Asset {
    type Err = MandiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(a) = Self::from_symbol(s) {
            return Ok(a);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(Self::Gold),
            "silver" => Ok(Self::Silver),
            "oil" | "crude" | "crude oil" => Ok(Self::Oil),
            "usdinr" | "usd/inr" | "inr" => Ok(Self::UsdInr),
            other => Err(MandiError::InvalidArg(format!("unknown asset '{other}'"))),
        }
    }
}

/// Display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US dollar.
    Usd,
    /// Indian rupee.
    Inr,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Inr => "INR",
        }
    }

    /// Currency sign used when formatting prices.
    #[must_use]
    pub const fn sign(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Inr => "₹",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Look-back window for historical charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    /// Five days.
    #[serde(rename = "5d")]
    D5,
    /// One month.
    #[default]
    #[serde(rename = "1mo")]
    M1,
    /// Three months.
    #[serde(rename = "3mo")]
    M3,
    /// Six months.
    #[serde(rename = "6mo")]
    M6,
    /// One year.
    #[serde(rename = "1y")]
    Y1,
    /// Since January 1st of the current year.
    #[serde(rename = "ytd")]
    Ytd,
    /// Everything the provider has.
    #[serde(rename = "max")]
    Max,
}

impl Period {
    /// Every period in selector order.
    pub const ALL: [Self; 7] = [
        Self::D5,
        Self::M1,
        Self::M3,
        Self::M6,
        Self::Y1,
        Self::Ytd,
        Self::Max,
    ];

    /// Short code as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Ytd => "ytd",
            Self::Max => "max",
        }
    }

    /// First instant covered by the period when evaluated at `now`.
    ///
    /// Month arithmetic clamps to the end of shorter months; `Max` starts at the
    /// Unix epoch.
    #[must_use]
    pub fn start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let months = |n: u32| {
            now.checked_sub_months(Months::new(n))
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        };
        match self {
            Self::D5 => now - Duration::days(5),
            Self::M1 => months(1),
            Self::M3 => months(3),
            Self::M6 => months(6),
            Self::Y1 => months(12),
            Self::Ytd => NaiveDate::from_ymd_opt(now.year(), 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map_or(DateTime::<Utc>::UNIX_EPOCH, |n| n.and_utc()),
            Self::Max => DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = MandiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| MandiError::InvalidArg(format!("unknown period '{s}'")))
    }
}

/// Bar size requested from history providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interval {
    /// Daily bars.
    #[default]
    D1,
    /// Hourly bars.
    H1,
}

/// Parameters for a historical price request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Look-back window.
    pub period: Period,
    /// Bar size.
    pub interval: Interval,
}

impl HistoryRequest {
    /// Daily bars over `period`.
    #[must_use]
    pub const fn daily(period: Period) -> Self {
        Self {
            period,
            interval: Interval::D1,
        }
    }
}

/// Latest price and previous close for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Last traded price.
    pub price: f64,
    /// Close of the previous session.
    pub previous_close: f64,
}

impl PriceQuote {
    /// Build a quote.
    #[must_use]
    pub const fn new(price: f64, previous_close: f64) -> Self {
        Self {
            price,
            previous_close,
        }
    }

    /// Quote from the last two valid closes of a series.
    ///
    /// With a single close the previous close equals the price. Returns `None` when
    /// the series has no valid value.
    #[must_use]
    pub fn from_series_tail(series: &TimeSeries) -> Option<Self> {
        match series.tail_values(2).as_slice() {
            [prev, last] => Some(Self::new(*last, *prev)),
            [only] => Some(Self::new(*only, *only)),
            _ => None,
        }
    }
}

/// Price with its absolute and relative change against the previous close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    /// Current price.
    pub price: f64,
    /// `price - previous_close`.
    pub change_abs: f64,
    /// Change in percent of the previous close; `0.0` when the previous close is zero.
    pub change_pct: f64,
}

impl PriceChange {
    /// Derive the change from a quote.
    #[must_use]
    pub fn from_quote(q: PriceQuote) -> Self {
        let change_abs = q.price - q.previous_close;
        let change_pct = if q.previous_close == 0.0 {
            0.0
        } else {
            change_abs / q.previous_close * 100.0
        };
        Self {
            price: q.price,
            change_abs,
            change_pct,
        }
    }

    /// Express price and absolute change in another currency at `rate`.
    ///
    /// The percentage is currency independent and is kept.
    #[must_use]
    pub fn convert(self, rate: f64) -> Self {
        Self {
            price: self.price * rate,
            change_abs: self.change_abs * rate,
            change_pct: self.change_pct,
        }
    }
}

impl From<PriceQuote> for PriceChange {
    fn from(q: PriceQuote) -> Self {
        Self::from_quote(q)
    }
}
