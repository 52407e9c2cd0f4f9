use std::str::FromStr;

use url::Url;

use crate::types::TimeBound;
use crate::Error;

use super::common::{bool_param, Query};

/// Query for a pool's OHLCV candles.
///
/// `start` is required. `limit` is capped at 366 by the API and `end` may be
/// at most one year after `start`; both limits are enforced server-side.
#[derive(Clone, Debug)]
pub struct OhlcvQuery {
    pub start: TimeBound,
    pub end: Option<TimeBound>,
    pub interval: OhlcvInterval,
    pub inversed: bool,
    pub limit: u32,
}

impl Query for OhlcvQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("start", &self.start.to_string())
            .append_pair("interval", &self.interval.to_string())
            .append_pair("inversed", bool_param(self.inversed))
            .append_pair("limit", &self.limit.to_string());
        if let Some(end) = &self.end {
            url.query_pairs_mut().append_pair("end", &end.to_string());
        }
        url
    }
}

impl OhlcvQuery {
    pub fn new(start: impl Into<TimeBound>) -> Self {
        Self {
            start: start.into(),
            end: None,
            interval: OhlcvInterval::default(),
            inversed: false,
            limit: 1,
        }
    }

    pub fn with_end(mut self, end: impl Into<TimeBound>) -> Self {
        let end = end.into();
        self.end = if end.is_empty() { None } else { Some(end) };
        self
    }

    pub fn with_interval(mut self, interval: OhlcvInterval) -> Self {
        self.interval = interval;
        self
    }

    /// Flip the quote/base price ratio of the candles.
    pub fn with_inversed(mut self, inversed: bool) -> Self {
        self.inversed = inversed;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Candle width for OHLCV queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OhlcvInterval {
    OneMinute,
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    SixHours,
    TwelveHours,
    #[default]
    OneDay,
}

impl OhlcvInterval {
    pub const ALL: [OhlcvInterval; 9] = [
        OhlcvInterval::OneMinute,
        OhlcvInterval::FiveMinutes,
        OhlcvInterval::TenMinutes,
        OhlcvInterval::FifteenMinutes,
        OhlcvInterval::ThirtyMinutes,
        OhlcvInterval::OneHour,
        OhlcvInterval::SixHours,
        OhlcvInterval::TwelveHours,
        OhlcvInterval::OneDay,
    ];
}

impl std::fmt::Display for OhlcvInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OhlcvInterval::OneMinute => "1m",
                OhlcvInterval::FiveMinutes => "5m",
                OhlcvInterval::TenMinutes => "10m",
                OhlcvInterval::FifteenMinutes => "15m",
                OhlcvInterval::ThirtyMinutes => "30m",
                OhlcvInterval::OneHour => "1h",
                OhlcvInterval::SixHours => "6h",
                OhlcvInterval::TwelveHours => "12h",
                OhlcvInterval::OneDay => "24h",
            }
        )
    }
}

impl FromStr for OhlcvInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OhlcvInterval::ALL
            .into_iter()
            .find(|interval| interval.to_string() == s)
            .ok_or_else(|| Error::invalid_value("interval", s))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use url::Url;

    use crate::query::{OhlcvInterval, OhlcvQuery, Query};

    fn base_url() -> Url {
        Url::parse("https://example.com/ohlcv").unwrap()
    }

    #[test]
    fn test_ohlcv_query_defaults() {
        insta::assert_snapshot!(
            OhlcvQuery::new("2024-01-01").add_to_url(&base_url()).to_string(),
            @"https://example.com/ohlcv?start=2024-01-01&interval=24h&inversed=false&limit=1"
        );
    }

    #[test]
    fn test_ohlcv_query_end_goes_last() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        insta::assert_snapshot!(
            OhlcvQuery::new(1_700_000_000_i64)
                .with_end(date)
                .with_interval(OhlcvInterval::OneHour)
                .with_inversed(true)
                .with_limit(366)
                .add_to_url(&base_url())
                .to_string(),
            @"https://example.com/ohlcv?start=1700000000&interval=1h&inversed=true&limit=366&end=2024-02-01"
        );
    }

    #[test]
    fn empty_end_is_not_sent() {
        let url = OhlcvQuery::new("2024-01-01").with_end("").add_to_url(&base_url());
        assert!(!url.query().unwrap().contains("end="));
    }

    #[test]
    fn interval_parses_every_wire_name() {
        for interval in OhlcvInterval::ALL {
            assert_eq!(interval.to_string().parse::<OhlcvInterval>().unwrap(), interval);
        }
        assert!("2h".parse::<OhlcvInterval>().is_err());
        assert_eq!(OhlcvInterval::default().to_string(), "24h");
    }
}
