use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::Error;

/// A `start`/`end` value for OHLCV queries.
///
/// The API accepts Unix timestamps, calendar dates and ISO-8601 date-times.
/// `Raw` is sent as-is; building one from a `&str` or `String` does not
/// validate it. Use [`TimeBound::from_str`] to classify strictly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeBound {
    /// Seconds since the Unix epoch, e.g. `1700000000`.
    Timestamp(i64),
    /// A calendar date, e.g. `2024-01-31`.
    Date(NaiveDate),
    /// A UTC date-time, sent in RFC 3339 form, e.g. `2024-01-31T12:00:00Z`.
    DateTime(DateTime<Utc>),
    /// Any other string, passed through untouched.
    Raw(String),
}

impl TimeBound {
    /// True for an empty raw string, which callers treat as "not supplied".
    pub fn is_empty(&self) -> bool {
        matches!(self, TimeBound::Raw(raw) if raw.is_empty())
    }
}

impl fmt::Display for TimeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeBound::Timestamp(ts) => write!(f, "{}", ts),
            TimeBound::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            TimeBound::DateTime(dt) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            TimeBound::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

/// ISO-8601 date-times with an offset, with or without seconds.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

impl FromStr for TimeBound {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<i64>()
                .map(TimeBound::Timestamp)
                .map_err(|_| Error::invalid_value("time bound", s));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(TimeBound::Date(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(TimeBound::DateTime(dt.with_timezone(&Utc)));
        }
        let zoned = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
            Some(rest) => format!("{}+0000", rest),
            None => s.to_string(),
        };
        for format in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(&zoned, format) {
                return Ok(TimeBound::DateTime(dt.with_timezone(&Utc)));
            }
        }
        // ISO-8601 without an offset is read as UTC.
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(TimeBound::DateTime(naive.and_utc()));
            }
        }
        Err(Error::invalid_value("time bound", s))
    }
}

impl From<i64> for TimeBound {
    fn from(ts: i64) -> Self {
        TimeBound::Timestamp(ts)
    }
}

impl From<NaiveDate> for TimeBound {
    fn from(date: NaiveDate) -> Self {
        TimeBound::Date(date)
    }
}

impl From<DateTime<Utc>> for TimeBound {
    fn from(dt: DateTime<Utc>) -> Self {
        TimeBound::DateTime(dt)
    }
}

impl From<&str> for TimeBound {
    fn from(raw: &str) -> Self {
        TimeBound::Raw(raw.to_string())
    }
}

impl From<String> for TimeBound {
    fn from(raw: String) -> Self {
        TimeBound::Raw(raw)
    }
}
