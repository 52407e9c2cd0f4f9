//! The `ohlcv` subcommand.

use anyhow::{Context, Result};
use clap::Args;
use dexpaprika_api::{Client, OhlcvInterval, OhlcvQuery, TimeBound};

use super::parse_choice;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct OhlcvArgs {
    /// Network ID
    #[arg(long)]
    pub network: String,

    /// Pool address
    #[arg(long)]
    pub address: String,

    /// Start: Unix timestamp, YYYY-MM-DD, or ISO-8601 date-time
    #[arg(long)]
    pub start: String,

    /// End, same forms as --start (at most one year after start)
    #[arg(long)]
    pub end: Option<String>,

    /// Candle width: 1m, 5m, 10m, 15m, 30m, 1h, 6h, 12h, 24h
    #[arg(long, default_value = "24h")]
    pub interval: String,

    /// Flip the quote/base price ratio
    #[arg(long)]
    pub inversed: bool,

    /// Number of candles (max 366)
    #[arg(long, default_value = "1")]
    pub limit: u32,
}

impl OhlcvArgs {
    pub fn to_query(&self) -> Result<OhlcvQuery> {
        let start = time_bound_arg("--start", &self.start)?;
        let mut query = OhlcvQuery::new(start)
            .with_interval(parse_choice(&self.interval, &OhlcvInterval::ALL)?)
            .with_inversed(self.inversed)
            .with_limit(self.limit);
        if let Some(end) = &self.end {
            query = query.with_end(time_bound_arg("--end", end)?);
        }
        Ok(query)
    }
}

/// Checks that `value` is a timestamp, date or ISO-8601 date-time, then keeps
/// the text exactly as typed so the API sees the caller's own offset.
fn time_bound_arg(flag: &str, value: &str) -> Result<TimeBound> {
    value
        .parse::<TimeBound>()
        .with_context(|| format!("{} {:?}", flag, value))?;
    Ok(TimeBound::Raw(value.trim().to_string()))
}

pub async fn run(args: &OhlcvArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = args.to_query()?;
    let candles = client
        .get_pool_ohlcv(&args.network, &args.address, &query)
        .await?;

    match format {
        OutputFormat::Json => print_value(&candles, format),
        // `ohlcv` duplicates `data`; tabulate just one copy.
        _ => print_value(candles.get("ohlcv").unwrap_or(&candles), format),
    }
}

#[cfg(test)]
mod tests {
    use dexpaprika_api::Query;
    use url::Url;

    use super::*;

    fn args(start: &str, end: Option<&str>, interval: &str) -> OhlcvArgs {
        OhlcvArgs {
            network: "ethereum".to_string(),
            address: "0xpool".to_string(),
            start: start.to_string(),
            end: end.map(str::to_string),
            interval: interval.to_string(),
            inversed: true,
            limit: 30,
        }
    }

    #[test]
    fn builds_query_from_flags() {
        let query = args("2024-01-01", Some("1706745600"), "6h").to_query().unwrap();
        let url = query.add_to_url(&Url::parse("https://example.com/ohlcv").unwrap());
        assert_eq!(
            url.query(),
            Some("start=2024-01-01&interval=6h&inversed=true&limit=30&end=1706745600")
        );
    }

    fn sent_start(start: &str) -> String {
        let query = args(start, None, "24h").to_query().unwrap();
        let url = query.add_to_url(&Url::parse("https://example.com/ohlcv").unwrap());
        url.query_pairs()
            .find(|(key, _)| key == "start")
            .map(|(_, value)| value.into_owned())
            .unwrap()
    }

    #[test]
    fn iso_8601_variants_are_sent_as_typed() {
        for start in [
            "2024-01-31T08:30",
            "2024-01-31T08:30:00.250",
            "2024-01-31T08:30:00+0200",
            "2024-01-31T08:30Z",
            "2024-01-31T08:30:00+02:00",
            "1706689800",
            "2024-01-31",
        ] {
            assert_eq!(sent_start(start), start);
        }
    }

    #[test]
    fn rejects_unrecognized_end() {
        let err = args("2024-01-01", Some("next week"), "24h")
            .to_query()
            .unwrap_err();
        assert!(err.to_string().contains("--end"));
    }

    #[test]
    fn rejects_unrecognized_start() {
        let err = args("last tuesday", None, "24h").to_query().unwrap_err();
        assert!(err.to_string().contains("--start"));
    }

    #[test]
    fn rejects_unknown_interval() {
        let err = args("2024-01-01", None, "2h").to_query().unwrap_err();
        assert!(err.to_string().starts_with("Invalid interval: 2h"));
    }
}
