//! CLI subcommand implementations.

pub mod dexes;
pub mod networks;
pub mod ohlcv;
pub mod pools;
pub mod search;
pub mod tokens;
pub mod transactions;

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::Args;
use dexpaprika_api::{Paginated, PoolSortBy, PoolsQuery, SortDirection};

/// Ordering and pagination flags shared by the pool listings.
#[derive(Args)]
pub struct ListingArgs {
    /// Order by: volume_usd, price_usd, transactions, last_price_change_usd_24h, created_at
    #[arg(long, default_value = "volume_usd")]
    pub order_by: String,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "desc")]
    pub sort: String,

    /// Page number (starts at 0)
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "10")]
    pub limit: u32,
}

impl ListingArgs {
    pub fn to_query(&self) -> Result<PoolsQuery> {
        Ok(PoolsQuery::default()
            .with_order_by(parse_choice(&self.order_by, &PoolSortBy::ALL)?)
            .with_sort_direction(parse_sort(&self.sort)?)
            .with_page(self.page)
            .with_limit(self.limit))
    }
}

/// Parses a typed API parameter, listing the accepted values on failure.
pub fn parse_choice<T>(value: &str, accepted: &[T]) -> Result<T>
where
    T: FromStr<Err = dexpaprika_api::Error> + Display,
{
    value.parse::<T>().map_err(|e| {
        let names: Vec<String> = accepted.iter().map(ToString::to_string).collect();
        anyhow!("{} (expected one of: {})", e, names.join(", "))
    })
}

pub fn parse_sort(value: &str) -> Result<SortDirection> {
    parse_choice(value, &[SortDirection::Asc, SortDirection::Desc])
}
