use std::str::FromStr;

use url::Url;

use crate::Error;

use super::common::{non_empty, Paginated, Paging, Query, SortDirection};

/// Query for ranked pool listings: global, per network, per DEX.
#[derive(Clone, Debug, Default)]
pub struct PoolsQuery {
    pub order_by: PoolSortBy,
    pub sort: SortDirection,
    pub paging: Paging,
}

impl Query for PoolsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("order_by", &self.order_by.to_string())
            .append_pair("sort", &self.sort.to_string());
        self.paging.add_to_url(&url)
    }
}

impl Paginated for PoolsQuery {
    fn get_paging(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl PoolsQuery {
    pub fn with_order_by(mut self, order_by: PoolSortBy) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn with_sort_direction(mut self, sort: SortDirection) -> Self {
        self.sort = sort;
        self
    }
}

/// Query for the pools that contain a given token.
///
/// Shares ordering and pagination with [`PoolsQuery`], plus an optional
/// second token `address` that narrows the result to pools holding both.
#[derive(Clone, Debug, Default)]
pub struct TokenPoolsQuery {
    pub pools: PoolsQuery,
    pub address: Option<String>,
}

impl Query for TokenPoolsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.pools.add_to_url(url);
        if let Some(address) = &self.address {
            url.query_pairs_mut().append_pair("address", address);
        }
        url
    }
}

impl Paginated for TokenPoolsQuery {
    fn get_paging(&mut self) -> &mut Paging {
        &mut self.pools.paging
    }
}

impl TokenPoolsQuery {
    pub fn with_order_by(mut self, order_by: PoolSortBy) -> Self {
        self.pools.order_by = order_by;
        self
    }

    pub fn with_sort_direction(mut self, sort: SortDirection) -> Self {
        self.pools.sort = sort;
        self
    }

    /// Only return pools that also contain this token address.
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = non_empty(address);
        self
    }
}

/// Field that pool listings can be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PoolSortBy {
    #[default]
    VolumeUsd,
    PriceUsd,
    Transactions,
    LastPriceChangeUsd24h,
    CreatedAt,
}

impl PoolSortBy {
    pub const ALL: [PoolSortBy; 5] = [
        PoolSortBy::VolumeUsd,
        PoolSortBy::PriceUsd,
        PoolSortBy::Transactions,
        PoolSortBy::LastPriceChangeUsd24h,
        PoolSortBy::CreatedAt,
    ];
}

impl std::fmt::Display for PoolSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PoolSortBy::VolumeUsd => "volume_usd",
                PoolSortBy::PriceUsd => "price_usd",
                PoolSortBy::Transactions => "transactions",
                PoolSortBy::LastPriceChangeUsd24h => "last_price_change_usd_24h",
                PoolSortBy::CreatedAt => "created_at",
            }
        )?;
        Ok(())
    }
}

impl FromStr for PoolSortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoolSortBy::ALL
            .into_iter()
            .find(|order_by| order_by.to_string() == s)
            .ok_or_else(|| Error::invalid_value("order_by", s))
    }
}
