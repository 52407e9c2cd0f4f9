//! Async client for the DexPaprika decentralized-exchange data API.
//!
//! Every operation on [`Client`] issues exactly one `GET` and returns the
//! decoded JSON body as a [`serde_json::Value`].

mod client;
mod endpoint;
mod errors;
pub mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::endpoint::Endpoint;
pub use self::errors::Error;
pub use self::query::{
    DexesQuery, OhlcvInterval, OhlcvQuery, Paginated, PoolDetailsQuery, PoolSortBy, PoolsQuery,
    Query, SearchQuery, SortDirection, TokenPoolsQuery, TransactionsQuery,
};
pub use self::types::TimeBound;
