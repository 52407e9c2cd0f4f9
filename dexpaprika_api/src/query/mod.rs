mod common;
pub use self::common::{Paginated, Paging, Query, SortDirection};

mod dexes;
pub use self::dexes::DexesQuery;

mod pools;
pub use self::pools::{PoolSortBy, PoolsQuery, TokenPoolsQuery};

mod pool;
pub use self::pool::{PoolDetailsQuery, SearchQuery};

mod ohlcv;
pub use self::ohlcv::{OhlcvInterval, OhlcvQuery};

mod transactions;
pub use self::transactions::TransactionsQuery;
