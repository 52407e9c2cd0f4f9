//! Logical API operations, used to label requests in logs and errors.

use std::fmt;

/// One of the DexPaprika REST operations exposed by [`crate::Client`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /networks`
    Networks,
    /// `GET /networks/{network}/dexes`
    NetworkDexes,
    /// `GET /pools`
    TopPools,
    /// `GET /networks/{network}/pools`
    NetworkPools,
    /// `GET /networks/{network}/dexes/{dex}/pools`
    DexPools,
    /// `GET /networks/{network}/pools/{pool_address}`
    PoolDetails,
    /// `GET /networks/{network}/tokens/{token_address}`
    TokenDetails,
    /// `GET /networks/{network}/tokens/{token_address}/pools`
    TokenPools,
    /// `GET /networks/{network}/pools/{pool_address}/ohlcv`
    PoolOhlcv,
    /// `GET /networks/{network}/pools/{pool_address}/transactions`
    PoolTransactions,
    /// `GET /search`
    Search,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Endpoint::Networks => "networks",
                Endpoint::NetworkDexes => "network DEXes",
                Endpoint::TopPools => "top pools",
                Endpoint::NetworkPools => "network pools",
                Endpoint::DexPools => "DEX pools",
                Endpoint::PoolDetails => "pool details",
                Endpoint::TokenDetails => "token details",
                Endpoint::TokenPools => "token pools",
                Endpoint::PoolOhlcv => "pool OHLCV data",
                Endpoint::PoolTransactions => "pool transactions",
                Endpoint::Search => "search results",
            }
        )
    }
}
