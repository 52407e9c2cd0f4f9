//! HTTP client for the DexPaprika REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    endpoint::Endpoint,
    query::{
        DexesQuery, OhlcvQuery, PoolDetailsQuery, PoolsQuery, Query, SearchQuery,
        TokenPoolsQuery, TransactionsQuery,
    },
    types::alias_ohlcv,
    Error,
};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.dexpaprika.com";

const USER_AGENT: &str = concat!("dexpaprika-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the DexPaprika REST API.
///
/// Holds configuration only. Each request builds a fresh `reqwest::Client`
/// that is dropped once the call returns, so calls share no state and can run
/// concurrently. No timeout is applied unless [`Client::with_timeout`] is used.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.dexpaprika.com`.
    base_api_url: String,
    timeout: Option<Duration>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production DexPaprika API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            timeout: None,
        }
    }

    /// Applies a per-request timeout to every call made by this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(
        &self,
        endpoint: Endpoint,
        segments: &[&str],
        query: Option<&dyn Query>,
    ) -> Result<Url, Error> {
        let invalid = |source: url::ParseError| {
            tracing::error!("Invalid URL constructed for {}: {}", endpoint, source);
            Error::InvalidUrl { endpoint, source }
        };
        let mut url = Url::parse(&self.base_api_url).map_err(invalid)?;
        url.path_segments_mut()
            .map_err(|_| invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T>(
        &self,
        endpoint: Endpoint,
        segments: &[&str],
        query: Option<&dyn Query>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(endpoint, segments, query)?;
        tracing::debug!("GET {} ({})", url, endpoint);

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport {
                endpoint,
                source: e,
            }
        })?;

        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {}: {}", endpoint, e);
                Error::Transport {
                    endpoint,
                    source: e,
                }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read {} response body: {}", endpoint, e);
            Error::Transport {
                endpoint,
                source: e,
            }
        })?;

        if status != reqwest::StatusCode::OK {
            let snippet = truncate_body(&body);
            tracing::error!("Request for {} failed with status {}: {}", endpoint, status, snippet);
            return Err(Error::HttpStatus {
                endpoint,
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse {}: {} | body: {}",
                endpoint,
                e,
                truncate_body(&body)
            );
            Error::Decode {
                endpoint,
                source: e,
            }
        })
    }

    /// Fetches all supported blockchain networks and their metadata.
    pub async fn get_networks(&self) -> Result<Value, Error> {
        self.get(Endpoint::Networks, &["networks"], None).await
    }

    /// Fetches the decentralized exchanges available on a network.
    pub async fn get_network_dexes(
        &self,
        network: &str,
        query: &DexesQuery,
    ) -> Result<Value, Error> {
        self.get(
            Endpoint::NetworkDexes,
            &["networks", network, "dexes"],
            Some(query),
        )
        .await
    }

    /// Fetches the top liquidity pools across all networks.
    pub async fn get_top_pools(&self, query: &PoolsQuery) -> Result<Value, Error> {
        self.get(Endpoint::TopPools, &["pools"], Some(query)).await
    }

    /// Fetches the top liquidity pools on one network.
    pub async fn get_network_pools(
        &self,
        network: &str,
        query: &PoolsQuery,
    ) -> Result<Value, Error> {
        self.get(
            Endpoint::NetworkPools,
            &["networks", network, "pools"],
            Some(query),
        )
        .await
    }

    /// Fetches the top pools of one DEX within a network.
    pub async fn get_dex_pools(
        &self,
        network: &str,
        dex: &str,
        query: &PoolsQuery,
    ) -> Result<Value, Error> {
        self.get(
            Endpoint::DexPools,
            &["networks", network, "dexes", dex, "pools"],
            Some(query),
        )
        .await
    }

    /// Fetches a single pool. `inversed` flips the quote/base price ratio.
    pub async fn get_pool_details(
        &self,
        network: &str,
        pool_address: &str,
        inversed: bool,
    ) -> Result<Value, Error> {
        let query = PoolDetailsQuery::default().with_inversed(inversed);
        self.get(
            Endpoint::PoolDetails,
            &["networks", network, "pools", pool_address],
            Some(&query),
        )
        .await
    }

    /// Fetches a single token.
    pub async fn get_token_details(
        &self,
        network: &str,
        token_address: &str,
    ) -> Result<Value, Error> {
        self.get(
            Endpoint::TokenDetails,
            &["networks", network, "tokens", token_address],
            None,
        )
        .await
    }

    /// Fetches the pools that contain a token, optionally only those that
    /// also contain the query's second `address`.
    pub async fn get_token_pools(
        &self,
        network: &str,
        token_address: &str,
        query: &TokenPoolsQuery,
    ) -> Result<Value, Error> {
        self.get(
            Endpoint::TokenPools,
            &["networks", network, "tokens", token_address, "pools"],
            Some(query),
        )
        .await
    }

    /// Fetches OHLCV candles for a pool.
    ///
    /// If the response object has `data` but no `ohlcv`, `ohlcv` is added as a
    /// copy of `data`.
    pub async fn get_pool_ohlcv(
        &self,
        network: &str,
        pool_address: &str,
        query: &OhlcvQuery,
    ) -> Result<Value, Error> {
        let value: Value = self
            .get(
                Endpoint::PoolOhlcv,
                &["networks", network, "pools", pool_address, "ohlcv"],
                Some(query),
            )
            .await?;
        Ok(alias_ohlcv(value))
    }

    /// Fetches recent transactions of a pool.
    pub async fn get_pool_transactions(
        &self,
        network: &str,
        pool_address: &str,
        query: &TransactionsQuery,
    ) -> Result<Value, Error> {
        self.get(
            Endpoint::PoolTransactions,
            &["networks", network, "pools", pool_address, "transactions"],
            Some(query),
        )
        .await
    }

    /// Searches tokens, pools and DEXes matching free text.
    pub async fn search(&self, query: &str) -> Result<Value, Error> {
        self.get(Endpoint::Search, &["search"], Some(&SearchQuery::new(query)))
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_keeps_base_path_prefix() {
        let client = Client::with_base_url("https://proxy.example.com/dexpaprika/");
        let url = client
            .get_url(Endpoint::NetworkPools, &["networks", "solana", "pools"], None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://proxy.example.com/dexpaprika/networks/solana/pools"
        );
    }

    #[test]
    fn path_segments_are_escaped() {
        let client = Client::new();
        let url = client
            .get_url(
                Endpoint::TokenDetails,
                &["networks", "ethereum", "tokens", "0xab/cd"],
                None,
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.dexpaprika.com/networks/ethereum/tokens/0xab%2Fcd"
        );
    }

    #[test]
    fn bad_base_url_is_reported() {
        let client = Client::with_base_url("not a url");
        let err = client.get_url(Endpoint::Networks, &["networks"], None).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { endpoint: Endpoint::Networks, .. }));

        let client = Client::with_base_url("mailto:someone@example.com");
        assert!(client.get_url(Endpoint::Networks, &["networks"], None).is_err());
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
        assert_eq!(truncate_body("short"), "short");
    }
}
