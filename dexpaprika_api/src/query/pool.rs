use url::Url;

use super::common::{bool_param, Query};

/// Query for a single pool record.
#[derive(Clone, Copy, Debug, Default)]
pub struct PoolDetailsQuery {
    pub inversed: bool,
}

impl Query for PoolDetailsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("inversed", bool_param(self.inversed));
        url
    }
}

impl PoolDetailsQuery {
    /// Flip the quote/base price ratio of the returned prices.
    pub fn with_inversed(mut self, inversed: bool) -> Self {
        self.inversed = inversed;
        self
    }
}

/// Free-text query across tokens, pools and DEXes.
#[derive(Clone, Debug)]
pub struct SearchQuery {
    pub query: String,
}

impl Query for SearchQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("query", &self.query);
        url
    }
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{PoolDetailsQuery, Query, SearchQuery};

    #[test]
    fn test_pool_details_query() {
        let url = Url::parse("https://example.com/pool").unwrap();
        insta::assert_snapshot!(
            PoolDetailsQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/pool?inversed=false"
        );
        insta::assert_snapshot!(
            PoolDetailsQuery::default().with_inversed(true).add_to_url(&url).to_string(),
            @"https://example.com/pool?inversed=true"
        );
    }

    #[test]
    fn test_search_query_is_form_encoded() {
        let url = Url::parse("https://example.com/search").unwrap();
        insta::assert_snapshot!(
            SearchQuery::new("wrapped ether & co").add_to_url(&url).to_string(),
            @"https://example.com/search?query=wrapped+ether+%26+co"
        );
    }
}
