use url::Url;

use super::common::{non_empty, Paginated, Paging, Query};

/// Query for a pool's transaction history.
///
/// When `cursor` is set the API continues from that position instead of
/// using plain page offsets.
#[derive(Clone, Debug, Default)]
pub struct TransactionsQuery {
    pub paging: Paging,
    pub cursor: Option<String>,
}

impl Query for TransactionsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.paging.add_to_url(url);
        if let Some(cursor) = &self.cursor {
            url.query_pairs_mut().append_pair("cursor", cursor);
        }
        url
    }
}

impl Paginated for TransactionsQuery {
    fn get_paging(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl TransactionsQuery {
    pub fn with_cursor(mut self, cursor: &str) -> Self {
        self.cursor = non_empty(cursor);
        self
    }
}
