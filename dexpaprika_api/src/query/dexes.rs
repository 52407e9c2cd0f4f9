use url::Url;

use super::common::{Paginated, Paging, Query, SortDirection};

/// Query for the DEXes listed on one network.
#[derive(Clone, Debug, Default)]
pub struct DexesQuery {
    pub paging: Paging,
    pub sort: SortDirection,
}

impl Query for DexesQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.paging.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("sort", &self.sort.to_string());
        url
    }
}

impl Paginated for DexesQuery {
    fn get_paging(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl DexesQuery {
    pub fn with_sort_direction(mut self, sort: SortDirection) -> Self {
        self.sort = sort;
        self
    }
}
