//! Shared query infrastructure: the [`Query`] and [`Paginated`] traits, [`Paging`], and [`SortDirection`].

use std::str::FromStr;

use url::Url;

use crate::Error;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// Parameters are appended in the order the API documents them. Optional
    /// parameters that were never set are left out entirely.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Query builders that carry `page`/`limit` pagination.
pub trait Paginated: Query {
    /// Returns a mutable reference to the pagination fields.
    fn get_paging(&mut self) -> &mut Paging;

    /// Sets the page number (0-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_paging().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_paging().limit = limit;
        self
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order. This is the default.
    #[default]
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(Error::invalid_value("sort", s)),
        }
    }
}

/// Pagination fields shared by list queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paging {
    /// Page number (0-indexed). Defaults to 0.
    pub page: u32,
    /// Results per page. Defaults to 10.
    pub limit: u32,
}

impl Default for Paging {
    fn default() -> Paging {
        Paging { page: 0, limit: 10 }
    }
}

impl Paging {
    /// Appends `page` then `limit` to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string())
            .append_pair("limit", &self.limit.to_string());
        url
    }
}

/// Serializes a boolean the way the API expects it: `true` or `false`.
pub(crate) fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Drops empty strings so they are treated like an unset optional parameter.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
