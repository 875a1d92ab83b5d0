//! Shared query infrastructure: the [`Query`] trait and offset pagination.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization so the
/// client can append a builder's parameters to an endpoint URL.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Offset pagination shared by every list endpoint.
///
/// `skip` is the zero-based record offset, `limit` the page size. Offset-based
/// pages are not stable under concurrent writes; the backend offers no cursor.
#[derive(Clone, Copy)]
pub struct ListQuery {
    /// Record offset. Must be >= 0. Defaults to 0.
    pub skip: i64,
    /// Page size. Must be > 0. Defaults to 10.
    pub limit: i64,
}

impl Default for ListQuery {
    fn default() -> ListQuery {
        ListQuery { skip: 0, limit: 10 }
    }
}

impl ListQuery {
    /// Sets the record offset.
    pub fn with_skip(mut self, skip: i64) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the page size.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn append_to(&self, url: &mut Url) {
        url.query_pairs_mut()
            .append_pair("skip", &self.skip.to_string())
            .append_pair("limit", &self.limit.to_string());
    }
}

impl Query for ListQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        self.append_to(&mut url);
        url
    }
}
