use url::Url;

use super::common::Query;

/// Query builder for the public category search, which paginates by
/// 1-indexed `page`/`size` rather than `skip`/`limit`.
pub struct CategoryQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Results per page. `None` uses the API default.
    pub size: Option<i64>,
    /// Free-text search over category names.
    pub q: Option<String>,
}

impl Default for CategoryQuery {
    fn default() -> CategoryQuery {
        CategoryQuery {
            page: 1,
            size: None,
            q: None,
        }
    }
}

impl Query for CategoryQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        if let Some(size) = self.size {
            url.query_pairs_mut()
                .append_pair("size", &size.to_string());
        }
        if let Some(q) = &self.q {
            url.query_pairs_mut().append_pair("q", q.as_str());
        }
        url
    }
}

impl CategoryQuery {
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_search(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }
}
