use url::Url;

use crate::types::PaymentStatus;

use super::common::{ListQuery, Query};

/// Query builder for the payment list.
#[derive(Default)]
pub struct PaymentQuery {
    pub list: ListQuery,
    pub status: Option<PaymentStatus>,
}

impl Query for PaymentQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        self.list.append_to(&mut url);
        if let Some(status) = self.status {
            url.query_pairs_mut()
                .append_pair("status", status.to_string().as_str());
        }
        url
    }
}

impl PaymentQuery {
    pub fn with_skip(mut self, skip: i64) -> Self {
        self.list.skip = skip;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.list.limit = limit;
        self
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }
}
