use url::Url;

use crate::types::CommissionStatus;

use super::common::{ListQuery, Query};

/// Query builder for the commission ledger.
#[derive(Default)]
pub struct CommissionHistoryQuery {
    pub list: ListQuery,
    pub status: Option<CommissionStatus>,
}

impl Query for CommissionHistoryQuery {
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

impl CommissionHistoryQuery {
    pub fn with_skip(mut self, skip: i64) -> Self {
        self.list.skip = skip;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.list.limit = limit;
        self
    }

    pub fn with_status(mut self, status: CommissionStatus) -> Self {
        self.status = Some(status);
        self
    }
}
