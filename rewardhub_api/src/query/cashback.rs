use url::Url;

use crate::types::CashbackProgramId;

use super::common::{ListQuery, Query};

/// Query builder for a user's cashback credits.
#[derive(Default)]
pub struct CashbackQuery {
    pub list: ListQuery,
    pub program_id: Option<CashbackProgramId>,
}

impl Query for CashbackQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        self.list.append_to(&mut url);
        if let Some(program_id) = &self.program_id {
            url.query_pairs_mut()
                .append_pair("program_id", program_id.as_str());
        }
        url
    }
}

impl CashbackQuery {
    pub fn with_skip(mut self, skip: i64) -> Self {
        self.list.skip = skip;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.list.limit = limit;
        self
    }

    pub fn with_program_id(mut self, program_id: &str) -> Self {
        self.program_id = Some(program_id.to_string());
        self
    }
}
