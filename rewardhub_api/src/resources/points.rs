//! Read operations for the `/points` resource.

use crate::{types::PointsRule, Client, Error, ListQuery};

impl Client {
    /// Fetches the active, visible points rules configured by a company.
    pub async fn points_rules(&self, company_id: &str) -> Result<Vec<PointsRule>, Error> {
        self.get::<Vec<PointsRule>, ListQuery>(
            format!("/points/rules/company/{}", company_id).as_str(),
            None,
        )
        .await
    }
}
