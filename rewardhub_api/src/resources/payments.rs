//! Read operations for the `/payments` resource. Payments are created and
//! transitioned entirely server-side; this layer only observes them.

use crate::{
    types::{Page, Payment},
    Client, Error, ListQuery, PaymentQuery,
};

impl Client {
    /// Fetches a page of the current user's payments.
    pub async fn list_payments(&self, query: &PaymentQuery) -> Result<Page<Payment>, Error> {
        self.get::<Page<Payment>, PaymentQuery>("/payments", Some(query))
            .await
    }

    /// Fetches a single payment by ID.
    pub async fn get_payment(&self, payment_id: &str) -> Result<Payment, Error> {
        self.get::<Payment, ListQuery>(format!("/payments/{}", payment_id).as_str(), None)
            .await
    }
}
