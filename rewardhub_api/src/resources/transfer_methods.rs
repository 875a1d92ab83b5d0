//! CRUD operations for the `/transfer_methods` (payout key) resource.

use crate::{
    types::{Page, TransferMethod, TransferMethodCreate, TransferMethodUpdate},
    Client, Error, ListQuery,
};

impl Client {
    /// Fetches a page of the current user's payout keys.
    pub async fn list_transfer_methods(
        &self,
        query: &ListQuery,
    ) -> Result<Page<TransferMethod>, Error> {
        self.get::<Page<TransferMethod>, ListQuery>("/transfer_methods", Some(query))
            .await
    }

    /// Fetches a single payout key by ID.
    pub async fn get_transfer_method(&self, method_id: &str) -> Result<TransferMethod, Error> {
        self.get::<TransferMethod, ListQuery>(
            format!("/transfer_methods/{}", method_id).as_str(),
            None,
        )
        .await
    }

    /// Registers a new payout key.
    pub async fn create_transfer_method(
        &self,
        payload: &TransferMethodCreate,
    ) -> Result<TransferMethod, Error> {
        self.post("/transfer_methods", payload).await
    }

    /// Applies a partial update; omitted fields are left untouched server-side.
    pub async fn update_transfer_method(
        &self,
        method_id: &str,
        payload: &TransferMethodUpdate,
    ) -> Result<TransferMethod, Error> {
        self.patch(
            format!("/transfer_methods/{}", method_id).as_str(),
            Some(payload),
        )
        .await
    }

    /// Removes a payout key.
    pub async fn delete_transfer_method(&self, method_id: &str) -> Result<(), Error> {
        self.delete(format!("/transfer_methods/{}", method_id).as_str())
            .await
    }
}
