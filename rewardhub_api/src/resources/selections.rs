//! Operations for the `/selections` (saved products) resource.

use crate::{
    types::{Page, Selection, SelectionCreate},
    Client, Error, ListQuery,
};

impl Client {
    /// Fetches a page of the current user's saved products.
    pub async fn list_selections(&self, query: &ListQuery) -> Result<Page<Selection>, Error> {
        self.get::<Page<Selection>, ListQuery>("/selections", Some(query))
            .await
    }

    /// Saves a product to the current user's selection list.
    pub async fn create_selection(&self, payload: &SelectionCreate) -> Result<Selection, Error> {
        self.post("/selections", payload).await
    }

    /// Removes a saved product.
    pub async fn delete_selection(&self, selection_id: &str) -> Result<(), Error> {
        self.delete(format!("/selections/{}", selection_id).as_str())
            .await
    }
}
