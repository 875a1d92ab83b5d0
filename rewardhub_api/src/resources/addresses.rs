//! CRUD operations for the `/addresses` resource.

use crate::{
    types::{Address, AddressCreate, AddressUpdate, Page},
    Client, Error, ListQuery,
};

impl Client {
    /// Fetches a page of the current user's addresses.
    pub async fn list_addresses(&self, query: &ListQuery) -> Result<Page<Address>, Error> {
        self.get::<Page<Address>, ListQuery>("/addresses", Some(query))
            .await
    }

    /// Fetches a single address by ID.
    pub async fn get_address(&self, address_id: &str) -> Result<Address, Error> {
        self.get::<Address, ListQuery>(format!("/addresses/{}", address_id).as_str(), None)
            .await
    }

    /// Creates a new address for the current user.
    pub async fn create_address(&self, payload: &AddressCreate) -> Result<Address, Error> {
        self.post("/addresses", payload).await
    }

    /// Applies a partial update; omitted fields are left untouched server-side.
    pub async fn update_address(
        &self,
        address_id: &str,
        payload: &AddressUpdate,
    ) -> Result<Address, Error> {
        self.patch(format!("/addresses/{}", address_id).as_str(), Some(payload))
            .await
    }

    /// Deletes an address.
    pub async fn delete_address(&self, address_id: &str) -> Result<(), Error> {
        self.delete(format!("/addresses/{}", address_id).as_str())
            .await
    }
}
