//! The public category search. Works without a session token.

use crate::{
    types::{Category, SearchPage},
    CategoryQuery, Client, Error,
};

impl Client {
    /// Searches public categories, paginated by 1-indexed page/size.
    pub async fn search_categories(
        &self,
        query: &CategoryQuery,
    ) -> Result<SearchPage<Category>, Error> {
        self.get::<SearchPage<Category>, CategoryQuery>("/categories/public", Some(query))
            .await
    }
}
