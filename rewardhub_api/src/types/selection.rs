use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Unique identifier for a selection (opaque UUID string).
pub type SelectionId = String;

/// A product a user has saved to their selection list.
#[derive(Serialize, Deserialize)]
pub struct Selection {
    pub id: SelectionId,

    pub user_id: UserId,

    pub product_id: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct SelectionCreate {
    pub product_id: String,
}
