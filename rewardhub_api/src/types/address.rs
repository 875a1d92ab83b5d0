//! Address types for the `/addresses` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Unique identifier for an address (opaque UUID string).
pub type AddressId = String;

/// A delivery address owned by a user.
#[derive(Serialize, Deserialize, Debug)]
pub struct Address {
    pub id: AddressId,

    pub user_id: UserId,

    pub street: String,

    pub number: String,

    pub complement: Option<String>,

    pub district: String,

    pub city: String,

    /// Two-letter state code (uppercase).
    pub state: String,

    pub zip_code: String,

    pub country: String,

    /// Whether this is the user's currently selected address. Server-applied
    /// default is `false` when omitted on creation.
    pub is_selected: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an address. `id`, timestamps, and the owning user are
/// assigned server-side.
#[derive(Serialize)]
pub struct AddressCreate {
    pub street: String,
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_selected: Option<bool>,
}

/// Partial-update payload. `None` fields are omitted from the request body,
/// leaving the server-side value untouched.
#[derive(Serialize, Default)]
pub struct AddressUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_selected: Option<bool>,
}
