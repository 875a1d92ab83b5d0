//! Payout-key (transfer method) types for the `/transfer_methods` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Unique identifier for a transfer method (opaque UUID string).
pub type TransferMethodId = String;

/// A payout key a user can receive withdrawals through.
#[derive(Serialize, Deserialize, Debug)]
pub struct TransferMethod {
    pub id: TransferMethodId,

    pub user_id: UserId,

    pub key_type: TransferMethodKind,

    /// The key itself: document number, e-mail, phone, or random key string.
    pub key_value: String,

    pub is_default: bool,

    pub created_at: DateTime<Utc>,
}

/// Kind of payout key.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum TransferMethodKind {
    Cpf,
    Cnpj,
    Email,
    Phone,
    Random,
}

impl std::fmt::Display for TransferMethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransferMethodKind::Cpf => "cpf",
                TransferMethodKind::Cnpj => "cnpj",
                TransferMethodKind::Email => "email",
                TransferMethodKind::Phone => "phone",
                TransferMethodKind::Random => "random",
            }
        )
    }
}

#[derive(Serialize)]
pub struct TransferMethodCreate {
    pub key_type: TransferMethodKind,
    pub key_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

/// Partial-update payload. `None` fields are omitted from the request body.
#[derive(Serialize, Default)]
pub struct TransferMethodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<TransferMethodKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}
