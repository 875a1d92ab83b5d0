//! Payment types for the `/payments` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Unique identifier for a payment (opaque UUID string).
pub type PaymentId = String;

/// A payment record. Status transitions are server-side only.
#[derive(Serialize, Deserialize, Debug)]
pub struct Payment {
    pub id: PaymentId,

    pub user_id: UserId,

    /// Amount in cents.
    pub amount: i64,

    pub status: PaymentStatus,

    /// Payment method label (e.g. "pix", "credit_card"), when known.
    pub method: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Wire format is UPPERCASE.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Cancelled,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PaymentStatus::Pending => "PENDING",
                PaymentStatus::Paid => "PAID",
                PaymentStatus::Failed => "FAILED",
                PaymentStatus::Cancelled => "CANCELLED",
            }
        )
    }
}
