//! Commission and withdrawal types for the `/commissions` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TransferMethod, TransferMethodId, UserId};

/// Unique identifier for a withdrawal request (opaque UUID string).
pub type WithdrawalId = String;

/// The current user's commission balance, in cents.
#[derive(Serialize, Deserialize, Debug)]
pub struct CommissionBalance {
    /// Amount available for withdrawal.
    pub available: i64,
    /// Amount earned but not yet released by the backend.
    pub pending: i64,
    /// Lifetime total already withdrawn.
    pub total_withdrawn: i64,
}

/// One row of the commission ledger.
#[derive(Serialize, Deserialize)]
pub struct CommissionEntry {
    pub id: String,

    pub user_id: UserId,

    /// Amount in cents. Negative for reversals.
    pub amount: i64,

    pub status: CommissionStatus,

    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Server-owned ledger state; the client only observes it.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum CommissionStatus {
    Pending,
    Available,
    Withdrawn,
}

impl std::fmt::Display for CommissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CommissionStatus::Pending => "pending",
                CommissionStatus::Available => "available",
                CommissionStatus::Withdrawn => "withdrawn",
            }
        )
    }
}

/// A withdrawal request with its embedded payout key read-shape.
#[derive(Serialize, Deserialize, Debug)]
pub struct Withdrawal {
    pub id: WithdrawalId,

    pub user_id: UserId,

    /// Requested amount in cents.
    pub amount: i64,

    pub status: WithdrawalStatus,

    /// The payout key the amount will be sent to.
    pub transfer_method: TransferMethod,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Server-owned withdrawal state. Transitions happen only on the backend; the
/// client requests them via the admin approve/reject endpoints.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Rejected,
    Paid,
}

impl std::fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WithdrawalStatus::Pending => "pending",
                WithdrawalStatus::Approved => "approved",
                WithdrawalStatus::Rejected => "rejected",
                WithdrawalStatus::Paid => "paid",
            }
        )
    }
}

/// Payload for requesting a withdrawal of `amount` cents through an existing
/// transfer method.
#[derive(Serialize)]
pub struct WithdrawalCreate {
    pub amount: i64,
    pub transfer_method_id: TransferMethodId,
}
