//! Cashback program and cashback record types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{CompanyId, UserId};

/// Unique identifier for a cashback program (opaque UUID string).
pub type CashbackProgramId = String;

/// A cashback program a company runs for its customers.
#[derive(Serialize, Deserialize)]
pub struct CashbackProgram {
    pub id: CashbackProgramId,

    pub company_id: CompanyId,

    pub name: String,

    /// Percentage returned on qualifying purchases (0.0 to 100.0).
    pub percent: f64,

    pub valid_from: Option<NaiveDate>,

    pub valid_until: Option<NaiveDate>,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct CashbackProgramCreate {
    pub name: String,
    pub percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
}

/// Partial-update payload. `None` fields are omitted from the request body.
#[derive(Serialize, Default)]
pub struct CashbackProgramUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// One cashback credit earned by a user under a program.
#[derive(Serialize, Deserialize)]
pub struct Cashback {
    pub id: String,

    pub program_id: CashbackProgramId,

    pub user_id: UserId,

    /// Amount credited, in cents.
    pub amount: i64,

    pub created_at: DateTime<Utc>,
}
