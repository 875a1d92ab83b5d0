//! Points-rule types for the `/points` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CompanyId;

/// Unique identifier for a points rule (opaque UUID string).
pub type PointsRuleId = String;

/// A rule a company configures to award points to customers.
#[derive(Serialize, Deserialize)]
pub struct PointsRule {
    pub id: PointsRuleId,

    pub company_id: CompanyId,

    pub name: String,

    pub rule_type: PointsRuleKind,

    /// Points awarded when the rule fires.
    pub points: i64,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

/// The closed set of rule kinds the backend evaluates.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum PointsRuleKind {
    ValueSpent,
    Event,
    Frequency,
    Category,
    FirstPurchase,
    Recurrence,
    DigitalBehavior,
    SpecialDate,
    Geolocation,
    Inventory,
}

impl std::fmt::Display for PointsRuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PointsRuleKind::ValueSpent => "value_spent",
                PointsRuleKind::Event => "event",
                PointsRuleKind::Frequency => "frequency",
                PointsRuleKind::Category => "category",
                PointsRuleKind::FirstPurchase => "first_purchase",
                PointsRuleKind::Recurrence => "recurrence",
                PointsRuleKind::DigitalBehavior => "digital_behavior",
                PointsRuleKind::SpecialDate => "special_date",
                PointsRuleKind::Geolocation => "geolocation",
                PointsRuleKind::Inventory => "inventory",
            }
        )
    }
}
