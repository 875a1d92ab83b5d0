use serde::{Deserialize, Serialize};

use super::UserId;

/// One row of a points leaderboard, already ranked by the backend.
#[derive(Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-indexed rank within the queried period.
    pub position: i64,

    pub user_id: UserId,

    pub username: String,

    pub points: i64,
}
