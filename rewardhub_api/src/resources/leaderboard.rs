//! Points leaderboard queries. Ranking is computed server-side; each call
//! returns rows already ordered by position.

use crate::{types::LeaderboardEntry, Client, Error, ListQuery};

impl Client {
    /// Fetches the all-time leaderboard.
    pub async fn leaderboard_overall(&self) -> Result<Vec<LeaderboardEntry>, Error> {
        self.get::<Vec<LeaderboardEntry>, ListQuery>("/leaderboard/overall", None)
            .await
    }

    /// Fetches today's leaderboard.
    pub async fn leaderboard_today(&self) -> Result<Vec<LeaderboardEntry>, Error> {
        self.get::<Vec<LeaderboardEntry>, ListQuery>("/leaderboard/today", None)
            .await
    }

    /// Fetches the leaderboard for a given month.
    pub async fn leaderboard_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<LeaderboardEntry>, Error> {
        self.get::<Vec<LeaderboardEntry>, ListQuery>(
            format!("/leaderboard/month/{}/{}", year, month).as_str(),
            None,
        )
        .await
    }
}
