//! Operations for the `/commissions` resource: balance, ledger, withdrawals,
//! and the admin approve/reject transitions.

use crate::{
    types::{CommissionBalance, CommissionEntry, Page, Withdrawal, WithdrawalCreate},
    Client, CommissionHistoryQuery, Error, ListQuery,
};

impl Client {
    /// Fetches the current user's commission balance.
    pub async fn commission_balance(&self) -> Result<CommissionBalance, Error> {
        self.get::<CommissionBalance, ListQuery>("/commissions/balance", None)
            .await
    }

    /// Fetches a page of the commission ledger.
    pub async fn commission_history(
        &self,
        query: &CommissionHistoryQuery,
    ) -> Result<Page<CommissionEntry>, Error> {
        self.get::<Page<CommissionEntry>, CommissionHistoryQuery>(
            "/commissions/history",
            Some(query),
        )
        .await
    }

    /// Requests a withdrawal of available commission through a payout key.
    pub async fn request_withdrawal(
        &self,
        payload: &WithdrawalCreate,
    ) -> Result<Withdrawal, Error> {
        self.post("/commissions/withdrawals", payload).await
    }

    /// Fetches a single withdrawal request by ID.
    pub async fn get_withdrawal(&self, withdrawal_id: &str) -> Result<Withdrawal, Error> {
        self.get::<Withdrawal, ListQuery>(
            format!("/commissions/withdrawals/{}", withdrawal_id).as_str(),
            None,
        )
        .await
    }

    /// Admin-only: approves a pending withdrawal. The backend rejects the
    /// transition with a conflict if the withdrawal is no longer pending,
    /// which surfaces as [`Error::Conflict`].
    pub async fn approve_withdrawal(&self, withdrawal_id: &str) -> Result<Withdrawal, Error> {
        self.patch::<Withdrawal, ()>(
            format!("/admin/commissions/{}/approve", withdrawal_id).as_str(),
            None,
        )
        .await
    }

    /// Admin-only: rejects a pending withdrawal.
    pub async fn reject_withdrawal(&self, withdrawal_id: &str) -> Result<Withdrawal, Error> {
        self.patch::<Withdrawal, ()>(
            format!("/admin/commissions/{}/reject", withdrawal_id).as_str(),
            None,
        )
        .await
    }
}
