//! The `commissions` subcommand: balance, ledger, and the withdrawal flow.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use rewardhub_api::types::{CommissionStatus, WithdrawalCreate};
use rewardhub_api::{Client, CommissionHistoryQuery};

use crate::output::{print_commissions_table, print_json, OutputFormat};

#[derive(Args)]
pub struct CommissionsArgs {
    #[command(subcommand)]
    pub action: CommissionAction,
}

#[derive(Subcommand)]
pub enum CommissionAction {
    /// Show the current balance
    Balance,
    /// List the commission ledger
    History {
        #[arg(long, default_value_t = 0)]
        skip: i64,
        #[arg(long, default_value_t = 10)]
        limit: i64,
        /// Filter by status: pending, available, withdrawn
        #[arg(long)]
        status: Option<String>,
    },
    /// Request a withdrawal
    Withdraw {
        /// Amount in cents
        #[arg(long)]
        amount: i64,
        /// Payout key to send the amount to
        #[arg(long)]
        transfer_method_id: String,
    },
    /// Show one withdrawal request
    Show { id: String },
    /// Approve a pending withdrawal (admin)
    Approve { id: String },
    /// Reject a pending withdrawal (admin)
    Reject { id: String },
}

fn parse_status(input: &str) -> Result<CommissionStatus> {
    Ok(match input.to_lowercase().as_str() {
        "pending" => CommissionStatus::Pending,
        "available" => CommissionStatus::Available,
        "withdrawn" => CommissionStatus::Withdrawn,
        other => bail!("unknown status '{}' (expected pending, available, or withdrawn)", other),
    })
}

pub async fn run(args: &CommissionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        CommissionAction::Balance => {
            let balance = client.commission_balance().await?;
            print_json(&balance);
        }
        CommissionAction::History { skip, limit, status } => {
            let mut query = CommissionHistoryQuery::default()
                .with_skip(*skip)
                .with_limit(*limit);
            if let Some(status) = status {
                query = query.with_status(parse_status(status)?);
            }
            let page = client.commission_history(&query).await?;
            match format {
                OutputFormat::Json => print_json(&page),
                OutputFormat::Table => {
                    print_commissions_table(&page.items);
                    println!("{} of {} entries", page.items.len(), page.total);
                }
            }
        }
        CommissionAction::Withdraw {
            amount,
            transfer_method_id,
        } => {
            let payload = WithdrawalCreate {
                amount: *amount,
                transfer_method_id: transfer_method_id.clone(),
            };
            let withdrawal = client.request_withdrawal(&payload).await?;
            print_json(&withdrawal);
        }
        CommissionAction::Show { id } => {
            let withdrawal = client.get_withdrawal(id).await?;
            print_json(&withdrawal);
        }
        CommissionAction::Approve { id } => {
            let withdrawal = client.approve_withdrawal(id).await?;
            print_json(&withdrawal);
        }
        CommissionAction::Reject { id } => {
            let withdrawal = client.reject_withdrawal(id).await?;
            print_json(&withdrawal);
        }
    }
    Ok(())
}
