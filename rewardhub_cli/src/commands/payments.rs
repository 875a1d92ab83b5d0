//! The `payments` subcommand: read-only payment listing.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use rewardhub_api::types::PaymentStatus;
use rewardhub_api::{Client, PaymentQuery};

use crate::output::{print_json, print_payments_table, OutputFormat};

#[derive(Args)]
pub struct PaymentsArgs {
    #[command(subcommand)]
    pub action: PaymentAction,
}

#[derive(Subcommand)]
pub enum PaymentAction {
    /// List payments
    List {
        #[arg(long, default_value_t = 0)]
        skip: i64,
        #[arg(long, default_value_t = 10)]
        limit: i64,
        /// Filter by status: pending, paid, failed, cancelled
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one payment
    Get { id: String },
}

fn parse_status(input: &str) -> Result<PaymentStatus> {
    Ok(match input.to_lowercase().as_str() {
        "pending" => PaymentStatus::Pending,
        "paid" => PaymentStatus::Paid,
        "failed" => PaymentStatus::Failed,
        "cancelled" => PaymentStatus::Cancelled,
        other => bail!("unknown status '{}' (expected pending, paid, failed, or cancelled)", other),
    })
}

pub async fn run(args: &PaymentsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        PaymentAction::List { skip, limit, status } => {
            let mut query = PaymentQuery::default().with_skip(*skip).with_limit(*limit);
            if let Some(status) = status {
                query = query.with_status(parse_status(status)?);
            }
            let page = client.list_payments(&query).await?;
            match format {
                OutputFormat::Json => print_json(&page),
                OutputFormat::Table => {
                    print_payments_table(&page.items);
                    println!("{} of {} payments", page.items.len(), page.total);
                }
            }
        }
        PaymentAction::Get { id } => {
            let payment = client.get_payment(id).await?;
            print_json(&payment);
        }
    }
    Ok(())
}
