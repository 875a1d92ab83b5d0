//! The `cashback` subcommand: program management and earned credits.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rewardhub_api::types::{CashbackProgramCreate, CashbackProgramUpdate};
use rewardhub_api::{CashbackQuery, Client};

use crate::output::{
    print_cashback_programs_table, print_cashbacks_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct CashbackArgs {
    #[command(subcommand)]
    pub action: CashbackAction,
}

#[derive(Subcommand)]
pub enum CashbackAction {
    /// List a company's cashback programs
    Programs {
        #[arg(long)]
        company_id: String,
    },
    /// Create a cashback program
    CreateProgram {
        #[arg(long)]
        name: String,
        /// Percentage returned on qualifying purchases
        #[arg(long)]
        percent: f64,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        valid_from: Option<NaiveDate>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        valid_until: Option<NaiveDate>,
    },
    /// Update a cashback program; unset flags are left untouched
    UpdateProgram {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        percent: Option<f64>,
        #[arg(long)]
        valid_from: Option<NaiveDate>,
        #[arg(long)]
        valid_until: Option<NaiveDate>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a cashback program
    DeleteProgram { id: String },
    /// List the current user's earned cashback credits
    List {
        #[arg(long, default_value_t = 0)]
        skip: i64,
        #[arg(long, default_value_t = 10)]
        limit: i64,
        /// Only credits earned under this program
        #[arg(long)]
        program_id: Option<String>,
    },
}

pub async fn run(args: &CashbackArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        CashbackAction::Programs { company_id } => {
            let programs = client.list_cashback_programs(company_id).await?;
            match format {
                OutputFormat::Json => print_json(&programs),
                OutputFormat::Table => print_cashback_programs_table(&programs),
            }
        }
        CashbackAction::CreateProgram {
            name,
            percent,
            valid_from,
            valid_until,
        } => {
            let payload = CashbackProgramCreate {
                name: name.clone(),
                percent: *percent,
                valid_from: *valid_from,
                valid_until: *valid_until,
            };
            let program = client.create_cashback_program(&payload).await?;
            print_json(&program);
        }
        CashbackAction::UpdateProgram {
            id,
            name,
            percent,
            valid_from,
            valid_until,
            active,
        } => {
            let payload = CashbackProgramUpdate {
                name: name.clone(),
                percent: *percent,
                valid_from: *valid_from,
                valid_until: *valid_until,
                is_active: *active,
            };
            let program = client.update_cashback_program(id, &payload).await?;
            print_json(&program);
        }
        CashbackAction::DeleteProgram { id } => {
            client.delete_cashback_program(id).await?;
            println!("Deleted cashback program {}", id);
        }
        CashbackAction::List {
            skip,
            limit,
            program_id,
        } => {
            let mut query = CashbackQuery::default().with_skip(*skip).with_limit(*limit);
            if let Some(program_id) = program_id {
                query = query.with_program_id(program_id);
            }
            let page = client.list_cashbacks(&query).await?;
            match format {
                OutputFormat::Json => print_json(&page),
                OutputFormat::Table => {
                    print_cashbacks_table(&page.items);
                    println!("{} of {} credits", page.items.len(), page.total);
                }
            }
        }
    }
    Ok(())
}
