//! The `transfer-methods` subcommand: CRUD over the current user's payout keys.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use rewardhub_api::types::{TransferMethodCreate, TransferMethodKind, TransferMethodUpdate};
use rewardhub_api::{Client, ListQuery};

use crate::output::{print_json, print_transfer_methods_table, OutputFormat};

#[derive(Args)]
pub struct TransferMethodsArgs {
    #[command(subcommand)]
    pub action: TransferMethodAction,
}

#[derive(Subcommand)]
pub enum TransferMethodAction {
    /// List payout keys
    List {
        #[arg(long, default_value_t = 0)]
        skip: i64,
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },
    /// Show one payout key
    Get { id: String },
    /// Register a payout key
    Create {
        /// Key type: cpf, cnpj, email, phone, random
        #[arg(long)]
        key_type: String,
        #[arg(long)]
        key_value: String,
        /// Mark as the default payout key
        #[arg(long)]
        default: bool,
    },
    /// Update a payout key; unset flags are left untouched
    Update {
        id: String,
        /// Key type: cpf, cnpj, email, phone, random
        #[arg(long)]
        key_type: Option<String>,
        #[arg(long)]
        key_value: Option<String>,
        #[arg(long)]
        default: Option<bool>,
    },
    /// Remove a payout key
    Delete { id: String },
}

fn parse_kind(input: &str) -> Result<TransferMethodKind> {
    Ok(match input.to_lowercase().as_str() {
        "cpf" => TransferMethodKind::Cpf,
        "cnpj" => TransferMethodKind::Cnpj,
        "email" => TransferMethodKind::Email,
        "phone" => TransferMethodKind::Phone,
        "random" => TransferMethodKind::Random,
        other => bail!("unknown key type '{}' (expected cpf, cnpj, email, phone, or random)", other),
    })
}

pub async fn run(args: &TransferMethodsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        TransferMethodAction::List { skip, limit } => {
            let query = ListQuery::default().with_skip(*skip).with_limit(*limit);
            let page = client.list_transfer_methods(&query).await?;
            match format {
                OutputFormat::Json => print_json(&page),
                OutputFormat::Table => {
                    print_transfer_methods_table(&page.items);
                    println!("{} of {} payout keys", page.items.len(), page.total);
                }
            }
        }
        TransferMethodAction::Get { id } => {
            let method = client.get_transfer_method(id).await?;
            print_json(&method);
        }
        TransferMethodAction::Create {
            key_type,
            key_value,
            default,
        } => {
            let payload = TransferMethodCreate {
                key_type: parse_kind(key_type)?,
                key_value: key_value.clone(),
                is_default: default.then_some(true),
            };
            let method = client.create_transfer_method(&payload).await?;
            print_json(&method);
        }
        TransferMethodAction::Update {
            id,
            key_type,
            key_value,
            default,
        } => {
            let payload = TransferMethodUpdate {
                key_type: key_type.as_deref().map(parse_kind).transpose()?,
                key_value: key_value.clone(),
                is_default: *default,
            };
            let method = client.update_transfer_method(id, &payload).await?;
            print_json(&method);
        }
        TransferMethodAction::Delete { id } => {
            client.delete_transfer_method(id).await?;
            println!("Deleted payout key {}", id);
        }
    }
    Ok(())
}
