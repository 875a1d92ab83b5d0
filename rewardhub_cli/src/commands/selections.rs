//! The `selections` subcommand: the user's saved-product list.

use anyhow::Result;
use clap::{Args, Subcommand};
use rewardhub_api::types::SelectionCreate;
use rewardhub_api::{Client, ListQuery};

use crate::output::{print_json, print_selections_table, OutputFormat};

#[derive(Args)]
pub struct SelectionsArgs {
    #[command(subcommand)]
    pub action: SelectionAction,
}

#[derive(Subcommand)]
pub enum SelectionAction {
    /// List saved products
    List {
        #[arg(long, default_value_t = 0)]
        skip: i64,
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },
    /// Save a product
    Add {
        #[arg(long)]
        product_id: String,
    },
    /// Remove a saved product
    Remove { id: String },
}

pub async fn run(args: &SelectionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        SelectionAction::List { skip, limit } => {
            let query = ListQuery::default().with_skip(*skip).with_limit(*limit);
            let page = client.list_selections(&query).await?;
            match format {
                OutputFormat::Json => print_json(&page),
                OutputFormat::Table => {
                    print_selections_table(&page.items);
                    println!("{} of {} saved products", page.items.len(), page.total);
                }
            }
        }
        SelectionAction::Add { product_id } => {
            let payload = SelectionCreate {
                product_id: product_id.clone(),
            };
            let selection = client.create_selection(&payload).await?;
            print_json(&selection);
        }
        SelectionAction::Remove { id } => {
            client.delete_selection(id).await?;
            println!("Removed selection {}", id);
        }
    }
    Ok(())
}
