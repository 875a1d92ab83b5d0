//! The `addresses` subcommand: CRUD over the current user's addresses.

use anyhow::Result;
use clap::{Args, Subcommand};
use rewardhub_api::types::{AddressCreate, AddressUpdate};
use rewardhub_api::{Client, ListQuery};

use crate::output::{print_addresses_table, print_json, OutputFormat};

#[derive(Args)]
pub struct AddressesArgs {
    #[command(subcommand)]
    pub action: AddressAction,
}

#[derive(Subcommand)]
pub enum AddressAction {
    /// List addresses
    List {
        /// Record offset
        #[arg(long, default_value_t = 0)]
        skip: i64,
        /// Page size
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },
    /// Show one address
    Get { id: String },
    /// Create an address
    Create {
        #[arg(long)]
        street: String,
        #[arg(long)]
        number: String,
        #[arg(long)]
        complement: Option<String>,
        #[arg(long)]
        district: String,
        #[arg(long)]
        city: String,
        /// Two-letter state code
        #[arg(long)]
        state: String,
        #[arg(long)]
        zip_code: String,
        #[arg(long, default_value = "BR")]
        country: String,
        /// Mark as the selected address
        #[arg(long)]
        selected: bool,
    },
    /// Update fields of an address; unset flags are left untouched
    Update {
        id: String,
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        complement: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        zip_code: Option<String>,
        #[arg(long)]
        country: Option<String>,
        /// Select or deselect this address
        #[arg(long)]
        selected: Option<bool>,
    },
    /// Delete an address
    Delete { id: String },
}

pub async fn run(args: &AddressesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.action {
        AddressAction::List { skip, limit } => {
            let query = ListQuery::default().with_skip(*skip).with_limit(*limit);
            let page = client.list_addresses(&query).await?;
            match format {
                OutputFormat::Json => print_json(&page),
                OutputFormat::Table => {
                    print_addresses_table(&page.items);
                    println!("{} of {} addresses", page.items.len(), page.total);
                }
            }
        }
        AddressAction::Get { id } => {
            let address = client.get_address(id).await?;
            print_json(&address);
        }
        AddressAction::Create {
            street,
            number,
            complement,
            district,
            city,
            state,
            zip_code,
            country,
            selected,
        } => {
            let payload = AddressCreate {
                street: street.clone(),
                number: number.clone(),
                complement: complement.clone(),
                district: district.clone(),
                city: city.clone(),
                state: state.clone(),
                zip_code: zip_code.clone(),
                country: country.clone(),
                is_selected: selected.then_some(true),
            };
            let address = client.create_address(&payload).await?;
            print_json(&address);
        }
        AddressAction::Update {
            id,
            street,
            number,
            complement,
            district,
            city,
            state,
            zip_code,
            country,
            selected,
        } => {
            let payload = AddressUpdate {
                street: street.clone(),
                number: number.clone(),
                complement: complement.clone(),
                district: district.clone(),
                city: city.clone(),
                state: state.clone(),
                zip_code: zip_code.clone(),
                country: country.clone(),
                is_selected: *selected,
            };
            let address = client.update_address(id, &payload).await?;
            print_json(&address);
        }
        AddressAction::Delete { id } => {
            client.delete_address(id).await?;
            println!("Deleted address {}", id);
        }
    }
    Ok(())
}
