//! The `categories` subcommand: public category search. Works anonymously.

use anyhow::Result;
use clap::Args;
use rewardhub_api::{CategoryQuery, Client};

use crate::output::{print_categories_table, print_json, OutputFormat};

#[derive(Args)]
pub struct CategoriesArgs {
    /// Free-text search over category names
    #[arg(long)]
    pub q: Option<String>,

    /// Page number (1-indexed)
    #[arg(long, default_value_t = 1)]
    pub page: i64,

    /// Results per page
    #[arg(long)]
    pub size: Option<i64>,
}

pub async fn run(args: &CategoriesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = CategoryQuery::default().with_page(args.page);
    if let Some(size) = args.size {
        query = query.with_size(size);
    }
    if let Some(ref q) = args.q {
        query = query.with_search(q);
    }

    let page = client.search_categories(&query).await?;
    match format {
        OutputFormat::Json => print_json(&page),
        OutputFormat::Table => {
            print_categories_table(&page.items);
            println!("page {} of {} categories", page.page, page.total);
        }
    }
    Ok(())
}
