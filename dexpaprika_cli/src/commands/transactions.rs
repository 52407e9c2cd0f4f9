//! The `transactions` subcommand.

use anyhow::Result;
use clap::Args;
use dexpaprika_api::{Client, Paginated, TransactionsQuery};

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct TransactionsArgs {
    /// Network ID
    #[arg(long)]
    pub network: String,

    /// Pool address
    #[arg(long)]
    pub address: String,

    /// Page number (starts at 0)
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "10")]
    pub limit: u32,

    /// Continue from a cursor returned by a previous call
    #[arg(long)]
    pub cursor: Option<String>,
}

pub async fn run(args: &TransactionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = TransactionsQuery::default()
        .with_page(args.page)
        .with_limit(args.limit);
    if let Some(cursor) = &args.cursor {
        query = query.with_cursor(cursor);
    }

    let transactions = client
        .get_pool_transactions(&args.network, &args.address, &query)
        .await?;
    print_value(&transactions, format)
}
