//! The `dexes` subcommand.

use anyhow::Result;
use clap::Args;
use dexpaprika_api::{Client, DexesQuery, Paginated};

use super::parse_sort;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct DexesArgs {
    /// Network ID (e.g. ethereum, solana)
    #[arg(long)]
    pub network: String,

    /// Page number (starts at 0)
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "10")]
    pub limit: u32,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "desc")]
    pub sort: String,
}

pub async fn run(args: &DexesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = DexesQuery::default()
        .with_page(args.page)
        .with_limit(args.limit)
        .with_sort_direction(parse_sort(&args.sort)?);

    let dexes = client.get_network_dexes(&args.network, &query).await?;
    print_value(&dexes, format)
}
