//! The `pools` and `pool` subcommands.

use anyhow::Result;
use clap::Args;
use dexpaprika_api::Client;

use super::ListingArgs;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct PoolsArgs {
    /// Only pools on this network (e.g. ethereum, solana)
    #[arg(long)]
    pub network: Option<String>,

    /// Only pools on this DEX (requires --network)
    #[arg(long, requires = "network")]
    pub dex: Option<String>,

    #[command(flatten)]
    pub listing: ListingArgs,
}

pub async fn run(args: &PoolsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = args.listing.to_query()?;

    let pools = match (&args.network, &args.dex) {
        (Some(network), Some(dex)) => client.get_dex_pools(network, dex, &query).await?,
        (Some(network), None) => client.get_network_pools(network, &query).await?,
        _ => client.get_top_pools(&query).await?,
    };

    print_value(&pools, format)
}

#[derive(Args)]
pub struct PoolArgs {
    /// Network ID
    #[arg(long)]
    pub network: String,

    /// Pool address
    #[arg(long)]
    pub address: String,

    /// Flip the quote/base price ratio
    #[arg(long)]
    pub inversed: bool,
}

pub async fn run_details(args: &PoolArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let pool = client
        .get_pool_details(&args.network, &args.address, args.inversed)
        .await?;
    print_value(&pool, format)
}
