//! The `token` and `token-pools` subcommands.

use anyhow::Result;
use clap::Args;
use dexpaprika_api::{Client, TokenPoolsQuery};

use super::ListingArgs;
use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct TokenArgs {
    /// Network ID
    #[arg(long)]
    pub network: String,

    /// Token address
    #[arg(long)]
    pub address: String,
}

pub async fn run_details(args: &TokenArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let token = client
        .get_token_details(&args.network, &args.address)
        .await?;
    print_value(&token, format)
}

#[derive(Args)]
pub struct TokenPoolsArgs {
    /// Network ID
    #[arg(long)]
    pub network: String,

    /// Token address
    #[arg(long)]
    pub address: String,

    /// Only pools that also contain this token address
    #[arg(long)]
    pub with_token: Option<String>,

    #[command(flatten)]
    pub listing: ListingArgs,
}

pub async fn run_pools(
    args: &TokenPoolsArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let mut query = TokenPoolsQuery {
        pools: args.listing.to_query()?,
        address: None,
    };
    if let Some(other) = &args.with_token {
        query = query.with_address(other);
    }

    let pools = client
        .get_token_pools(&args.network, &args.address, &query)
        .await?;
    print_value(&pools, format)
}
