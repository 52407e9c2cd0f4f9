//! The `networks` subcommand.

use anyhow::Result;
use dexpaprika_api::Client;

use crate::output::{print_value, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let networks = client.get_networks().await?;
    print_value(&networks, format)
}
