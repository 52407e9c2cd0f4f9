//! The `search` subcommand.

use anyhow::Result;
use clap::Args;
use dexpaprika_api::Client;

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Free text to search for (token, pool or DEX)
    #[arg(required = true)]
    pub query: Vec<String>,
}

impl SearchArgs {
    pub fn text(&self) -> String {
        self.query.join(" ")
    }
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let results = client.search(&args.text()).await?;
    print_value(&results, format)
}
