mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dexpaprika_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "dexpaprika")]
#[command(about = "Query DEX networks, pools, tokens and candles from DexPaprika")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (falls back to DEXPAPRIKA_BASE_URL, then the public API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported blockchain networks
    Networks,
    /// List DEXes on a network
    Dexes(commands::dexes::DexesArgs),
    /// List top pools, globally or for a network or DEX
    Pools(commands::pools::PoolsArgs),
    /// Show a single pool
    Pool(commands::pools::PoolArgs),
    /// Show a single token
    Token(commands::tokens::TokenArgs),
    /// List pools containing a token
    TokenPools(commands::tokens::TokenPoolsArgs),
    /// Show OHLCV candles for a pool
    Ohlcv(commands::ohlcv::OhlcvArgs),
    /// List recent transactions of a pool
    Transactions(commands::transactions::TransactionsArgs),
    /// Search tokens, pools and DEXes
    Search(commands::search::SearchArgs),
}

impl Cli {
    fn client(&self) -> Client {
        let client = match self
            .base_url
            .clone()
            .or_else(|| std::env::var("DEXPAPRIKA_BASE_URL").ok())
        {
            Some(url) => Client::with_base_url(&url),
            None => Client::new(),
        };
        match self.timeout_secs {
            Some(secs) => client.with_timeout(Duration::from_secs(secs)),
            None => client,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dexpaprika=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);
    let client = cli.client();
    tracing::debug!("Using DexPaprika API at {}", client.base_url());

    match &cli.command {
        Commands::Networks => commands::networks::run(&client, &format).await?,
        Commands::Dexes(args) => commands::dexes::run(args, &client, &format).await?,
        Commands::Pools(args) => commands::pools::run(args, &client, &format).await?,
        Commands::Pool(args) => commands::pools::run_details(args, &client, &format).await?,
        Commands::Token(args) => commands::tokens::run_details(args, &client, &format).await?,
        Commands::TokenPools(args) => commands::tokens::run_pools(args, &client, &format).await?,
        Commands::Ohlcv(args) => commands::ohlcv::run(args, &client, &format).await?,
        Commands::Transactions(args) => {
            commands::transactions::run(args, &client, &format).await?
        }
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dex_requires_network() {
        assert!(Cli::try_parse_from(["dexpaprika", "pools", "--dex", "raydium"]).is_err());
        let cli =
            Cli::try_parse_from(["dexpaprika", "pools", "--network", "solana", "--dex", "raydium"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Pools(_)));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "dexpaprika",
            "networks",
            "--output",
            "json",
            "--base-url",
            "http://localhost:9000",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.output, "json");
        assert_eq!(cli.client().base_url(), "http://localhost:9000");
    }

    #[test]
    fn search_joins_words() {
        let cli = Cli::try_parse_from(["dexpaprika", "search", "wrapped", "ether"]).unwrap();
        match cli.command {
            Commands::Search(args) => assert_eq!(args.text(), "wrapped ether"),
            _ => panic!("expected search"),
        }
    }
}
