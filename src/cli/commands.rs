//! CLI commands and argument parsing

use crate::types::Quote;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Blockchain data API command-line client
#[derive(Parser, Debug)]
#[command(name = "blockdata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key
    #[arg(long, global = true, env = "BLOCKDATA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API root URL
    #[arg(long, global = true, env = "BLOCKDATA_BASE_URL")]
    pub base_url: Option<String>,

    /// Client settings file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every HTTP attempt with its status and latency
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the API key format without calling the API
    ValidateKey,

    /// List supported chains
    Chains,

    /// Stream ERC20 transfers of a wallet
    Transfers {
        /// Chain name, e.g. eth-mainnet
        #[arg(long)]
        chain: String,

        /// Wallet address
        #[arg(long)]
        address: String,

        /// Only transfers of this token contract
        #[arg(long)]
        contract: Option<String>,

        /// Quote currency
        #[arg(long)]
        quote: Option<Quote>,

        /// Records per page
        #[arg(long)]
        page_size: Option<u32>,

        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Stream every transaction of a wallet, newest first
    Transactions {
        /// Chain name, e.g. eth-mainnet
        #[arg(long)]
        chain: String,

        /// Wallet address
        #[arg(long)]
        address: String,

        /// Quote currency
        #[arg(long)]
        quote: Option<Quote>,

        /// Omit decoded event logs
        #[arg(long)]
        no_logs: bool,

        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Stream block heights between two dates
    BlockHeights {
        /// Chain name, e.g. eth-mainnet
        #[arg(long)]
        chain: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD) or `latest`
        #[arg(long, default_value = "latest")]
        end: String,

        /// Records per page
        #[arg(long)]
        page_size: Option<u32>,

        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Daily prices of a token contract
    Prices {
        /// Chain name, e.g. eth-mainnet
        #[arg(long)]
        chain: String,

        /// Token contract address (comma-separated for several)
        #[arg(long)]
        contract: String,

        /// Quote currency
        #[arg(long, default_value = "USD")]
        quote: Quote,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_transfers() {
        let cli = Cli::try_parse_from([
            "blockdata",
            "--api-key",
            "ckey_x",
            "transfers",
            "--chain",
            "eth-mainnet",
            "--address",
            "0xabc",
            "--quote",
            "eur",
            "--limit",
            "10",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("ckey_x"));
        match cli.command {
            Commands::Transfers {
                chain,
                quote,
                limit,
                ..
            } => {
                assert_eq!(chain, "eth-mainnet");
                assert_eq!(quote, Some(Quote::Eur));
                assert_eq!(limit, Some(10));
            }
            other => panic!("Expected Transfers, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_prices_dates() {
        let cli = Cli::try_parse_from([
            "blockdata",
            "prices",
            "--chain",
            "eth-mainnet",
            "--contract",
            "0xtoken",
            "--from",
            "2024-02-01",
        ])
        .unwrap();

        match cli.command {
            Commands::Prices {
                quote, from, to, ..
            } => {
                assert_eq!(quote, Quote::Usd);
                assert_eq!(from, NaiveDate::from_ymd_opt(2024, 2, 1));
                assert!(to.is_none());
            }
            other => panic!("Expected Prices, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_quote() {
        let result = Cli::try_parse_from([
            "blockdata",
            "prices",
            "--chain",
            "eth-mainnet",
            "--contract",
            "0xtoken",
            "--quote",
            "XXX",
        ]);
        assert!(result.is_err());
    }
}
