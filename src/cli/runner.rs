//! CLI runner - executes commands

use crate::auth::{is_valid_api_key, INVALID_API_KEY_MESSAGE};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::services::{
    BlockHeightsOptions, Erc20TransfersOptions, TokenPricesOptions, TransactionOptions,
};
use crate::stream::RecordStream;
use anyhow::{bail, Context, Result};
use futures::StreamExt;
use serde::Serialize;
use serde_json::json;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::ValidateKey => self.validate_key(),
            Commands::Chains => self.chains().await,
            Commands::Transfers {
                chain,
                address,
                contract,
                quote,
                page_size,
                limit,
            } => {
                let client = self.client()?;
                let opts = Erc20TransfersOptions {
                    quote_currency: *quote,
                    contract_address: contract.clone(),
                    page_size: *page_size,
                    ..Default::default()
                };
                let stream = client.balances().erc20_transfers(chain, address, &opts);
                self.drain(stream, *limit).await
            }
            Commands::Transactions {
                chain,
                address,
                quote,
                no_logs,
                limit,
            } => {
                let client = self.client()?;
                let opts = TransactionOptions {
                    quote_currency: *quote,
                    no_logs: no_logs.then_some(true),
                    ..Default::default()
                };
                let stream = client
                    .transactions()
                    .all_transactions_for_address(chain, address, &opts);
                self.drain(stream, *limit).await
            }
            Commands::BlockHeights {
                chain,
                start,
                end,
                page_size,
                limit,
            } => {
                let client = self.client()?;
                let opts = BlockHeightsOptions {
                    page_size: *page_size,
                    page_number: None,
                };
                let stream = client.base().block_heights(chain, start, end, &opts);
                self.drain(stream, *limit).await
            }
            Commands::Prices {
                chain,
                contract,
                quote,
                from,
                to,
            } => {
                let client = self.client()?;
                let opts = TokenPricesOptions {
                    from: *from,
                    to: *to,
                    prices_at_asc: None,
                };
                let prices = client
                    .pricing()
                    .token_prices(chain, *quote, contract, &opts)
                    .await
                    .with_context(|| format!("Failed to fetch prices for {contract}"))?;
                for entry in &prices {
                    self.output(entry)?;
                }
                Ok(())
            }
        }
    }

    /// Assemble the client configuration from the settings file and flags.
    ///
    /// Flags win over the file.
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => {
                let Some(key) = &self.cli.api_key else {
                    bail!("No API key: pass --api-key or set BLOCKDATA_API_KEY");
                };
                ClientConfig::new(key.clone())
            }
        };

        if let Some(key) = &self.cli.api_key {
            config.api_key = key.clone();
        }
        if let Some(base_url) = &self.cli.base_url {
            config.base_url = base_url.clone();
        }
        if self.cli.debug {
            config.debug = true;
        }
        if config.api_key.is_empty() {
            bail!("No API key: pass --api-key, set BLOCKDATA_API_KEY, or add api_key to the config file");
        }
        Ok(config)
    }

    fn client(&self) -> Result<Client> {
        let config = self.load_config()?;
        Client::new(config).context("Invalid client configuration")
    }

    fn validate_key(&self) -> Result<()> {
        let config = self.load_config()?;
        let valid = is_valid_api_key(&config.api_key);
        self.output(&json!({ "valid": valid }))?;
        if !valid {
            bail!(INVALID_API_KEY_MESSAGE);
        }
        Ok(())
    }

    async fn chains(&self) -> Result<()> {
        let client = self.client()?;
        let chains = client
            .base()
            .all_chains()
            .await
            .context("Failed to list chains")?;
        for chain in &chains.items {
            self.output(chain)?;
        }
        Ok(())
    }

    /// Print records until the stream ends or `limit` is reached
    async fn drain<T>(&self, mut stream: RecordStream<T>, limit: Option<usize>) -> Result<()>
    where
        T: Serialize + Send + 'static,
    {
        let mut count = 0usize;
        loop {
            if limit.is_some_and(|max| count >= max) {
                stream.cancel();
                break;
            }
            let Some(record) = stream.next().await else {
                break;
            };
            let item = record.with_context(|| format!("Stream failed after {count} records"))?;
            self.output(&item)?;
            count += 1;
        }
        info!("Emitted {} records", count);
        Ok(())
    }

    /// Output a record
    fn output<T: Serialize>(&self, record: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(record)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(record)?,
        };
        println!("{line}");
        Ok(())
    }
}
