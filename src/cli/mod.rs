//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `validate-key` - Check the API key format locally
//! - `chains` - List supported chains
//! - `transfers` - Stream ERC20 transfers of a wallet
//! - `transactions` - Stream every transaction of a wallet
//! - `block-heights` - Stream block heights between two dates
//! - `prices` - Daily token prices

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
