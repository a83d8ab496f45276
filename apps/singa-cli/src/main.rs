//! # Singa CLI
//!
//! Command-line front end for Singa Sales.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  singa orders ...     ──┐                                               │
//! │  singa schedules ...  ──┼──► commands ──► singa-api ──► HTTP backend    │
//! │                         │        │                                      │
//! │                         │        └──────► singa-core (totals, docs)     │
//! │  env + flags ───────────┘                                               │
//! │  (AppConfig)                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Output goes to stdout; logs go to stderr.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use singa_api::Backend;

use crate::commands::orders::OrdersCommand;
use crate::commands::schedules::SchedulesCommand;
use crate::commands::Context;
use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "singa")]
#[command(about = "Sales orders and delivery schedules for PT Singa Perkasa", long_about = None)]
struct Cli {
    /// Backend base URL (overrides SINGA_API_BASE_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sales orders
    #[command(subcommand)]
    Orders(OrdersCommand),

    /// Delivery schedules (jadwal kirim)
    #[command(subcommand)]
    Schedules(SchedulesCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url.trim().trim_end_matches('/').to_string();
    }
    debug!(base_url = %config.api.base_url, "Configuration loaded");

    let ctx = Context {
        backend: Backend::connect(&config.api)?,
        settings: config.documents,
    };

    match cli.command {
        Commands::Orders(command) => commands::orders::run(command, &ctx).await,
        Commands::Schedules(command) => commands::schedules::run(command, &ctx).await,
    }
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=singa_api=trace` - Trace the API client only
/// - Default: INFO, DEBUG for the singa crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,singa=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_schedule_create() {
        let cli = Cli::try_parse_from([
            "singa", "schedules", "create", "--order", "SO-001", "--date", "2024-03-10",
        ])
        .unwrap();

        match cli.command {
            Commands::Schedules(SchedulesCommand::Create { so_number, date }) => {
                assert_eq!(so_number, "SO-001");
                assert_eq!(date, "2024-03-10");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parses_export_flags() {
        let cli = Cli::try_parse_from([
            "singa", "orders", "export", "SO-001", "--lang", "id", "--text",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Orders(OrdersCommand::Export {
                lang: Some(singa_core::Language::Indonesian),
                text: true,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_date_filter() {
        assert!(Cli::try_parse_from(["singa", "orders", "list", "--date", "kemarin"]).is_err());
    }
}
