// Copyright (c) 2022 Kava Plugin Contributors
//! Kava journal CLI: classify a transaction record or print its CAAJ journal
#![warn(unused_crate_dependencies)]

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use kava_models::{KavaTransaction, TokenOriginalIdTable};
use kava_plugin::{from_canonical, KavaPlugin};
use serde::Serialize;
use serde_json::Value;
use settings::{build_client_settings, Settings};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

mod settings;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
    /// Raise the log level, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Token table file, overrides the configured one
    #[arg(short, long)]
    token_table: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical action results of a transaction
    Classify {
        /// transaction record (JSON)
        #[arg(long)]
        transaction: PathBuf,
    },
    /// Print the journal of a transaction as seen from an address
    Journal {
        /// account the journal is built for
        #[arg(long)]
        address: String,
        /// transaction record (JSON)
        #[arg(long)]
        transaction: PathBuf,
        /// canonical results printed by `classify`, used instead of classifying again
        #[arg(long)]
        results: Option<PathBuf>,
    },
}

fn level_filter(level: usize) -> LevelFilter {
    match level {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn load_transaction(path: &Path) -> Result<KavaTransaction> {
    let raw = read_json(path)?;
    KavaTransaction::new(raw)
        .with_context(|| format!("{} is not a transaction record", path.display()))
}

fn load_token_table(path: Option<&Path>) -> Result<TokenOriginalIdTable> {
    let path = match path {
        Some(path) => path,
        None => return Ok(TokenOriginalIdTable::new()),
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let table = TokenOriginalIdTable::from_json_str(&text)
        .with_context(|| format!("{} is not a token table", path.display()))?;
    debug!(
        "loaded {} token table rows from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

fn print<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

fn run(args: Args, settings: &Settings) -> Result<()> {
    let plugin = KavaPlugin::default();
    match args.command {
        Command::Classify { transaction } => {
            let transaction = load_transaction(&transaction)?;
            if !plugin.can_handle(&transaction) {
                bail!("chain {} is not handled", transaction.get_chain_id());
            }
            let results = plugin.classify(&transaction)?;
            info!(
                "transaction {}: {} actions",
                transaction.get_transaction_id(),
                results.len()
            );
            print(&results, settings.output.pretty)
        }
        Command::Journal {
            address,
            transaction,
            results,
        } => {
            let transaction = load_transaction(&transaction)?;
            if !plugin.can_handle(&transaction) {
                bail!("chain {} is not handled", transaction.get_chain_id());
            }
            let table_path = args
                .token_table
                .as_deref()
                .or(settings.token_table.path.as_deref());
            let table = load_token_table(table_path)?;
            let caajs = match results {
                Some(path) => {
                    let values = match read_json(&path)? {
                        Value::Array(values) => values,
                        _ => bail!("{} must hold a list of results", path.display()),
                    };
                    let results = values
                        .iter()
                        .map(|value| from_canonical(value, transaction.get_transaction_id()))
                        .collect::<Result<Vec<_>, _>>()?;
                    plugin.get_caajs_from_results(&address, &transaction, &results, &table)?
                }
                None => plugin.get_caajs(&address, &transaction, &table)?,
            };
            info!(
                "transaction {}: {} journal entries for {}",
                transaction.get_transaction_id(),
                caajs.len(),
                address
            );
            print(&caajs, settings.output.pretty)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = build_client_settings("kava-client", "KAVA_CLIENT")?;

    let level = settings.logging.level.max(args.verbose as usize);
    let tracing_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(level_filter(level));
    tracing_subscriber::registry().with(tracing_layer).init();

    run(args, &settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_journal_arguments() {
        let args = Args::try_parse_from([
            "kava-client",
            "-vv",
            "journal",
            "--address",
            "kava1owner",
            "--transaction",
            "tx.json",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        assert!(matches!(
            args.command,
            Command::Journal { ref address, results: None, .. } if address == "kava1owner"
        ));
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(0), LevelFilter::WARN);
        assert_eq!(level_filter(7), LevelFilter::TRACE);
    }
}
