//! CLI commands for data import
//!
//! Appends previously exported tables to the current session. A file is
//! taken whole or not at all: one invalid row rejects the import.

use clap::Subcommand;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::CliContext;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json, yaml};

/// Import subcommands
#[derive(Subcommand, Debug)]
pub enum ImportCommands {
    /// Append transactions from a CSV table
    Transactions {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Append journal lines from a CSV table
    Journal {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Append both tables from a full JSON or YAML export
    All {
        /// Path to .json, .yaml or .yml file
        file: PathBuf,
    },
}

/// Handle import commands
pub fn handle_import_command(ctx: &CliContext, cmd: ImportCommands) -> LedgerResult<()> {
    let mut ledger = ctx.storage.load_ledger()?;

    match cmd {
        ImportCommands::Transactions { file } => {
            let records = csv::import_transactions_csv(open_input(&file)?, &ctx.taxonomy)?;
            let count = ledger.extend_transactions(records)?;
            ctx.storage.save_ledger(&ledger)?;
            println!("Imported {} transactions from: {}", count, file.display());
        }
        ImportCommands::Journal { file } => {
            let lines = csv::import_journal_csv(open_input(&file)?, &ctx.taxonomy)?;
            let count = ledger.extend_journal(lines)?;
            ctx.storage.save_ledger(&ledger)?;
            println!("Imported {} journal lines from: {}", count, file.display());
        }
        ImportCommands::All { file } => {
            let contents = std::fs::read_to_string(&file).map_err(|e| {
                LedgerError::Import(format!("Failed to read {}: {}", file.display(), e))
            })?;

            let export = match file.extension().and_then(|ext| ext.to_str()) {
                Some("yaml") | Some("yml") => yaml::import_from_yaml(&contents)?,
                _ => json::import_from_json(&contents)?,
            };

            // Resolve and validate everything before touching the session
            let imported = export.into_store(&ctx.taxonomy)?;

            ledger.extend_transactions(imported.transactions().to_vec())?;
            ledger.extend_journal(imported.journal_lines().to_vec())?;
            ctx.storage.save_ledger(&ledger)?;

            println!(
                "Imported {} transactions and {} journal lines from: {}",
                imported.transaction_count(),
                imported.journal_line_count(),
                file.display()
            );
        }
    }

    Ok(())
}

fn open_input(path: &Path) -> LedgerResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        LedgerError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}
