//! CLI commands for data export
//!
//! Writes the session tables to CSV, or the full session to JSON or YAML.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::CliContext;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json, yaml};

/// Full export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full session)
    Json,
    /// YAML format (full session, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the full session to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export transactions to CSV
    Transactions {
        /// Output file path
        output: PathBuf,
    },

    /// Export the general journal to CSV
    Journal {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(ctx: &CliContext, cmd: ExportCommands) -> LedgerResult<()> {
    let ledger = ctx.storage.load_ledger()?;
    let symbol = &ctx.settings.currency_symbol;

    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Json => {
                    json::export_full_json(&ledger, &ctx.taxonomy, &mut writer, pretty)?
                }
                ExportFormat::Yaml => yaml::export_full_yaml(&ledger, &ctx.taxonomy, &mut writer)?,
            }
            println!("Full session exported to: {}", output.display());
        }
        ExportCommands::Transactions { output } => {
            csv::export_transactions_csv(&ledger, create_output(&output)?, symbol)?;
            println!(
                "Exported {} transactions to: {}",
                ledger.transaction_count(),
                output.display()
            );
        }
        ExportCommands::Journal { output } => {
            csv::export_journal_csv(&ledger, create_output(&output)?, symbol)?;
            println!(
                "Exported {} journal lines to: {}",
                ledger.journal_line_count(),
                output.display()
            );
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
