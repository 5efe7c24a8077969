//! CLI commands for reports
//!
//! Generates the income statement for the session, optionally limited to a
//! single date range, and prints it or exports it to CSV.

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::{parse_date, CliContext};
use crate::error::{LedgerError, LedgerResult};
use crate::reports::IncomeStatement;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Generate the income statement
    #[command(alias = "pnl")]
    Income {
        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(ctx: &CliContext, cmd: ReportCommands) -> LedgerResult<()> {
    match cmd {
        ReportCommands::Income { start, end, output } => {
            handle_income_statement(ctx, start, end, output)
        }
    }
}

/// Handle income statement report
fn handle_income_statement(
    ctx: &CliContext,
    start: Option<String>,
    end: Option<String>,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let start = start.as_deref().map(parse_date).transpose()?;
    let end = end.as_deref().map(parse_date).transpose()?;
    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return Err(LedgerError::Parse(format!(
                "Start date {} is after end date {}",
                s, e
            )));
        }
    }

    let ledger = ctx.storage.load_ledger()?;
    let transactions = ledger.transactions_between(start, end);
    let statement = IncomeStatement::generate(&transactions, &ctx.taxonomy);

    if !statement.has_data() {
        println!("No transactions available for Income Statement.");
        return Ok(());
    }

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        statement.export_csv(BufWriter::new(file), &ctx.settings.currency_symbol)?;
        println!("Income statement exported to: {}", path.display());
    } else {
        print!("{}", statement.format_terminal(&ctx.settings.currency_symbol));
    }

    Ok(())
}
