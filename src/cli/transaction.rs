//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing transactions.

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_date_or_today, CliContext};
use crate::display::format_transaction_table;
use crate::error::LedgerResult;
use crate::models::TransactionRecord;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (must be greater than zero, e.g., "1000" or "99.50")
        amount: String,
        /// Category label (see `ledger category list`)
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Transaction details
        #[arg(long, default_value = "")]
        details: String,
    },
    /// List recorded transactions
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
}

/// Handle transaction commands
pub fn handle_transaction_command(ctx: &CliContext, cmd: TransactionCommands) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            date,
            details,
        } => {
            let record = TransactionRecord::new(
                parse_date_or_today(date.as_deref())?,
                ctx.category(&category)?,
                details,
                parse_amount(&amount)?,
            );

            let mut ledger = ctx.storage.load_ledger()?;
            ledger.add_transaction(record.clone())?;
            ctx.storage.save_ledger(&ledger)?;

            println!(
                "Transaction added: {} {} on {}",
                record.category,
                record.amount.format_with_symbol(&ctx.settings.currency_symbol),
                record.date.format(&ctx.settings.date_format)
            );
        }
        TransactionCommands::List { from, to } => {
            let start = from.as_deref().map(parse_date).transpose()?;
            let end = to.as_deref().map(parse_date).transpose()?;

            let ledger = ctx.storage.load_ledger()?;
            let transactions = ledger.transactions_between(start, end);
            print!(
                "{}",
                format_transaction_table(
                    &transactions,
                    &ctx.settings.currency_symbol,
                    &ctx.settings.date_format
                )
            );
        }
    }

    Ok(())
}
