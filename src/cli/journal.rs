//! General journal CLI commands
//!
//! Implements CLI commands for double-entry journal entries.

use clap::Subcommand;

use super::{parse_amount, parse_date_or_today, CliContext};
use crate::display::format_journal_table;
use crate::error::LedgerResult;
use crate::models::{JournalEntry, JournalSide};

/// Journal subcommands
#[derive(Subcommand, Debug)]
pub enum JournalCommands {
    /// Record a debit/credit pair; both amounts must be equal and positive
    Add {
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Debit account name (e.g., Cash, Accounts Receivable)
        #[arg(long)]
        debit_account: String,
        /// Debit account type (category label)
        #[arg(long)]
        debit_type: String,
        /// Debit amount
        #[arg(long)]
        debit_amount: String,
        /// Credit account name (e.g., Sales, Accounts Payable)
        #[arg(long)]
        credit_account: String,
        /// Credit account type (category label)
        #[arg(long)]
        credit_type: String,
        /// Credit amount
        #[arg(long)]
        credit_amount: String,
    },
    /// List the general journal
    List,
}

/// Handle journal commands
pub fn handle_journal_command(ctx: &CliContext, cmd: JournalCommands) -> LedgerResult<()> {
    match cmd {
        JournalCommands::Add {
            date,
            debit_account,
            debit_type,
            debit_amount,
            credit_account,
            credit_type,
            credit_amount,
        } => {
            let entry = JournalEntry::new(
                parse_date_or_today(date.as_deref())?,
                JournalSide::new(
                    debit_account,
                    ctx.category(&debit_type)?,
                    parse_amount(&debit_amount)?,
                ),
                JournalSide::new(
                    credit_account,
                    ctx.category(&credit_type)?,
                    parse_amount(&credit_amount)?,
                ),
            );

            let summary = format!(
                "Journal entry added: Dr {} / Cr {} {}",
                entry.debit.account_name,
                entry.credit.account_name,
                entry
                    .debit
                    .amount
                    .format_with_symbol(&ctx.settings.currency_symbol)
            );

            let mut ledger = ctx.storage.load_ledger()?;
            ledger.add_journal_entry(entry)?;
            ctx.storage.save_ledger(&ledger)?;

            println!("{}", summary);
        }
        JournalCommands::List => {
            let ledger = ctx.storage.load_ledger()?;
            print!(
                "{}",
                format_journal_table(
                    ledger.journal_lines(),
                    &ctx.settings.currency_symbol,
                    &ctx.settings.date_format
                )
            );
        }
    }

    Ok(())
}
