//! Ledger table display
//!
//! Renders the transaction table and the general journal as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{JournalLine, TransactionRecord};

const DETAILS_WIDTH: usize = 40;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Details")]
    details: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct JournalRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Account Name")]
    account_name: String,
    #[tabled(rename = "Account Type")]
    account_type: String,
    #[tabled(rename = "Debit")]
    debit: String,
    #[tabled(rename = "Credit")]
    credit: String,
}

/// Format the transaction table
pub fn format_transaction_table(
    transactions: &[TransactionRecord],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let rows = transactions.iter().map(|t| TransactionRow {
        date: t.date.format(date_format).to_string(),
        category: t.category.to_string(),
        details: truncate(&t.details, DETAILS_WIDTH),
        amount: t.amount.format_with_symbol(currency_symbol),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output.push_str(&format!("{} transaction(s)\n", transactions.len()));
    output
}

/// Format the general journal table
pub fn format_journal_table(
    lines: &[JournalLine],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if lines.is_empty() {
        return "No journal entries recorded.\n".to_string();
    }

    let rows = lines.iter().map(|line| JournalRow {
        date: line.date.format(date_format).to_string(),
        account_name: line.account_name.clone(),
        account_type: line.account_type.to_string(),
        debit: line.debit.format_with_symbol(currency_symbol),
        credit: line.credit.format_with_symbol(currency_symbol),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output.push_str(&format!("{} entr(ies)\n", lines.len() / 2));
    output
}
