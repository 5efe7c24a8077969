//! CSV table export and import
//!
//! Writes the transaction table and the general journal as CSV with the
//! same column layout the ledger shows, and reads those tables back. Columns
//! are matched by position so a different currency symbol in the amount
//! headings does not matter.

use std::io::{Read, Write};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerStore;
use crate::models::{JournalLine, Money, Taxonomy, TransactionRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(
    store: &LedgerStore,
    writer: W,
    currency_symbol: &str,
) -> LedgerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let amount_heading = format!("Amount ({})", currency_symbol);
    csv.write_record(["Date", "Category", "Details", amount_heading.as_str()])
        .map_err(export_error)?;

    for txn in store.transactions() {
        csv.write_record([
            txn.date.format(DATE_FORMAT).to_string(),
            txn.category.to_string(),
            txn.details.clone(),
            txn.amount.to_string(),
        ])
        .map_err(export_error)?;
    }

    csv.flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Export the general journal to CSV
pub fn export_journal_csv<W: Write>(
    store: &LedgerStore,
    writer: W,
    currency_symbol: &str,
) -> LedgerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let debit_heading = format!("Debit ({})", currency_symbol);
    let credit_heading = format!("Credit ({})", currency_symbol);
    csv.write_record([
        "Date",
        "Account Name",
        "Account Type",
        debit_heading.as_str(),
        credit_heading.as_str(),
    ])
    .map_err(export_error)?;

    for line in store.journal_lines() {
        csv.write_record([
            line.date.format(DATE_FORMAT).to_string(),
            line.account_name.clone(),
            line.account_type.to_string(),
            line.debit.to_string(),
            line.credit.to_string(),
        ])
        .map_err(export_error)?;
    }

    csv.flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Read a transaction table written by [`export_transactions_csv`]
///
/// Categories are resolved against the taxonomy. Amounts are parsed but not
/// validated here; the ledger decides whether to accept them.
pub fn import_transactions_csv<R: Read>(
    reader: R,
    taxonomy: &Taxonomy,
) -> LedgerResult<Vec<TransactionRecord>> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv.records().enumerate() {
        let row = row.map_err(import_error)?;
        let line = index + 2;

        if row.len() < 4 {
            return Err(LedgerError::Import(format!(
                "Line {}: expected 4 columns, found {}",
                line,
                row.len()
            )));
        }

        let date = parse_date(&row[0], line)?;
        let category = taxonomy
            .resolve(&row[1])
            .ok_or_else(|| LedgerError::category_not_found(&row[1]))?;
        let amount = parse_amount(&row[3], line)?;

        records.push(TransactionRecord::new(date, category, &row[2], amount));
    }

    tracing::debug!(count = records.len(), "transactions read from CSV");
    Ok(records)
}

/// Read a general journal written by [`export_journal_csv`]
pub fn import_journal_csv<R: Read>(
    reader: R,
    taxonomy: &Taxonomy,
) -> LedgerResult<Vec<JournalLine>> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut lines = Vec::new();

    for (index, row) in csv.records().enumerate() {
        let row = row.map_err(import_error)?;
        let line = index + 2;

        if row.len() < 5 {
            return Err(LedgerError::Import(format!(
                "Line {}: expected 5 columns, found {}",
                line,
                row.len()
            )));
        }

        lines.push(JournalLine {
            date: parse_date(&row[0], line)?,
            account_name: row[1].to_string(),
            account_type: taxonomy
                .resolve(&row[2])
                .ok_or_else(|| LedgerError::category_not_found(&row[2]))?,
            debit: parse_amount(&row[3], line)?,
            credit: parse_amount(&row[4], line)?,
        });
    }

    tracing::debug!(count = lines.len(), "journal lines read from CSV");
    Ok(lines)
}

fn parse_date(value: &str, line: usize) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        LedgerError::Import(format!(
            "Line {}: invalid date '{}', expected YYYY-MM-DD",
            line, value
        ))
    })
}

fn parse_amount(value: &str, line: usize) -> LedgerResult<Money> {
    if value.is_empty() {
        return Ok(Money::zero());
    }
    Money::parse(value).map_err(|e| LedgerError::Import(format!("Line {}: {}", line, e)))
}

fn export_error(err: csv::Error) -> LedgerError {
    LedgerError::Export(err.to_string())
}

fn import_error(err: csv::Error) -> LedgerError {
    LedgerError::Import(err.to_string())
}
