//! Session ledger
//!
//! [`LedgerStore`] is the append-only record of one session: transaction
//! records and general-journal lines, both kept in insertion order. It is an
//! ordinary owned value; creating one starts a session and dropping it ends
//! the session. Nothing is shared between stores.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::{JournalEntry, JournalLine, TransactionRecord};

/// Append-only store of transactions and journal lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerStore {
    transactions: Vec<TransactionRecord>,
    journal: Vec<JournalLine>,
}

impl LedgerStore {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted tables
    ///
    /// Every record goes through the same validation as live entry. Journal
    /// lines must come in debit/credit pairs.
    pub fn from_parts(
        transactions: Vec<TransactionRecord>,
        journal: Vec<JournalLine>,
    ) -> Result<Self, ValidationError> {
        let mut store = Self::new();
        store.extend_transactions(transactions)?;
        store.extend_journal(journal)?;
        Ok(store)
    }

    /// Append a transaction record
    ///
    /// Rejects amounts that are zero or negative; a rejected record leaves
    /// the ledger untouched.
    pub fn add_transaction(&mut self, record: TransactionRecord) -> Result<(), ValidationError> {
        check_transaction(&record)?;

        tracing::info!(
            date = %record.date,
            category = %record.category,
            amount = %record.amount,
            "transaction recorded"
        );
        self.transactions.push(record);
        Ok(())
    }

    /// Append both lines of a journal entry, or neither
    pub fn add_journal_entry(&mut self, entry: JournalEntry) -> Result<(), ValidationError> {
        check_journal_entry(&entry)?;

        tracing::info!(
            date = %entry.date,
            debit_account = %entry.debit.account_name,
            credit_account = %entry.credit.account_name,
            amount = %entry.debit.amount,
            "journal entry recorded"
        );
        self.journal.extend(entry.into_lines());
        Ok(())
    }

    /// Append several transactions; if any is invalid none are appended
    pub fn extend_transactions(
        &mut self,
        records: Vec<TransactionRecord>,
    ) -> Result<usize, ValidationError> {
        records.iter().try_for_each(check_transaction)?;

        let count = records.len();
        self.transactions.extend(records);
        tracing::debug!(count, "transactions appended in bulk");
        Ok(count)
    }

    /// Append journal lines given as consecutive debit/credit pairs
    ///
    /// All pairs are checked before anything is appended. Returns the number
    /// of lines added.
    pub fn extend_journal(&mut self, lines: Vec<JournalLine>) -> Result<usize, ValidationError> {
        if lines.len() % 2 != 0 {
            tracing::warn!(lines = lines.len(), "journal lines are not paired");
            return Err(ValidationError::DebitCreditMismatch);
        }

        let entries = lines
            .chunks_exact(2)
            .map(|pair| {
                JournalEntry::from_lines(&pair[0], &pair[1])
                    .ok_or(ValidationError::DebitCreditMismatch)
            })
            .collect::<Result<Vec<_>, _>>()?;
        entries.iter().try_for_each(check_journal_entry)?;

        let count = lines.len();
        self.journal.extend(lines);
        tracing::debug!(count, "journal lines appended in bulk");
        Ok(count)
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// All journal lines in insertion order
    pub fn journal_lines(&self) -> &[JournalLine] {
        &self.journal
    }

    /// Transactions dated within an inclusive range; open ends are unbounded
    pub fn transactions_between(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Vec<TransactionRecord> {
        self.transactions
            .iter()
            .filter(|t| start.map_or(true, |s| t.date >= s))
            .filter(|t| end.map_or(true, |e| t.date <= e))
            .cloned()
            .collect()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn journal_line_count(&self) -> usize {
        self.journal.len()
    }

    /// True when neither table has any rows
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.journal.is_empty()
    }
}

fn check_transaction(record: &TransactionRecord) -> Result<(), ValidationError> {
    if record.amount.is_positive() {
        Ok(())
    } else {
        tracing::warn!(amount = %record.amount, "rejected transaction with non-positive amount");
        Err(ValidationError::NonPositiveAmount)
    }
}

fn check_journal_entry(entry: &JournalEntry) -> Result<(), ValidationError> {
    if entry.is_balanced() {
        Ok(())
    } else {
        tracing::warn!(
            debit = %entry.debit.amount,
            credit = %entry.credit.amount,
            "rejected unbalanced journal entry"
        );
        Err(ValidationError::DebitCreditMismatch)
    }
}
