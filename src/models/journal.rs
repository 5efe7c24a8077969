//! General journal model
//!
//! A journal entry is submitted as a debit side and a credit side and is
//! stored as two [`JournalLine`]s sharing one date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// One line of the general journal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    pub date: NaiveDate,

    /// Account name as entered (e.g., "Cash", "Accounts Payable")
    pub account_name: String,

    /// Account type from the active taxonomy
    pub account_type: Category,

    pub debit: Money,

    pub credit: Money,
}

impl JournalLine {
    /// Whether this is the debit half of a pair
    pub fn is_debit(&self) -> bool {
        self.debit.is_positive() && self.credit.is_zero()
    }

    /// Whether this is the credit half of a pair
    pub fn is_credit(&self) -> bool {
        self.credit.is_positive() && self.debit.is_zero()
    }
}

/// One side of a journal entry as submitted by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalSide {
    pub account_name: String,
    pub account_type: Category,
    pub amount: Money,
}

impl JournalSide {
    pub fn new(account_name: impl Into<String>, account_type: Category, amount: Money) -> Self {
        Self {
            account_name: account_name.into().trim().to_string(),
            account_type,
            amount,
        }
    }
}

/// A double-entry submission: one debit and one credit on the same date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub debit: JournalSide,
    pub credit: JournalSide,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, debit: JournalSide, credit: JournalSide) -> Self {
        Self {
            date,
            debit,
            credit,
        }
    }

    /// Both amounts are positive and equal
    pub fn is_balanced(&self) -> bool {
        self.debit.amount.is_positive() && self.debit.amount == self.credit.amount
    }

    /// The two journal lines this entry produces, debit first
    pub fn into_lines(self) -> [JournalLine; 2] {
        [
            JournalLine {
                date: self.date,
                account_name: self.debit.account_name,
                account_type: self.debit.account_type,
                debit: self.debit.amount,
                credit: Money::zero(),
            },
            JournalLine {
                date: self.date,
                account_name: self.credit.account_name,
                account_type: self.credit.account_type,
                debit: Money::zero(),
                credit: self.credit.amount,
            },
        ]
    }

    /// Rebuild an entry from a debit line followed by its credit line
    ///
    /// Returns `None` when the lines are not shaped like a pair (wrong sides
    /// or different dates). Amount equality is left to the ledger.
    pub fn from_lines(debit: &JournalLine, credit: &JournalLine) -> Option<Self> {
        if debit.date != credit.date || !debit.credit.is_zero() || !credit.debit.is_zero() {
            return None;
        }

        Some(Self::new(
            debit.date,
            JournalSide::new(
                debit.account_name.clone(),
                debit.account_type.clone(),
                debit.debit,
            ),
            JournalSide::new(
                credit.account_name.clone(),
                credit.account_type.clone(),
                credit.credit,
            ),
        ))
    }
}
