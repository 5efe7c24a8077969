//! Transaction record model
//!
//! A single categorized amount entered on a given date. Records are
//! immutable once they are appended to the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// A categorized financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction date
    pub date: NaiveDate,

    /// Category from the active taxonomy
    pub category: Category,

    /// Free-text description
    #[serde(default)]
    pub details: String,

    /// Amount; the ledger only accepts strictly positive values
    pub amount: Money,
}

impl TransactionRecord {
    /// Create a new transaction record
    pub fn new(
        date: NaiveDate,
        category: Category,
        details: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            category,
            details: details.into().trim().to_string(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_details() {
        let record = TransactionRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Category::new("Rent Expense"),
            "  January rent ",
            Money::from_units(100),
        );
        assert_eq!(record.details, "January rent");
        assert_eq!(record.category.label(), "Rent Expense");
    }

    #[test]
    fn test_serialization() {
        let record = TransactionRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Category::new("Utilities"),
            "",
            Money::from_cents(1250),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"date\":\"2024-01-01\""));
        assert!(json.contains("\"category\":\"Utilities\""));
        assert!(json.contains("\"amount\":1250"));

        let back: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
