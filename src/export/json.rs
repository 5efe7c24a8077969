//! JSON Export functionality
//!
//! Exports the complete session (both tables, the taxonomy in use and the
//! derived statement figures) to JSON with schema versioning.

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerStore;
use crate::models::{JournalLine, Taxonomy, TransactionRecord};
use crate::reports::{IncomeStatement, StatementFigures};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full session export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Category table the entries were recorded against
    pub taxonomy: Taxonomy,

    /// All transactions, in insertion order
    pub transactions: Vec<TransactionRecord>,

    /// All journal lines, in insertion order
    pub journal: Vec<JournalLine>,

    /// Statement figures at export time; informational only
    pub statement: StatementFigures,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,

    pub journal_line_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from the session ledger
    pub fn from_store(store: &LedgerStore, taxonomy: &Taxonomy) -> Self {
        let transactions = store.transactions().to_vec();
        let journal = store.journal_lines().to_vec();

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            journal_line_count: journal.len(),
            earliest_transaction,
            latest_transaction,
        };

        let statement = IncomeStatement::generate(&transactions, taxonomy).figures;

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            taxonomy: taxonomy.clone(),
            transactions,
            journal,
            statement,
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        self.taxonomy.validate()?;

        for txn in &self.transactions {
            if self.taxonomy.find(txn.category.label()).is_none() {
                return Err(format!(
                    "Transaction on {} references unknown category {}",
                    txn.date, txn.category
                ));
            }
        }

        for line in &self.journal {
            if self.taxonomy.find(line.account_type.label()).is_none() {
                return Err(format!(
                    "Journal line for {} references unknown account type {}",
                    line.account_name, line.account_type
                ));
            }
        }

        Ok(())
    }

    /// Rebuild the ledger from this export
    ///
    /// Every category and account type is resolved against `taxonomy` and
    /// stored under its canonical label, so statement lookups see it.
    pub fn into_store(self, taxonomy: &Taxonomy) -> LedgerResult<LedgerStore> {
        let resolve = |label: &str| {
            taxonomy
                .resolve(label)
                .ok_or_else(|| LedgerError::category_not_found(label))
        };

        let transactions = self
            .transactions
            .into_iter()
            .map(|mut txn| {
                txn.category = resolve(txn.category.label())?;
                Ok(txn)
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        let journal = self
            .journal
            .into_iter()
            .map(|mut line| {
                line.account_type = resolve(line.account_type.label())?;
                Ok(line)
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        Ok(LedgerStore::from_parts(transactions, journal)?)
    }
}

/// Export the full session to JSON format
pub fn export_full_json<W: Write>(
    store: &LedgerStore,
    taxonomy: &Taxonomy,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = FullExport::from_store(store, taxonomy);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export
pub fn import_from_json(json_str: &str) -> LedgerResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| LedgerError::Import(e.to_string()))?;

    export.validate().map_err(LedgerError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, JournalEntry, JournalSide, Money};
    use chrono::NaiveDate;

    fn sample_store() -> LedgerStore {
        let mut store = LedgerStore::new();
        for (day, category, units) in [
            (5, "Sales / Service Revenue", 1000),
            (6, "Cost of Goods Sold (COGS)", 400),
            (7, "Rent Expense", 100),
        ] {
            store
                .add_transaction(TransactionRecord::new(
                    NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                    Category::new(category),
                    "",
                    Money::from_units(units),
                ))
                .unwrap();
        }
        store
            .add_journal_entry(JournalEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
                JournalSide::new("Cash", Category::new("Current Asset"), Money::from_units(50)),
                JournalSide::new("Loan", Category::new("Liabilities"), Money::from_units(50)),
            ))
            .unwrap();
        store
    }

    #[test]
    fn test_full_export_metadata() {
        let export = FullExport::from_store(&sample_store(), &Taxonomy::default());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.transaction_count, 3);
        assert_eq!(export.metadata.journal_line_count, 2);
        assert_eq!(
            export.metadata.earliest_transaction.as_deref(),
            Some("2024-01-05")
        );
        assert_eq!(
            export.metadata.latest_transaction.as_deref(),
            Some("2024-01-07")
        );
        assert_eq!(export.statement.net_profit, Money::from_units(500));
    }

    #[test]
    fn test_json_roundtrip() {
        let store = sample_store();
        let mut output = Vec::new();
        export_full_json(&store, &Taxonomy::default(), &mut output, true).unwrap();

        let json = String::from_utf8(output).unwrap();
        let imported = import_from_json(&json).unwrap();

        assert_eq!(imported.into_store(&Taxonomy::default()).unwrap(), store);
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let mut export = FullExport::from_store(&sample_store(), &Taxonomy::default());
        export.transactions[0].category = Category::new("Groceries");
        assert!(export.validate().is_err());
    }

    #[test]
    fn test_into_store_uses_canonical_labels() {
        let taxonomy = Taxonomy::default();
        let mut export = FullExport::from_store(&sample_store(), &taxonomy);
        export.transactions[2].category = Category::new("rent expense");
        export.journal[1].account_type = Category::new("LIABILITIES");

        let json = serde_json::to_string(&export).unwrap();
        let store = import_from_json(&json).unwrap().into_store(&taxonomy).unwrap();

        assert_eq!(store.transactions()[2].category.label(), "Rent Expense");
        assert_eq!(store.journal_lines()[1].account_type.label(), "Liabilities");

        let statement = IncomeStatement::generate(store.transactions(), &taxonomy);
        assert_eq!(statement.figures.rent, Money::from_units(100));
        assert_eq!(statement.figures.net_profit, Money::from_units(500));
    }

    #[test]
    fn test_into_store_rejects_label_outside_taxonomy() {
        let export = FullExport::from_store(&sample_store(), &Taxonomy::default());
        let err = export.into_store(&Taxonomy::broad()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validate_rejects_schema_mismatch() {
        let mut export = FullExport::from_store(&sample_store(), &Taxonomy::default());
        export.schema_version = "0.0.1".into();
        assert!(export.validate().unwrap_err().contains("Schema version"));
    }
}
