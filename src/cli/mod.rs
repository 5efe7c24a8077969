//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger, reports and storage layers.

pub mod category;
pub mod export;
pub mod import;
pub mod journal;
pub mod report;
pub mod session;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use import::{handle_import_command, ImportCommands};
pub use journal::{handle_journal_command, JournalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use session::{handle_session_command, SessionCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{Local, NaiveDate};

use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, Taxonomy};
use crate::storage::Storage;

/// Everything a command handler needs: storage, settings and the taxonomy
pub struct CliContext {
    pub storage: Storage,
    pub settings: Settings,
    pub taxonomy: Taxonomy,
}

impl CliContext {
    /// Resolve paths, load settings and the taxonomy, and open storage
    pub fn load(paths: LedgerPaths) -> LedgerResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let taxonomy = settings.load_taxonomy(&paths)?;
        let storage = Storage::new(paths)?;
        tracing::debug!(
            categories = taxonomy.len(),
            session = %storage.session.path().display(),
            "cli context loaded"
        );

        Ok(Self {
            storage,
            settings,
            taxonomy,
        })
    }

    /// Resolve a category label against the active taxonomy
    pub fn category(&self, label: &str) -> LedgerResult<Category> {
        self.taxonomy
            .resolve(label)
            .ok_or_else(|| LedgerError::category_not_found(label))
    }
}

/// Parse a YYYY-MM-DD date, defaulting to today when absent
pub fn parse_date_or_today(value: Option<&str>) -> LedgerResult<NaiveDate> {
    match value {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Parse(format!(
            "Invalid date format: {}. Use YYYY-MM-DD",
            value
        ))
    })
}

/// Parse a user-entered amount
pub fn parse_amount(value: &str) -> LedgerResult<Money> {
    Money::parse(value).map_err(|e| LedgerError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
        assert!(matches!(parse_date("31/01/2024"), Err(LedgerError::Parse(_))));
        assert_eq!(parse_date_or_today(None).unwrap(), Local::now().date_naive());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("₹1,000.50").unwrap(), Money::from_cents(100_050));
        assert!(matches!(parse_amount("ten"), Err(LedgerError::Parse(_))));
    }

    #[test]
    fn test_context_resolves_categories() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = CliContext::load(LedgerPaths::with_base_dir(temp_dir.path().to_path_buf()))
            .unwrap();

        assert_eq!(ctx.category("rent expense").unwrap().label(), "Rent Expense");
        assert!(ctx.category("Groceries").unwrap_err().is_not_found());
    }
}
