//! Core data models for ledger-statement
//!
//! This module contains the data structures recorded in the ledger: money
//! amounts, the category taxonomy, transaction records and journal lines.

pub mod category;
pub mod journal;
pub mod money;
pub mod transaction;

pub use category::{Category, CategoryDef, CategoryKind, StatementLine, Taxonomy, TaxonomyScheme};
pub use journal::{JournalEntry, JournalLine, JournalSide};
pub use money::{Money, MoneyParseError};
pub use transaction::TransactionRecord;
