//! Display formatting for terminal output
//!
//! Formats ledger tables, the taxonomy and report helpers.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_taxonomy;
pub use transaction::{format_journal_table, format_transaction_table};
