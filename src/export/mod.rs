//! Export module for ledger-statement
//!
//! Provides session export and import in multiple formats:
//! - CSV: the transaction table and the general journal (spreadsheet-compatible)
//! - JSON: machine-readable full session export
//! - YAML: human-readable full session export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{
    export_journal_csv, export_transactions_csv, import_journal_csv, import_transactions_csv,
};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
