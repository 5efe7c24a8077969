//! ledger-statement - transaction ledger with income statement reporting
//!
//! Records categorized transactions and double-entry journal entries for a
//! single session and derives an income statement (gross profit, operating
//! profit, EBT, net profit and margins) from the recorded transactions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `ledger`: the append-only session store and its validation rules
//! - `reports`: the income statement engine
//! - `models`: money, category taxonomy, transaction and journal records
//! - `config`: path resolution and user settings
//! - `storage`: session snapshot persistence
//! - `export`: CSV tables and full JSON/YAML exports
//! - `display`: terminal tables
//! - `cli`: command handlers behind the `ledger` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ledger_statement::ledger::LedgerStore;
//! use ledger_statement::models::{Money, Taxonomy, TransactionRecord};
//! use ledger_statement::reports::compute_income_statement;
//!
//! let taxonomy = Taxonomy::default();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut store = LedgerStore::new();
//!
//! for (label, units) in [
//!     ("Sales / Service Revenue", 1000),
//!     ("Cost of Goods Sold (COGS)", 400),
//!     ("Rent Expense", 100),
//! ] {
//!     let category = taxonomy.resolve(label).unwrap();
//!     store
//!         .add_transaction(TransactionRecord::new(date, category, "", Money::from_units(units)))
//!         .unwrap();
//! }
//!
//! let statement = compute_income_statement(store.transactions());
//! assert_eq!(statement.figures.net_profit, Money::from_units(500));
//! assert!((statement.margins().gross_profit - 60.0).abs() < 1e-9);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult, ValidationError};
