//! Reports module for ledger-statement
//!
//! Statements derived from the ledger. Reports own no state; they are
//! computed on demand from a snapshot of the recorded transactions.

pub mod income_statement;

pub use income_statement::{
    compute_income_statement, margin, CategoryTotals, IncomeStatement, Margins, StatementFigures,
    StatementRow,
};
