//! Custom error types for ledger-statement
//!
//! The core ledger only ever rejects input with a [`ValidationError`]; every
//! other variant of [`LedgerError`] belongs to the outer layers (settings,
//! session persistence, export and import, CLI parsing).

use thiserror::Error;

/// Rejections raised by the ledger store when an entry is malformed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A transaction amount was zero or negative
    #[error("non-positive amount")]
    NonPositiveAmount,

    /// Journal debit and credit differ, or one of them is not positive
    #[error("debit/credit mismatch")]
    DebitCreditMismatch,
}

/// The main error type for ledger-statement operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Entry rejected by the ledger store
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Unparseable user input (dates, amounts)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Session persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl LedgerError {
    /// Create a "not found" error for a category label missing from the taxonomy
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The validation failure behind this error, if any
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger-statement operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::NonPositiveAmount.to_string(),
            "non-positive amount"
        );
        assert_eq!(
            ValidationError::DebitCreditMismatch.to_string(),
            "debit/credit mismatch"
        );
    }

    #[test]
    fn test_validation_wraps_into_ledger_error() {
        let err: LedgerError = ValidationError::DebitCreditMismatch.into();
        assert!(err.is_validation());
        assert_eq!(err.validation(), Some(ValidationError::DebitCreditMismatch));
        assert_eq!(err.to_string(), "Validation error: debit/credit mismatch");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::category_not_found("Groceries");
        assert_eq!(err.to_string(), "Category not found: Groceries");
        assert!(err.is_not_found());
        assert!(err.validation().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
