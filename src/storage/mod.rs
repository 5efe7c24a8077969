//! Storage layer for ledger-statement
//!
//! Provides JSON file storage with atomic writes for the session snapshot.

pub mod file_io;
pub mod session;

pub use file_io::{read_json, read_json_optional, write_json_atomic};
pub use session::SessionRepository;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::ledger::LedgerStore;

/// Storage coordinator that owns the on-disk session
pub struct Storage {
    paths: LedgerPaths,
    pub session: SessionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            session: SessionRepository::new(paths.session_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load the current session's ledger
    pub fn load_ledger(&self) -> Result<LedgerStore, LedgerError> {
        self.session.load()
    }

    /// Persist the ledger as the current session
    pub fn save_ledger(&self, store: &LedgerStore) -> Result<(), LedgerError> {
        self.session.save(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.session.exists());
        assert!(storage.load_ledger().unwrap().is_empty());
    }
}
