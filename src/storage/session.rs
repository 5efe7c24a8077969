//! Session snapshot repository
//!
//! Persists the ledger of the current session to `session.json` so that
//! separate CLI invocations share one session until it is reset.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::ledger::LedgerStore;
use crate::models::{JournalLine, TransactionRecord};

use super::file_io::{read_json, write_json_atomic};

const SESSION_SCHEMA_VERSION: u32 = 1;

/// Serializable session data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    #[serde(default)]
    schema_version: u32,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
    #[serde(default)]
    journal: Vec<JournalLine>,
}

/// Repository for the session snapshot
pub struct SessionRepository {
    path: PathBuf,
}

impl SessionRepository {
    /// Create a new session repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Whether a session has been saved
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the saved session, or an empty ledger if none exists
    ///
    /// Records are re-validated; a snapshot holding an invalid entry is
    /// reported as a storage error rather than partially loaded.
    pub fn load(&self) -> Result<LedgerStore, LedgerError> {
        let data: SessionData = read_json(&self.path)?;

        if data.schema_version > SESSION_SCHEMA_VERSION {
            return Err(LedgerError::Storage(format!(
                "Session schema version {} is newer than supported version {}",
                data.schema_version, SESSION_SCHEMA_VERSION
            )));
        }

        let store = LedgerStore::from_parts(data.transactions, data.journal).map_err(|e| {
            LedgerError::Storage(format!(
                "Session file {} contains an invalid entry: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(
            transactions = store.transaction_count(),
            journal_lines = store.journal_line_count(),
            "session loaded"
        );
        Ok(store)
    }

    /// Save the ledger as the current session
    pub fn save(&self, store: &LedgerStore) -> Result<(), LedgerError> {
        let data = SessionData {
            schema_version: SESSION_SCHEMA_VERSION,
            saved_at: Some(Utc::now()),
            transactions: store.transactions().to_vec(),
            journal: store.journal_lines().to_vec(),
        };
        write_json_atomic(&self.path, &data)?;

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// End the session by removing the snapshot
    ///
    /// Returns `false` if there was no session to remove.
    pub fn reset(&self) -> Result<bool, LedgerError> {
        if !self.path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&self.path).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to remove session {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::info!(path = %self.path.display(), "session reset");
        Ok(true)
    }
}
