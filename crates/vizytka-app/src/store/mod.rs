//! Session cache for the parsed contact list.
//!
//! The store is an injected load/save/clear capability keyed by a fixed
//! identifier; the parser and encoder never touch it. There are no
//! transactional guarantees — the whole list is replaced on every save.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use vizytka_core::constants::SESSION_STORE_FILE;
use vizytka_core::types::ContactRecord;

use crate::error::{AppError, AppResult};

/// Persistence capability for the session contact list.
pub trait SessionStore {
    /// Loads the saved list, or `None` when nothing has been saved yet.
    ///
    /// ## Errors
    /// Returns an error if the backing storage cannot be read or holds
    /// records violating the contact invariants.
    fn load(&self) -> AppResult<Option<Vec<ContactRecord>>>;

    /// Replaces the saved list.
    ///
    /// ## Errors
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, records: &[ContactRecord]) -> AppResult<()>;

    /// Deletes the saved list. Clearing an empty store is not an error.
    ///
    /// ## Errors
    /// Returns an error if the backing storage cannot be modified.
    fn clear(&self) -> AppResult<()>;
}

/// JSON file store under the configured state directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(SESSION_STORE_FILE),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> AppResult<Option<Vec<ContactRecord>>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Io(e)),
        };

        let records: Vec<ContactRecord> = serde_json::from_str(&raw)?;

        // The cache lives on disk and can be hand-edited; reject records
        // that no parse could have produced.
        for record in &records {
            record.check_invariants()?;
        }

        Ok(Some(records))
    }

    fn save(&self, records: &[ContactRecord]) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let raw = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, raw)?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "Session list saved");
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}
