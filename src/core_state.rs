//! Application state shared by every request handler.
//!
//! `CoreState` is built once at startup from configuration and handed to
//! the router. It never holds a connection itself: each operation opens
//! its own and drops it when done.

use std::path::{Path, PathBuf};

use crate::db;

/// Store handle for the advocate directory.
pub struct CoreState {
    /// SQLite database file. `None` when no database was configured.
    db_path: Option<PathBuf>,
}

impl CoreState {
    /// State backed by the database at `db_path`.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: Some(db_path.into()),
        }
    }

    /// State with no database. Every data operation fails with
    /// [`CoreError::NotConfigured`].
    pub fn unconfigured() -> Self {
        Self { db_path: None }
    }

    /// Build from an optional configured path.
    pub fn from_config(db_path: Option<PathBuf>) -> Self {
        match db_path {
            Some(path) => Self::new(path),
            None => Self::unconfigured(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.db_path.is_some()
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Open a database connection, running any pending migrations.
    pub fn open_db(&self) -> Result<rusqlite::Connection, CoreError> {
        let path = self.db_path.as_deref().ok_or(CoreError::NotConfigured)?;
        Ok(db::open_database(path)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Database not configured")]
    NotConfigured,
    #[error("Database error: {0}")]
    Database(#[from] db::DatabaseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_state_refuses_to_open() {
        let state = CoreState::unconfigured();
        assert!(!state.is_configured());
        assert!(matches!(state.open_db(), Err(CoreError::NotConfigured)));
    }

    #[test]
    fn configured_state_opens_migrated_database() {
        let dir = tempfile::tempdir().unwrap();
        let state = CoreState::new(dir.path().join("advocates.db"));

        let conn = state.open_db().unwrap();
        let tables = db::count_tables(&conn).unwrap();
        assert_eq!(tables, 4);
    }

    #[test]
    fn from_config_respects_missing_path() {
        assert!(!CoreState::from_config(None).is_configured());
        let state = CoreState::from_config(Some(PathBuf::from("/tmp/x.db")));
        assert_eq!(state.db_path(), Some(Path::new("/tmp/x.db")));
    }

    #[test]
    fn unreachable_path_is_database_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = CoreState::new(dir.path().join("missing").join("advocates.db"));
        assert!(matches!(state.open_db(), Err(CoreError::Database(_))));
    }
}
