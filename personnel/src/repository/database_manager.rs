use crate::error::PersonnelError;
use crate::repository::sqlite;
use crate::repository::SharedSqliteConnection;
use log::{debug, info};
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Represents parameters for initializing the database connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// SQLite database with a specific file path
    SqliteOnDisk { path: PathBuf },

    /// SQLite database that lives in memory for as long as the `DatabaseManager` does
    SqliteInMemory,
}

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

static IN_MEMORY_DATABASES: AtomicUsize = AtomicUsize::new(0);

/// Opens a new connection for every request against a fixed target.
///
/// No pooling and no retry: a connection is opened by [`DatabaseManager::connect`] and
/// closed when the last handle to it is dropped.
pub struct DatabaseManager {
    target: String,
    // Shared-cache in-memory databases vanish with their last connection
    anchor: Option<Mutex<Connection>>,
}

impl DatabaseManager {
    /// Creates a new `DatabaseManager` based on the provided configuration and makes
    /// sure the schema exists.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or the schema cannot be created.
    pub fn new(config: &DatabaseConfig) -> Result<Self, PersonnelError> {
        let manager = match config {
            DatabaseConfig::SqliteOnDisk { path } => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        fs::create_dir_all(parent)?;
                    }
                }
                Self {
                    target: path.to_string_lossy().to_string(),
                    anchor: None,
                }
            }
            DatabaseConfig::SqliteInMemory => {
                let target = format!(
                    "file:personnel_{}_{}?mode=memory&cache=shared",
                    std::process::id(),
                    IN_MEMORY_DATABASES.fetch_add(1, Ordering::SeqCst)
                );
                let anchor = open(&target)?;
                Self {
                    target,
                    anchor: Some(Mutex::new(anchor)),
                }
            }
        };

        sqlite::create_schema(&manager.connect()?)
            .map_err(|e| PersonnelError::DatabaseError(e.to_string()))?;
        info!("Database ready at {}", manager.target);

        Ok(manager)
    }

    /// Opens a fresh connection with foreign key enforcement switched on.
    ///
    /// # Errors
    /// Returns `PersonnelError::OpenDbms` if the database cannot be reached.
    pub fn connect(&self) -> Result<SharedSqliteConnection, PersonnelError> {
        debug!("Opening connection to {}", self.target);
        Ok(Arc::new(Mutex::new(open(&self.target)?)))
    }

    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.anchor.is_some()
    }
}

fn open(target: &str) -> Result<Connection, PersonnelError> {
    let connection = Connection::open(target).map_err(|e| PersonnelError::OpenDbms {
        path: target.to_string(),
        reason: e.to_string(),
    })?;
    connection.pragma_update(None, "foreign_keys", "ON")?;
    // Writers queue up behind the one holding the lock instead of failing
    connection.busy_timeout(BUSY_TIMEOUT)?;
    Ok(connection)
}
