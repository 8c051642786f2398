//! Database Connection and Setup
//!
//! Manages the shared SQLite connection and migrations.

use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

use crate::domain::{DomainError, DomainResult};

/// Shared connection handle handed to every repository
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Database state wrapper
///
/// Holds the connection string and opens the database on first use. Every
/// later call gets the same connection back.
pub struct DbState {
    database_url: String,
    conn: OnceCell<SharedConnection>,
}

impl DbState {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            conn: OnceCell::new(),
        }
    }

    /// Get a connection, initializing if necessary
    pub async fn get_connection(&self) -> DomainResult<SharedConnection> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                log::info!("Opening database at {}", self.database_url);
                let conn = open_connection(&self.database_url)?;
                Ok::<_, DomainError>(Arc::new(Mutex::new(conn)))
            })
            .await?;
        Ok(conn.clone())
    }

    #[cfg(test)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.conn.initialized()
    }
}

/// Map a storage error into the domain error type
pub(crate) fn db_err(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

/// Current time in Unix milliseconds
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Strip the optional `sqlite://` scheme from a connection string
fn database_path(database_url: &str) -> &str {
    database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url)
}

/// Open the database behind a connection string and bring its schema up to date
fn open_connection(database_url: &str) -> DomainResult<Connection> {
    let path = database_path(database_url);
    if path.is_empty() {
        return Err(DomainError::InvalidInput("Empty database path".to_string()));
    }

    let conn = if path == ":memory:" {
        Connection::open_in_memory()
    } else {
        Connection::open(path)
    }
    .map_err(|e| DomainError::Internal(format!("Failed to open database: {}", e)))?;

    run_migrations(&conn)?;
    Ok(conn)
}

/// Run database migrations
///
/// The three tables are independent: no foreign keys, integrity between them
/// is up to the repositories. `position` stores a record's `order`.
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS boards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS lists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            board_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS cards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            list_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_lists_board ON lists(board_id);
        CREATE INDEX IF NOT EXISTS idx_cards_list ON cards(list_id);",
    )
    .map_err(|e| DomainError::Internal(format!("Migration failed: {}", e)))
}
