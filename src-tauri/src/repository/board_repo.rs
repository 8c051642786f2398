//! Board Repository
//!
//! SQLite-backed storage for boards.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::domain::{Board, DomainResult};
use super::db::{db_err, now_millis, DbState};
use super::traits::{RenameRepository, Repository};

const BOARD_COLUMNS: &str = "id, name, created_at, updated_at";

/// SQLite implementation of Board repository
pub struct BoardRepository {
    db: Arc<DbState>,
}

impl BoardRepository {
    pub fn new(db: Arc<DbState>) -> Self {
        Self { db }
    }

    /// List all boards, newest first
    ///
    /// Boards created within the same millisecond fall back to id order so the
    /// latest insert still comes first.
    pub async fn list(&self) -> DomainResult<Vec<Board>> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM boards ORDER BY created_at DESC, id DESC",
                BOARD_COLUMNS
            ))
            .map_err(db_err)?;
        let boards = stmt
            .query_map([], row_to_board)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(boards)
    }
}

#[async_trait]
impl Repository<Board> for BoardRepository {
    async fn create(&self, entity: &Board) -> DomainResult<Board> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        let now = now_millis();
        conn.execute(
            "INSERT INTO boards (name, created_at, updated_at) VALUES (?, ?, ?)",
            params![entity.name, now, now],
        )
        .map_err(db_err)?;

        Ok(Board {
            id: conn.last_insert_rowid() as u32,
            name: entity.name.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Board>> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.query_row(
            &format!("SELECT {} FROM boards WHERE id = ?", BOARD_COLUMNS),
            params![id],
            row_to_board,
        )
        .optional()
        .map_err(db_err)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.execute("DELETE FROM boards WHERE id = ?", params![id])
            .map_err(db_err)?;
        Ok(())
    }
}

#[async_trait]
impl RenameRepository<Board> for BoardRepository {
    async fn rename(&self, id: u32, name: &str) -> DomainResult<()> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.execute(
            "UPDATE boards SET name = ?, updated_at = ? WHERE id = ?",
            params![name, now_millis(), id],
        )
        .map_err(db_err)?;
        Ok(())
    }
}

/// Convert a database row to Board
fn row_to_board(row: &Row<'_>) -> rusqlite::Result<Board> {
    Ok(Board {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
    })
}
