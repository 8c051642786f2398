//! List Repository
//!
//! SQLite-backed storage for lists. Lists reference their board by id only.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::domain::{DomainResult, List};
use super::db::{db_err, now_millis, DbState};
use super::positioning::{next_position, OrderedTable};
use super::traits::{ChildRepository, RenameRepository, Repository};

const LIST_COLUMNS: &str = "id, name, board_id, position, created_at, updated_at";

/// SQLite implementation of List repository
pub struct ListRepository {
    db: Arc<DbState>,
}

impl ListRepository {
    pub fn new(db: Arc<DbState>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<List> for ListRepository {
    /// Insert a list after the last list of its board
    async fn create(&self, entity: &List) -> DomainResult<List> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        let order = next_position(&conn, OrderedTable::Lists, entity.board_id)?;
        let now = now_millis();
        conn.execute(
            "INSERT INTO lists (name, board_id, position, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
            params![entity.name, entity.board_id, order, now, now],
        )
        .map_err(db_err)?;

        Ok(List {
            id: conn.last_insert_rowid() as u32,
            name: entity.name.clone(),
            board_id: entity.board_id,
            order,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<List>> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.query_row(
            &format!("SELECT {} FROM lists WHERE id = ?", LIST_COLUMNS),
            params![id],
            row_to_list,
        )
        .optional()
        .map_err(db_err)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.execute("DELETE FROM lists WHERE id = ?", params![id])
            .map_err(db_err)?;
        Ok(())
    }
}

#[async_trait]
impl RenameRepository<List> for ListRepository {
    async fn rename(&self, id: u32, name: &str) -> DomainResult<()> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.execute(
            "UPDATE lists SET name = ?, updated_at = ? WHERE id = ?",
            params![name, now_millis(), id],
        )
        .map_err(db_err)?;
        Ok(())
    }
}

#[async_trait]
impl ChildRepository<List> for ListRepository {
    async fn list_by_parent(&self, board_id: u32) -> DomainResult<Vec<List>> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM lists WHERE board_id = ? ORDER BY position ASC, id ASC",
                LIST_COLUMNS
            ))
            .map_err(db_err)?;
        let lists = stmt
            .query_map(params![board_id], row_to_list)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(lists)
    }

    async fn delete_by_parent(&self, board_id: u32) -> DomainResult<usize> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.execute("DELETE FROM lists WHERE board_id = ?", params![board_id])
            .map_err(db_err)
    }
}

/// Convert a database row to List
fn row_to_list(row: &Row<'_>) -> rusqlite::Result<List> {
    Ok(List {
        id: row.get(0)?,
        name: row.get(1)?,
        board_id: row.get(2)?,
        order: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
