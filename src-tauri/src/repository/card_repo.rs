//! Card Repository
//!
//! SQLite-backed storage for cards, including partial updates.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::domain::{Card, CardPatch, DomainResult};
use super::db::{db_err, now_millis, DbState};
use super::positioning::{next_position, OrderedTable};
use super::traits::{ChildRepository, Repository};

const CARD_COLUMNS: &str = "id, title, description, list_id, position, created_at, updated_at";

/// SQLite implementation of Card repository
pub struct CardRepository {
    db: Arc<DbState>,
}

impl CardRepository {
    pub fn new(db: Arc<DbState>) -> Self {
        Self { db }
    }

    /// Apply the fields present in `patch`; absent fields keep their stored value
    ///
    /// An empty patch touches nothing, not even `updated_at`.
    pub async fn update(&self, id: u32, patch: &CardPatch) -> DomainResult<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.execute(
            "UPDATE cards SET title = COALESCE(?, title), description = COALESCE(?, description), updated_at = ? WHERE id = ?",
            params![patch.title, patch.description, now_millis(), id],
        )
        .map_err(db_err)?;
        Ok(())
    }
}

#[async_trait]
impl Repository<Card> for CardRepository {
    /// Insert a card after the last card of its list
    async fn create(&self, entity: &Card) -> DomainResult<Card> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        let order = next_position(&conn, OrderedTable::Cards, entity.list_id)?;
        let now = now_millis();
        conn.execute(
            "INSERT INTO cards (title, description, list_id, position, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![entity.title, entity.description, entity.list_id, order, now, now],
        )
        .map_err(db_err)?;

        Ok(Card {
            id: conn.last_insert_rowid() as u32,
            title: entity.title.clone(),
            description: entity.description.clone(),
            list_id: entity.list_id,
            order,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Card>> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.query_row(
            &format!("SELECT {} FROM cards WHERE id = ?", CARD_COLUMNS),
            params![id],
            row_to_card,
        )
        .optional()
        .map_err(db_err)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.execute("DELETE FROM cards WHERE id = ?", params![id])
            .map_err(db_err)?;
        Ok(())
    }
}

#[async_trait]
impl ChildRepository<Card> for CardRepository {
    async fn list_by_parent(&self, list_id: u32) -> DomainResult<Vec<Card>> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM cards WHERE list_id = ? ORDER BY position ASC, id ASC",
                CARD_COLUMNS
            ))
            .map_err(db_err)?;
        let cards = stmt
            .query_map(params![list_id], row_to_card)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(cards)
    }

    async fn delete_by_parent(&self, list_id: u32) -> DomainResult<usize> {
        let shared = self.db.get_connection().await?;
        let conn = shared.lock().await;

        conn.execute("DELETE FROM cards WHERE list_id = ?", params![list_id])
            .map_err(db_err)
    }
}

/// Convert a database row to Card
fn row_to_card(row: &Row<'_>) -> rusqlite::Result<Card> {
    Ok(Card {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        list_id: row.get(3)?,
        order: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
