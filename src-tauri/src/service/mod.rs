//! Service Layer
//!
//! The record access functions the frontend calls. Each one runs its store
//! calls exactly once; failures are logged with the operation name and handed
//! back to the caller unchanged.

use std::str::FromStr;
use std::sync::Arc;

use crate::domain::{Board, Card, CardPatch, DomainError, DomainResult, List};
use crate::repository::{
    BoardRepository, CardRepository, ChildRepository, DbState, ListRepository, RenameRepository,
    Repository,
};

#[cfg(test)]
mod tests;

/// What happens to dependent records when a board or list is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Remove only the record itself. Lists of a deleted board and cards of a
    /// deleted list stay in the store, unreachable from the UI.
    #[default]
    Orphan,
    /// Remove the record and everything under it
    Cascade,
}

impl FromStr for DeletePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orphan" => Ok(DeletePolicy::Orphan),
            "cascade" => Ok(DeletePolicy::Cascade),
            other => Err(DomainError::InvalidInput(format!("unknown delete policy {:?}", other))),
        }
    }
}

/// Names and titles must be present on create; whitespace alone does not count
fn required(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

/// Log a failed operation and pass the result through
fn logged<T>(operation: &str, result: DomainResult<T>) -> DomainResult<T> {
    match &result {
        Err(e) if e.is_not_found() => log::warn!("{}: {}", operation, e),
        Err(e) => log::error!("Error {}: {}", operation, e),
        Ok(_) => {}
    }
    result
}

/// Board, list and card access over one shared database
pub struct KanbanService {
    boards: BoardRepository,
    lists: ListRepository,
    cards: CardRepository,
    delete_policy: DeletePolicy,
}

impl KanbanService {
    pub fn new(db: Arc<DbState>, delete_policy: DeletePolicy) -> Self {
        Self {
            boards: BoardRepository::new(db.clone()),
            lists: ListRepository::new(db.clone()),
            cards: CardRepository::new(db),
            delete_policy,
        }
    }

    // ========================================================================
    // Boards
    // ========================================================================

    /// All boards, newest first
    pub async fn list_boards(&self) -> DomainResult<Vec<Board>> {
        logged("fetching boards", self.boards.list().await)
    }

    pub async fn get_board(&self, id: u32) -> DomainResult<Board> {
        let result = match self.boards.find_by_id(id).await {
            Ok(Some(board)) => Ok(board),
            Ok(None) => Err(DomainError::NotFound(format!("Board {}", id))),
            Err(e) => Err(e),
        };
        logged("fetching board", result)
    }

    pub async fn create_board(&self, name: &str) -> DomainResult<Board> {
        let result = match required("board name", name) {
            Ok(()) => self.boards.create(&Board::new(name)).await,
            Err(e) => Err(e),
        };
        if let Ok(board) = &result {
            log::info!("Created board {} ({:?})", board.id, board.name);
        }
        logged("creating board", result)
    }

    pub async fn rename_board(&self, id: u32, name: &str) -> DomainResult<()> {
        logged("updating board", self.boards.rename(id, name).await)
    }

    pub async fn delete_board(&self, id: u32) -> DomainResult<()> {
        let result = match self.delete_policy {
            DeletePolicy::Orphan => self.boards.delete(id).await,
            DeletePolicy::Cascade => self.cascade_delete_board(id).await,
        };
        logged("deleting board", result)
    }

    async fn cascade_delete_board(&self, id: u32) -> DomainResult<()> {
        for list in self.lists.list_by_parent(id).await? {
            self.cards.delete_by_parent(list.id).await?;
        }
        let removed = self.lists.delete_by_parent(id).await?;
        log::debug!("Cascade removed {} lists of board {}", removed, id);
        self.boards.delete(id).await
    }

    // ========================================================================
    // Lists
    // ========================================================================

    /// Lists of a board, `order` ascending
    pub async fn list_lists(&self, board_id: u32) -> DomainResult<Vec<List>> {
        logged("fetching lists", self.lists.list_by_parent(board_id).await)
    }

    pub async fn create_list(&self, board_id: u32, name: &str) -> DomainResult<List> {
        let result = match required("list name", name) {
            Ok(()) => self.lists.create(&List::new(board_id, name)).await,
            Err(e) => Err(e),
        };
        logged("creating list", result)
    }

    pub async fn rename_list(&self, id: u32, name: &str) -> DomainResult<()> {
        logged("updating list", self.lists.rename(id, name).await)
    }

    pub async fn delete_list(&self, id: u32) -> DomainResult<()> {
        let result = match self.delete_policy {
            DeletePolicy::Orphan => self.lists.delete(id).await,
            DeletePolicy::Cascade => self.cascade_delete_list(id).await,
        };
        logged("deleting list", result)
    }

    async fn cascade_delete_list(&self, id: u32) -> DomainResult<()> {
        let removed = self.cards.delete_by_parent(id).await?;
        log::debug!("Cascade removed {} cards of list {}", removed, id);
        self.lists.delete(id).await
    }

    // ========================================================================
    // Cards
    // ========================================================================

    /// Cards of a list, `order` ascending
    pub async fn list_cards(&self, list_id: u32) -> DomainResult<Vec<Card>> {
        logged("fetching cards", self.cards.list_by_parent(list_id).await)
    }

    pub async fn create_card(&self, list_id: u32, title: &str) -> DomainResult<Card> {
        let result = match required("card title", title) {
            Ok(()) => self.cards.create(&Card::new(list_id, title)).await,
            Err(e) => Err(e),
        };
        logged("creating card", result)
    }

    /// Apply only the fields present in `patch`; an empty patch is a no-op
    pub async fn update_card(&self, id: u32, patch: &CardPatch) -> DomainResult<()> {
        logged("updating card", self.cards.update(id, patch).await)
    }

    pub async fn delete_card(&self, id: u32) -> DomainResult<()> {
        logged("deleting card", self.cards.delete(id).await)
    }
}
