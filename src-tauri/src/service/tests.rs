//! Service Tests
//!
//! Access functions end to end against in-memory SQLite.

use super::{DeletePolicy, KanbanService};
use crate::domain::{CardPatch, DomainError};
use crate::repository::DbState;
use std::sync::Arc;

fn service(policy: DeletePolicy) -> KanbanService {
    KanbanService::new(Arc::new(DbState::new(":memory:")), policy)
}

#[test]
fn test_delete_policy_parsing() {
    assert_eq!(DeletePolicy::default(), DeletePolicy::Orphan);
    assert_eq!("Cascade".parse::<DeletePolicy>(), Ok(DeletePolicy::Cascade));
    assert_eq!(" orphan ".parse::<DeletePolicy>(), Ok(DeletePolicy::Orphan));
    assert!(matches!("purge".parse::<DeletePolicy>(), Err(DomainError::InvalidInput(_))));
}

#[tokio::test]
async fn test_create_requires_name_or_title() {
    let svc = service(DeletePolicy::Orphan);

    let err = svc.create_board("   ").await.unwrap_err();
    assert_eq!(err, DomainError::InvalidInput("board name is required".to_string()));

    let board = svc.create_board("Roadmap").await.unwrap();
    let err = svc.create_list(board.id, "").await.unwrap_err();
    assert_eq!(err, DomainError::InvalidInput("list name is required".to_string()));

    let list = svc.create_list(board.id, "Todo").await.unwrap();
    let err = svc.create_card(list.id, "\t\n").await.unwrap_err();
    assert_eq!(err, DomainError::InvalidInput("card title is required".to_string()));

    // nothing was written and ordering is unaffected
    assert_eq!(svc.list_boards().await.unwrap().len(), 1);
    assert_eq!(list.order, 0);
    assert!(svc.list_cards(list.id).await.unwrap().is_empty());
    assert_eq!(svc.create_card(list.id, "First").await.unwrap().order, 0);
}

#[tokio::test]
async fn test_new_board_listed_first() {
    let svc = service(DeletePolicy::Orphan);

    let old = svc.create_board("Old").await.unwrap();
    let new = svc.create_board("Roadmap").await.unwrap();

    let boards = svc.list_boards().await.unwrap();
    assert_eq!(boards.iter().filter(|b| b.name == "Roadmap").count(), 1);
    assert_eq!(boards[0].id, new.id);
    assert_eq!(boards[1].id, old.id);
    assert!(new.created_at >= old.created_at);
}

#[tokio::test]
async fn test_get_missing_board_is_not_found() {
    let svc = service(DeletePolicy::Orphan);

    let err = svc.get_board(77).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err, DomainError::NotFound("Board 77".to_string()));
}

#[tokio::test]
async fn test_storage_failure_is_surfaced() {
    let svc = KanbanService::new(
        Arc::new(DbState::new("/nonexistent-dir/for/kanban/tests.db")),
        DeletePolicy::Orphan,
    );

    let err = svc.list_boards().await.unwrap_err();
    assert!(matches!(err, DomainError::Internal(_)));
    // board page treats any failure as "not found"; the error must still be distinguishable
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_list_orders_per_board() {
    let svc = service(DeletePolicy::Orphan);

    let b = svc.create_board("B").await.unwrap();
    let other = svc.create_board("Other").await.unwrap();
    svc.create_list(other.id, "noise").await.unwrap();

    let first = svc.create_list(b.id, "Todo").await.unwrap();
    let second = svc.create_list(b.id, "Done").await.unwrap();
    assert_eq!(first.order, 0);
    assert_eq!(second.order, 1);
}

#[tokio::test]
async fn test_rename_list_leaves_other_fields() {
    let svc = service(DeletePolicy::Orphan);

    let board = svc.create_board("B").await.unwrap();
    let list = svc.create_list(board.id, "Todo").await.unwrap();
    svc.rename_list(list.id, "Backlog").await.unwrap();

    let lists = svc.list_lists(board.id).await.unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, "Backlog");
    assert_eq!(lists[0].order, list.order);
    assert_eq!(lists[0].board_id, board.id);
    assert_eq!(lists[0].created_at, list.created_at);
}

#[tokio::test]
async fn test_orphan_delete_keeps_dependents() {
    let svc = service(DeletePolicy::Orphan);

    let board = svc.create_board("B").await.unwrap();
    let list = svc.create_list(board.id, "Todo").await.unwrap();
    svc.create_card(list.id, "task").await.unwrap();

    svc.delete_board(board.id).await.unwrap();
    assert!(svc.get_board(board.id).await.unwrap_err().is_not_found());
    // lists still reference the deleted board
    assert_eq!(svc.list_lists(board.id).await.unwrap().len(), 1);

    svc.delete_list(list.id).await.unwrap();
    assert!(svc.list_lists(board.id).await.unwrap().is_empty());
    assert_eq!(svc.list_cards(list.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_cascade_delete_removes_dependents() {
    let svc = service(DeletePolicy::Cascade);

    let board = svc.create_board("B").await.unwrap();
    let keep_board = svc.create_board("Keep").await.unwrap();
    let todo = svc.create_list(board.id, "Todo").await.unwrap();
    let done = svc.create_list(board.id, "Done").await.unwrap();
    let kept_list = svc.create_list(keep_board.id, "Kept").await.unwrap();
    svc.create_card(todo.id, "a").await.unwrap();
    svc.create_card(done.id, "b").await.unwrap();
    svc.create_card(kept_list.id, "c").await.unwrap();

    svc.delete_board(board.id).await.unwrap();
    assert!(svc.list_lists(board.id).await.unwrap().is_empty());
    assert!(svc.list_cards(todo.id).await.unwrap().is_empty());
    assert!(svc.list_cards(done.id).await.unwrap().is_empty());
    assert_eq!(svc.list_cards(kept_list.id).await.unwrap().len(), 1);

    svc.delete_list(kept_list.id).await.unwrap();
    assert!(svc.list_cards(kept_list.id).await.unwrap().is_empty());
    assert_eq!(svc.list_boards().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_end_to_end_card_lifecycle() {
    let svc = service(DeletePolicy::Orphan);

    let board = svc.create_board("Roadmap").await.unwrap();
    let todo = svc.create_list(board.id, "Todo").await.unwrap();
    assert_eq!(todo.order, 0);

    let card = svc.create_card(todo.id, "Write draft").await.unwrap();
    assert_eq!(card.order, 0);
    assert_eq!(card.description, "");

    svc.update_card(card.id, &CardPatch::description("draft v1")).await.unwrap();
    let cards = svc.list_cards(todo.id).await.unwrap();
    assert_eq!(cards[0].title, "Write draft");
    assert_eq!(cards[0].description, "draft v1");
    assert_eq!(cards[0].order, 0);

    // neither field supplied: legal no-op
    svc.update_card(card.id, &CardPatch::default()).await.unwrap();
    assert_eq!(svc.list_cards(todo.id).await.unwrap(), cards);

    svc.delete_card(card.id).await.unwrap();
    assert!(svc.list_cards(todo.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_shared_connection_across_operations() {
    let db = Arc::new(DbState::new(":memory:"));
    let svc = KanbanService::new(db.clone(), DeletePolicy::Orphan);
    assert!(!db.is_initialized());

    let board = svc.create_board("Shared").await.unwrap();
    // a second service on the same state sees the same in-memory database
    let other = KanbanService::new(db.clone(), DeletePolicy::Orphan);
    assert_eq!(other.get_board(board.id).await.unwrap(), board);
    assert!(db.is_initialized());
}
