//! View State Stores
//!
//! Local mirrors of server state for the two pages, using Leptos
//! reactive_stores for field-level reactivity. The helpers below only ever
//! run after the backend has confirmed a write.

use std::collections::HashMap;
use std::future::Future;

use reactive_stores::Store;
use crate::models::{Board, Card, List};

/// Cards of each list, keyed by list id
pub type CardMap = HashMap<u32, Vec<Card>>;

/// Board collection page state
#[derive(Clone, Debug, Default, Store)]
pub struct BoardsState {
    /// Newest first, as the backend returns them
    pub boards: Vec<Board>,
}

/// Single board page state
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Lists of the open board, `order` ascending
    pub lists: Vec<List>,
    pub cards: CardMap,
    /// Bumped by every card reload; only the newest reload may write `cards`
    pub card_generation: u64,
}

/// Trim user input; `None` when nothing is left
pub fn trimmed_non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Short description shown under a card title (first two lines, clipped)
pub fn description_preview(description: &str) -> Option<String> {
    const MAX_CHARS: usize = 100;

    let text = description.trim();
    if text.is_empty() {
        return None;
    }
    let joined = text.lines().take(2).collect::<Vec<_>>().join(" ");
    let clipped = joined.chars().count() > MAX_CHARS || text.lines().count() > 2;
    let mut preview: String = joined.chars().take(MAX_CHARS).collect();
    if clipped {
        preview.push('…');
    }
    Some(preview)
}

// ========================
// Board collection
// ========================

/// A freshly created board goes to the front, matching the newest-first sort
pub fn prepend_board(boards: &mut Vec<Board>, board: Board) {
    boards.insert(0, board);
}

pub fn rename_board(boards: &mut [Board], id: u32, name: &str) {
    if let Some(board) = boards.iter_mut().find(|b| b.id == id) {
        board.name = name.to_string();
    }
}

pub fn remove_board(boards: &mut Vec<Board>, id: u32) {
    boards.retain(|b| b.id != id);
}

// ========================
// Lists and cards
// ========================

pub fn append_list(lists: &mut Vec<List>, list: List) {
    lists.push(list);
}

pub fn rename_list(lists: &mut [List], id: u32, name: &str) {
    if let Some(list) = lists.iter_mut().find(|l| l.id == id) {
        list.name = name.to_string();
    }
}

pub fn remove_list(lists: &mut Vec<List>, id: u32) {
    lists.retain(|l| l.id != id);
}

pub fn list_ids(lists: &[List]) -> Vec<u32> {
    lists.iter().map(|l| l.id).collect()
}

/// Add a new card at the end of its list only
pub fn append_card(cards: &mut CardMap, card: Card) {
    cards.entry(card.list_id).or_default().push(card);
}

pub fn remove_card(cards: &mut CardMap, list_id: u32, card_id: u32) {
    if let Some(list_cards) = cards.get_mut(&list_id) {
        list_cards.retain(|c| c.id != card_id);
    }
}

/// Start a card reload and return its generation
pub fn begin_card_reload(generation: &mut u64) -> u64 {
    *generation = generation.wrapping_add(1);
    *generation
}

/// Hand back `cards` only if no reload started after `generation`
pub fn latest_card_reload(current: u64, generation: u64, cards: CardMap) -> Option<CardMap> {
    (current == generation).then_some(cards)
}

/// Fetch the cards of every list, one list at a time in the given order
///
/// The first failure aborts the whole fetch so a partial map never replaces
/// the current one.
pub async fn fetch_card_map<F, Fut>(list_ids: &[u32], mut fetch: F) -> Result<CardMap, String>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<Card>, String>>,
{
    let mut cards = CardMap::with_capacity(list_ids.len());
    for &list_id in list_ids {
        let list_cards = fetch(list_id).await?;
        cards.insert(list_id, list_cards);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn board(id: u32, name: &str) -> Board {
        Board { id, name: name.to_string(), created_at: id as i64, updated_at: id as i64 }
    }

    fn list(id: u32, board_id: u32, order: i32) -> List {
        List { id, name: format!("list {}", id), board_id, order, created_at: 0, updated_at: 0 }
    }

    fn card(id: u32, list_id: u32, order: i32) -> Card {
        Card {
            id,
            title: format!("card {}", id),
            description: String::new(),
            list_id,
            order,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_trimmed_non_empty() {
        assert_eq!(trimmed_non_empty("  Roadmap \n"), Some("Roadmap".to_string()));
        assert_eq!(trimmed_non_empty("   "), None);
        assert_eq!(trimmed_non_empty(""), None);
    }

    #[test]
    fn test_description_preview() {
        assert_eq!(description_preview(""), None);
        assert_eq!(description_preview("  \n "), None);
        assert_eq!(description_preview("draft v1"), Some("draft v1".to_string()));
        assert_eq!(description_preview("a\nb\nc"), Some("a b…".to_string()));

        let long = "x".repeat(150);
        let preview = description_preview(&long).unwrap();
        assert_eq!(preview.chars().count(), 101);
        assert!(preview.ends_with('…'));
    }

    #[test]
    fn test_board_collection_reconciliation() {
        let mut boards = vec![board(2, "Second"), board(1, "First")];

        prepend_board(&mut boards, board(3, "Third"));
        assert_eq!(boards.iter().map(|b| b.id).collect::<Vec<_>>(), vec![3, 2, 1]);

        rename_board(&mut boards, 2, "Renamed");
        assert_eq!(boards[1].name, "Renamed");
        assert_eq!(boards[1].created_at, 2);

        // unknown id leaves the copy alone
        rename_board(&mut boards, 99, "Ghost");
        remove_board(&mut boards, 99);
        assert_eq!(boards.len(), 3);

        remove_board(&mut boards, 3);
        assert_eq!(boards.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn test_list_reconciliation() {
        let mut lists = vec![list(1, 7, 0)];
        append_list(&mut lists, list(2, 7, 1));
        rename_list(&mut lists, 1, "Todo");
        assert_eq!(lists[0].name, "Todo");
        assert_eq!(lists[0].order, 0);

        remove_list(&mut lists, 1);
        assert_eq!(list_ids(&lists), vec![2]);
    }

    #[test]
    fn test_card_patches_touch_only_their_list() {
        let mut cards = CardMap::new();
        cards.insert(1, vec![card(10, 1, 0)]);
        cards.insert(2, vec![card(20, 2, 0)]);

        append_card(&mut cards, card(11, 1, 1));
        assert_eq!(cards[&1].len(), 2);
        assert_eq!(cards[&2], vec![card(20, 2, 0)]);

        remove_card(&mut cards, 1, 10);
        assert_eq!(cards[&1], vec![card(11, 1, 1)]);
        assert_eq!(cards[&2].len(), 1);

        // card for a list that was never fetched gets its own entry
        append_card(&mut cards, card(30, 3, 0));
        assert_eq!(cards[&3].len(), 1);
    }

    #[tokio::test]
    async fn test_older_card_reload_finishing_last_is_dropped() {
        let mut state = BoardState::default();
        let first = begin_card_reload(&mut state.card_generation);
        let second = begin_card_reload(&mut state.card_generation);
        assert!(second > first);

        // the newer reload lands first
        let newer = fetch_card_map(&[1], |id| async move { Ok(vec![card(11, id, 0)]) }).await.unwrap();
        if let Some(cards) = latest_card_reload(state.card_generation, second, newer) {
            state.cards = cards;
        }

        // the older one arrives afterwards with stale data
        let older = fetch_card_map(&[1], |_| async { Ok(Vec::new()) }).await.unwrap();
        assert_eq!(latest_card_reload(state.card_generation, first, older), None);
        assert_eq!(state.cards[&1], vec![card(11, 1, 0)]);
    }

    #[tokio::test]
    async fn test_fetch_card_map_is_sequential() {
        let calls = RefCell::new(Vec::new());
        let map = fetch_card_map(&[5, 3, 9], |list_id| {
            calls.borrow_mut().push(list_id);
            async move { Ok(vec![card(list_id * 10, list_id, 0)]) }
        })
        .await
        .unwrap();

        assert_eq!(*calls.borrow(), vec![5, 3, 9]);
        assert_eq!(map.len(), 3);
        assert_eq!(map[&3][0].id, 30);
    }

    #[tokio::test]
    async fn test_fetch_card_map_stops_on_first_error() {
        let calls = RefCell::new(Vec::new());
        let result = fetch_card_map(&[1, 2, 3], |list_id| {
            calls.borrow_mut().push(list_id);
            async move {
                if list_id == 2 {
                    Err("Internal error: disk I/O".to_string())
                } else {
                    Ok(Vec::new())
                }
            }
        })
        .await;

        assert_eq!(result.unwrap_err(), "Internal error: disk I/O");
        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_fetch_card_map_empty_board() {
        let map = fetch_card_map(&[], |_| async { Ok(Vec::new()) }).await.unwrap();
        assert!(map.is_empty());
    }
}
