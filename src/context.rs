//! Application Context
//!
//! Shared state provided via Leptos Context API: page navigation for the
//! whole app, and the board page's backend actions.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::models::CardPatch;
use crate::store::{self, BoardState, BoardStateStoreFields};

/// The two pages of the app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Board collection (root)
    Boards,
    /// One board, by id
    Board(u32),
}

impl Page {
    /// Parse a location hash such as `#/board/12`. Anything unrecognised is the root page.
    pub fn from_hash(hash: &str) -> Self {
        hash.trim_start_matches('#')
            .trim_start_matches('/')
            .strip_prefix("board/")
            .and_then(|id| id.trim_end_matches('/').parse().ok())
            .map(Page::Board)
            .unwrap_or(Page::Boards)
    }

    pub fn to_hash(self) -> String {
        match self {
            Page::Boards => "#/".to_string(),
            Page::Board(id) => format!("#/board/{}", id),
        }
    }
}

/// Current `window.location.hash`
pub fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

/// Run a UI action in the background, logging failures to the console
///
/// Failed actions leave local state as it was; there is no rollback to do
/// because nothing is applied before the backend confirms.
pub fn spawn_action<F>(label: &'static str, action: F)
where
    F: Future<Output = Result<(), String>> + 'static,
{
    spawn_local(async move {
        if let Err(e) = action.await {
            web_sys::console::error_1(&format!("[KANBAN] {} failed: {}", label, e).into());
        }
    });
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page being shown - read
    pub page: ReadSignal<Page>,
    /// Page being shown - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Show a page and record it in the location hash
    pub fn navigate(&self, page: Page) {
        if self.page.get_untracked() != page {
            self.set_page.set(page);
        }
        let _ = window().location().set_hash(&page.to_hash());
    }

    pub fn open_board(&self, id: u32) {
        self.navigate(Page::Board(id));
    }

    pub fn go_home(&self) {
        self.navigate(Page::Boards);
    }

    /// Follow a hash change made outside the app (back/forward buttons)
    pub fn sync_from_hash(&self) {
        let page = Page::from_hash(&current_hash());
        if self.page.get_untracked() != page {
            self.set_page.set(page);
        }
    }
}

/// Actions of the open board
///
/// Each action makes its backend call first and only then patches the local
/// mirror in `store`.
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub board_id: u32,
    pub store: Store<BoardState>,
}

impl BoardContext {
    pub fn new(board_id: u32, store: Store<BoardState>) -> Self {
        Self { board_id, store }
    }

    pub async fn create_list(self, name: String) -> Result<(), String> {
        let list = commands::create_list(self.board_id, &name).await?;
        store::append_list(&mut self.store.lists().write(), list);
        Ok(())
    }

    pub async fn rename_list(self, id: u32, name: String) -> Result<(), String> {
        commands::rename_list(id, &name).await?;
        store::rename_list(&mut self.store.lists().write(), id, &name);
        Ok(())
    }

    pub async fn delete_list(self, id: u32) -> Result<(), String> {
        commands::delete_list(id).await?;
        store::remove_list(&mut self.store.lists().write(), id);
        Ok(())
    }

    pub async fn create_card(self, list_id: u32, title: String) -> Result<(), String> {
        let card = commands::create_card(list_id, &title).await?;
        store::append_card(&mut self.store.cards().write(), card);
        Ok(())
    }

    /// Write the patch, then re-fetch the cards of every list on the board
    pub async fn update_card(self, id: u32, patch: CardPatch) -> Result<(), String> {
        commands::update_card(id, &patch).await?;
        self.reload_cards().await
    }

    pub async fn delete_card(self, id: u32, list_id: u32) -> Result<(), String> {
        commands::delete_card(id).await?;
        store::remove_card(&mut self.store.cards().write(), list_id, id);
        Ok(())
    }

    /// Replace the whole card map with a fresh sequential fetch
    ///
    /// A reload that was overtaken by a later one discards its result.
    pub async fn reload_cards(self) -> Result<(), String> {
        let generation = store::begin_card_reload(&mut self.store.card_generation().write());
        let ids = self.store.lists().with_untracked(|lists| store::list_ids(lists));
        let cards = store::fetch_card_map(&ids, commands::list_cards).await?;

        let current = self.store.card_generation().get_untracked();
        match store::latest_card_reload(current, generation, cards) {
            Some(cards) => self.store.cards().set(cards),
            None => web_sys::console::log_1(&format!("[BOARD] Dropped stale card reload {}", generation).into()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_hash() {
        assert_eq!(Page::from_hash(""), Page::Boards);
        assert_eq!(Page::from_hash("#/"), Page::Boards);
        assert_eq!(Page::from_hash("#/board/12"), Page::Board(12));
        assert_eq!(Page::from_hash("#board/3/"), Page::Board(3));
        assert_eq!(Page::from_hash("#/board/abc"), Page::Boards);
        assert_eq!(Page::from_hash("#/elsewhere"), Page::Boards);
    }

    #[test]
    fn test_page_hash_round_trip() {
        for page in [Page::Boards, Page::Board(0), Page::Board(42)] {
            assert_eq!(Page::from_hash(&page.to_hash()), page);
        }
    }
}
