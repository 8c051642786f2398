//! Board View Component
//!
//! Single board page. `BoardPage` loads the board and its lists, then hands
//! them to `BoardView`, which owns the card fetch and the list columns.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ListColumn, NewNameForm, NotFound};
use crate::context::{spawn_action, AppContext, BoardContext, Page};
use crate::models::Board;
use crate::store::{self, BoardState, BoardStateStoreFields};

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Ready(Board),
    NotFound,
}

/// Load a board and its lists; any failure shows the not-found page
#[component]
pub fn BoardPage(board_id: u32) -> impl IntoView {
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let state = Store::new(BoardState::default());

    spawn_local(async move {
        let loaded = async {
            let board = commands::get_board(board_id).await?;
            let lists = commands::list_lists(board_id).await?;
            Ok::<_, String>((board, lists))
        }
        .await;

        match loaded {
            Ok((board, lists)) => {
                state.lists().set(lists);
                set_load_state.set(LoadState::Ready(board));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[BOARD] Failed to load board {}: {}", board_id, e).into());
                set_load_state.set(LoadState::NotFound);
            }
        }
    });

    move || match load_state.get() {
        LoadState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
        LoadState::Ready(board) => view! { <BoardView board=board state=state /> }.into_any(),
        LoadState::NotFound => view! { <NotFound /> }.into_any(),
    }
}

/// Lists of a loaded board, left to right by order
#[component]
pub fn BoardView(board: Board, state: Store<BoardState>) -> impl IntoView {
    let app = use_context::<AppContext>().expect("AppContext should be provided");
    let ctx = BoardContext::new(board.id, state);
    provide_context(ctx);

    // Only list create/delete changes the ids; renames do not refetch cards
    let list_ids = Memo::new(move |_| state.lists().with(|lists| store::list_ids(lists)));

    Effect::new(move |_| {
        list_ids.track();
        spawn_action("load cards", ctx.reload_cards());
    });

    let back = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        app.go_home();
    };

    view! {
        <section class="board-view">
            <div class="board-header">
                <a class="back-link" href=Page::Boards.to_hash() on:click=back>"← Back"</a>
                <h2 class="board-title">{board.name}</h2>
            </div>

            <div class="list-row">
                <For
                    each=move || state.lists().get()
                    key=|list| (list.id, list.name.clone())
                    children=move |list| view! { <ListColumn list=list /> }
                />

                <NewNameForm
                    class="new-list-form"
                    placeholder="New list name..."
                    button_label="Add list"
                    on_submit=move |name: String| spawn_action("create list", ctx.create_list(name))
                />
            </div>
        </section>
    }
}
